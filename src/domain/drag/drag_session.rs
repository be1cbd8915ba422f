use std::sync::Arc;

use crate::domain::drag::pointer::{ListenerRegistration, PointerEventSource, PointerPosition};
use crate::domain::slot_model::time_of_day::{SLOT_GRANULARITY, TimeOfDay};

/// One resize gesture, from pointer-down on the handle to pointer-up or cancel.
///
/// The session owns the global listener registration, so ending the session
/// on any path releases the listeners.
#[derive(Debug)]
pub struct DragSession {
    anchor: PointerPosition,
    end_at_start: TimeOfDay,
    _registration: ListenerRegistration,
}

impl DragSession {
    pub fn start(anchor: PointerPosition, end_at_start: TimeOfDay, source: &Arc<dyn PointerEventSource>) -> Self {
        DragSession { anchor, end_at_start, _registration: ListenerRegistration::acquire(source) }
    }

    pub fn anchor(&self) -> PointerPosition {
        self.anchor
    }

    pub fn end_at_start(&self) -> TimeOfDay {
        self.end_at_start
    }

    /// Raw end offset requested by the pointer at `pointer`, in whole ticks
    /// away from where the gesture began. Not yet clamped.
    pub fn target_end(&self, pointer: PointerPosition, slot_pixel_height: f64) -> i64 {
        if slot_pixel_height <= 0.0 {
            return self.end_at_start.minutes() as i64;
        }

        let delta_slots = ((pointer.y - self.anchor.y) / slot_pixel_height).round() as i64;
        self.end_at_start.minutes() as i64 + delta_slots * SLOT_GRANULARITY as i64
    }
}
