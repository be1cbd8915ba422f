use std::sync::Arc;

use crate::domain::drag::drag_session::DragSession;
use crate::domain::drag::pointer::{GestureDisposition, PointerEvent, PointerEventSource, PointerPosition};
use crate::domain::selection::selection_engine::SelectionEngine;

/// Turns a resize gesture on the selection handle into `resize_end_to` calls.
///
/// At most one session exists per grid; a second pointer-down while dragging is
/// ignored. Ending a drag keeps whatever end the last move produced.
#[derive(Debug)]
pub struct DragController {
    source: Arc<dyn PointerEventSource>,
    slot_pixel_height: f64,
    session: Option<DragSession>,
}

impl DragController {
    pub fn new(source: Arc<dyn PointerEventSource>, slot_pixel_height: f64) -> Self {
        DragController { source, slot_pixel_height, session: None }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn slot_pixel_height(&self) -> f64 {
        self.slot_pixel_height
    }

    pub fn begin_drag(&mut self, pointer: PointerPosition, engine: &SelectionEngine) -> GestureDisposition {
        if self.session.is_some() || engine.is_read_only() {
            return GestureDisposition::IGNORED;
        }
        let Some(selection) = engine.selection() else {
            return GestureDisposition::IGNORED;
        };

        log::debug!("Resize started at y={} with end {}.", pointer.y, selection.end);
        self.session = Some(DragSession::start(pointer, selection.end, &self.source));

        GestureDisposition::CAPTURED
    }

    /// # Returns
    /// `true` if the move changed the selection end.
    pub fn on_drag_move(&mut self, pointer: PointerPosition, engine: &mut SelectionEngine) -> bool {
        let Some(session) = &self.session else {
            return false;
        };

        let target = session.target_end(pointer, self.slot_pixel_height);
        engine.resize_end_to(target)
    }

    /// Ends the gesture and releases the global listeners. Safe to call without a drag.
    pub fn end_drag(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!("Resize ended (started at y={}).", session.anchor().y);
        }
    }

    /// Routes a host pointer event to the matching gesture step.
    pub fn handle_pointer_event(&mut self, event: PointerEvent, engine: &mut SelectionEngine) -> GestureDisposition {
        match event {
            PointerEvent::Down(pointer) => self.begin_drag(pointer, engine),
            PointerEvent::Move(pointer) => {
                if !self.is_dragging() {
                    return GestureDisposition::IGNORED;
                }
                self.on_drag_move(pointer, engine);
                GestureDisposition::CAPTURED
            }
            PointerEvent::Up | PointerEvent::Cancel => {
                let was_dragging = self.is_dragging();
                self.end_drag();
                if was_dragging { GestureDisposition::CAPTURED } else { GestureDisposition::IGNORED }
            }
        }
    }
}
