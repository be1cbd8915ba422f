use crate::api::selection_dto::SelectionDto;
use crate::domain::slot_model::time_of_day::{SLOT_GRANULARITY, TimeOfDay};

/// Shortest bookable range in minutes; also the length of a freshly clicked selection.
pub const MIN_DURATION: u32 = 60;

/// Longest bookable range in minutes.
pub const MAX_DURATION: u32 = 180;

/// The user's chosen range `[start, end)` on the displayed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl Selection {
    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    pub fn to_dto(&self) -> SelectionDto {
        SelectionDto { start: self.start.to_string(), end: self.end.to_string(), duration_minutes: self.duration_minutes() }
    }
}

/// Vertical placement of the selection overlay inside the grid, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionGeometry {
    pub top_px: f64,
    pub height_px: f64,
}

impl SelectionGeometry {
    /// Places `selection` relative to the first rendered row at `grid_origin`.
    pub fn of(selection: &Selection, grid_origin: TimeOfDay, slot_pixel_height: f64) -> Self {
        let rows = |minutes: f64| minutes / SLOT_GRANULARITY as f64 * slot_pixel_height;

        SelectionGeometry {
            top_px: rows(selection.start.minutes() as f64 - grid_origin.minutes() as f64),
            height_px: rows(selection.duration_minutes() as f64),
        }
    }
}
