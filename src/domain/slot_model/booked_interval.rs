use crate::api::booked_slot_dto::BookedSlotDto;
use crate::domain::slot_model::time_of_day::TimeOfDay;

/// An existing reservation on the displayed date, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BookedInterval {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl BookedInterval {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        BookedInterval { start, end }
    }

    /// `true` if the tick starting at `tick` falls inside this booking.
    pub fn covers(&self, tick: TimeOfDay) -> bool {
        tick >= self.start && tick < self.end
    }

    /// `true` if this booking intersects the half-open range `[start, end)`.
    pub fn overlaps(&self, start: TimeOfDay, end: TimeOfDay) -> bool {
        self.start < end && self.end > start
    }
}

/// Converts the booking list of a date, skipping entries whose times cannot be parsed.
pub fn booked_intervals_from_dto(dtos: &[BookedSlotDto]) -> Vec<BookedInterval> {
    dtos.iter()
        .filter_map(|dto| match (TimeOfDay::parse(&dto.start), TimeOfDay::parse(&dto.end)) {
            (Ok(start), Ok(end)) => Some(BookedInterval::new(start, end)),
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("Skipping booking {}-{}: {}", dto.start, dto.end, e);
                None
            }
        })
        .collect()
}

/// Checks the upstream contract that bookings of a date are sorted and disjoint.
///
/// Nothing downstream relies on the contract; the result only drives a warning.
pub fn is_sorted_and_disjoint(intervals: &[BookedInterval]) -> bool {
    intervals.windows(2).all(|pair| pair[0].end <= pair[1].start) && intervals.iter().all(|i| i.start < i.end)
}
