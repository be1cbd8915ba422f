use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::domain::slot_model::booked_interval::{BookedInterval, is_sorted_and_disjoint};
use crate::domain::slot_model::operating_window::OperatingWindow;
use crate::domain::slot_model::time_of_day::{SLOT_GRANULARITY, TimeOfDay};

/// One 15-minute row of the day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub offset: TimeOfDay,
    pub is_hour_boundary: bool,
    /// Overlaps an existing booking, or lies in the past when the date is today.
    pub is_blocked: bool,
}

/// Minutes since midnight of `now`, seconds truncated.
pub fn minutes_of(now: NaiveDateTime) -> TimeOfDay {
    TimeOfDay::from_hm(now.hour(), now.minute())
}

/// Generates the tick list of `date` from `window.start` (inclusive) to `window.end` (exclusive).
///
/// When `date` is the current date in the operating timezone the list starts no
/// earlier than the top of the current hour, and ticks before `now` are blocked.
/// A closed day (`window` is `None`) has no ticks.
pub fn generate_slots(date: NaiveDate, window: Option<&OperatingWindow>, booked: &[BookedInterval], now: NaiveDateTime) -> Vec<Slot> {
    let Some(window) = window else {
        return Vec::new();
    };

    let is_today = date == now.date();
    let now_minutes = minutes_of(now);

    let mut first_tick = window.start;
    if is_today && now_minutes.top_of_hour() > first_tick {
        first_tick = now_minutes.top_of_hour();
    }

    let mut slots = Vec::with_capacity((window.duration_minutes() / SLOT_GRANULARITY) as usize);
    let mut tick = first_tick;

    while tick < window.end {
        let is_booked = booked.iter().any(|b| b.covers(tick));
        let is_past = is_today && tick < now_minutes;

        slots.push(Slot { offset: tick, is_hour_boundary: tick.is_hour_boundary(), is_blocked: is_booked || is_past });
        tick = tick.offset_by(SLOT_GRANULARITY as i64);
    }

    slots
}

/// Everything the selection rules need to know about the displayed date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub window: Option<OperatingWindow>,
    pub booked: Vec<BookedInterval>,
    pub slots: Vec<Slot>,
}

impl DayLayout {
    pub fn build(date: NaiveDate, window: Option<OperatingWindow>, booked: Vec<BookedInterval>, now: NaiveDateTime) -> Self {
        if !is_sorted_and_disjoint(&booked) {
            log::warn!("Bookings for {} are unsorted or overlapping; blocking their union.", date);
        }

        let slots = generate_slots(date, window.as_ref(), &booked, now);
        log::debug!("Generated {} slots for {} (window: {:?}, bookings: {}).", slots.len(), date, window, booked.len());

        DayLayout { date, window, booked, slots }
    }

    /// A closed day without slots.
    pub fn closed(date: NaiveDate) -> Self {
        DayLayout { date, window: None, booked: Vec::new(), slots: Vec::new() }
    }

    pub fn slot_at(&self, tick: TimeOfDay) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.offset == tick)
    }

    pub fn first_offset(&self) -> Option<TimeOfDay> {
        self.slots.first().map(|slot| slot.offset)
    }
}
