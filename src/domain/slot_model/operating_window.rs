use chrono::{Datelike, NaiveDate, Weekday};

use crate::api::operating_hours_dto::{HoursEntryDto, OperatingHoursDto};
use crate::domain::slot_model::time_of_day::TimeOfDay;
use crate::error::{Error, Result};

/// The bookable window of a single day, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl OperatingWindow {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if start >= end {
            return Err(Error::InvalidOperatingWindow { start: start.to_string(), end: end.to_string() });
        }
        Ok(OperatingWindow { start, end })
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes() - self.start.minutes()
    }
}

/// A configured opening-hours entry as received from the space settings.
/// Either bound may be missing, which makes the entry incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoursEntry {
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
}

impl HoursEntry {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        HoursEntry { start: Some(start), end: Some(end) }
    }

    /// Empty bounds count as missing. A bound that cannot be parsed is dropped
    /// with a warning, which leaves the entry incomplete.
    pub fn from_dto(dto: &HoursEntryDto) -> Self {
        HoursEntry { start: parse_bound(dto.start.as_deref()), end: parse_bound(dto.end.as_deref()) }
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// The window described by this entry.
    ///
    /// # Returns
    /// `None` (closed all day) if a bound is missing or the bounds are inverted.
    pub fn window(&self) -> Option<OperatingWindow> {
        let (start, end) = (self.start?, self.end?);
        match OperatingWindow::new(start, end) {
            Ok(window) => Some(window),
            Err(e) => {
                log::warn!("{}. Treating the space as closed.", e);
                None
            }
        }
    }
}

/// Weekday hours plus optional weekend hours of a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OperatingHours {
    pub weekday: HoursEntry,
    pub weekend: Option<HoursEntry>,
}

impl OperatingHours {
    pub fn from_dto(dto: &OperatingHoursDto) -> Self {
        OperatingHours { weekday: HoursEntry::from_dto(&dto.weekday), weekend: dto.weekend.as_ref().map(HoursEntry::from_dto) }
    }

    pub fn window_for(&self, date: NaiveDate) -> Option<OperatingWindow> {
        resolve_operating_window(date, &self.weekday, self.weekend.as_ref())
    }
}

fn parse_bound(text: Option<&str>) -> Option<TimeOfDay> {
    let text = text.map(str::trim).filter(|t| !t.is_empty())?;
    match TimeOfDay::parse(text) {
        Ok(time) => Some(time),
        Err(e) => {
            log::warn!("Ignoring operating-hours bound: {}", e);
            None
        }
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Picks the window that applies on `date`.
///
/// Weekend dates use the weekend entry only if both of its bounds are present;
/// otherwise the weekday entry applies.
pub fn resolve_operating_window(date: NaiveDate, weekday: &HoursEntry, weekend: Option<&HoursEntry>) -> Option<OperatingWindow> {
    match weekend {
        Some(weekend) if is_weekend(date) && weekend.is_complete() => weekend.window(),
        _ => weekday.window(),
    }
}
