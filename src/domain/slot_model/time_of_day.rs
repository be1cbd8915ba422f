use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// Width of one bookable tick in minutes.
pub const SLOT_GRANULARITY: u32 = 15;

/// A wall-clock instant as minutes since midnight, always interpreted in the
/// operating timezone of the space (never in the viewer's zone).
///
/// Valid values are `0..=1440`; `1440` is the end-of-day sentinel produced by
/// `"23:59"` so that a window closing at the end of the day includes its last tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(MINUTES_PER_DAY);

    /// Builds a time from a raw minute offset, clamped into `0..=1440`.
    pub fn from_minutes(minutes: i64) -> Self {
        TimeOfDay(minutes.clamp(0, MINUTES_PER_DAY as i64) as u32)
    }

    pub fn from_hm(hour: u32, minute: u32) -> Self {
        Self::from_minutes((hour * MINUTES_PER_HOUR + minute) as i64)
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    /// Offset by `delta` minutes, saturating at midnight and at the end-of-day sentinel.
    pub fn offset_by(self, delta: i64) -> Self {
        Self::from_minutes(self.0 as i64 + delta)
    }

    pub fn is_hour_boundary(self) -> bool {
        self.0 % MINUTES_PER_HOUR == 0
    }

    /// Start of the clock hour containing this instant.
    pub fn top_of_hour(self) -> Self {
        TimeOfDay(self.0 - self.0 % MINUTES_PER_HOUR)
    }

    /// Strict `"HH:MM"` parser used when validating collaborator input.
    ///
    /// A trailing `":SS"` component is accepted and ignored, since REST time
    /// columns are frequently serialized with seconds. `"23:59"` maps to the
    /// end-of-day sentinel.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || Error::InvalidTimeFormat(text.to_string());

        let mut parts = text.trim().split(':');
        let hours = parse_component(parts.next(), 1..=2).ok_or_else(invalid)?;
        let minutes = parse_component(parts.next(), 2..=2).ok_or_else(invalid)?;

        if let Some(seconds) = parts.next() {
            parse_component(Some(seconds), 2..=2).filter(|s| *s < 60).ok_or_else(invalid)?;
        }
        if parts.next().is_some() || minutes >= MINUTES_PER_HOUR {
            return Err(invalid());
        }

        if hours == 23 && minutes == 59 {
            return Ok(Self::END_OF_DAY);
        }

        let total = hours * MINUTES_PER_HOUR + minutes;
        if total > MINUTES_PER_DAY {
            return Err(invalid());
        }

        Ok(TimeOfDay(total))
    }
}

fn parse_component(part: Option<&str>, digits: std::ops::RangeInclusive<usize>) -> Option<u32> {
    let part = part?;
    if !digits.contains(&part.len()) || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / MINUTES_PER_HOUR, self.0 % MINUTES_PER_HOUR)
    }
}

/// Lenient conversion of an `"HH:MM"` string to a [`TimeOfDay`].
///
/// Empty or malformed input yields midnight (`0`) instead of an error.
pub fn time_to_minutes(text: &str) -> TimeOfDay {
    if text.trim().is_empty() {
        return TimeOfDay::MIDNIGHT;
    }

    match TimeOfDay::parse(text) {
        Ok(time) => time,
        Err(e) => {
            log::warn!("{}; treating it as 00:00.", e);
            TimeOfDay::MIDNIGHT
        }
    }
}

/// Inverse of [`time_to_minutes`], zero-padded `"HH:MM"`.
pub fn minutes_to_time(time: TimeOfDay) -> String {
    time.to_string()
}
