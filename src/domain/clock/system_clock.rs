use chrono::{NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::error::{Error, Result};

/// Source of "now" for slot generation.
///
/// Both the current date and the current minute are civil values in the
/// operating timezone of the space, independent of where the viewer sits.
pub trait SystemClock: std::fmt::Debug + Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Wall clock projected into a fixed IANA timezone.
#[derive(Debug, Clone, Copy)]
pub struct OperatingClock {
    timezone: Tz,
}

impl OperatingClock {
    pub fn new(timezone: Tz) -> Self {
        OperatingClock { timezone }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        let timezone = name.parse::<Tz>().map_err(|_| Error::UnknownTimezone(name.to_string()))?;
        Ok(Self::new(timezone))
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}

impl SystemClock for OperatingClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.timezone).naive_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_zone() {
        assert!(matches!(OperatingClock::from_name("Mars/Olympus_Mons"), Err(Error::UnknownTimezone(_))));
        assert_eq!(OperatingClock::from_name("Asia/Seoul").unwrap().timezone(), chrono_tz::Asia::Seoul);
    }
}
