use std::sync::{Arc, RwLock};

use chrono::{Duration, NaiveDateTime};

use crate::domain::clock::system_clock::SystemClock;

/// Clock frozen at a given instant until moved explicitly. Clones share the instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Arc<RwLock<NaiveDateTime>>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        FixedClock { now: Arc::new(RwLock::new(now)) }
    }

    pub fn set_now(&self, now: NaiveDateTime) {
        *self.now.write().unwrap_or_else(|e| e.into_inner()) = now;
    }

    pub fn advance_minutes(&self, minutes: i64) {
        let mut guard = self.now.write().unwrap_or_else(|e| e.into_inner());
        *guard += Duration::minutes(minutes);
    }
}

impl SystemClock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.read().unwrap_or_else(|e| e.into_inner())
    }
}
