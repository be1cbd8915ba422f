pub mod booked_interval;
pub mod operating_window;
pub mod slot;
pub mod time_of_day;

pub use booked_interval::BookedInterval;
pub use operating_window::{HoursEntry, OperatingHours, OperatingWindow, resolve_operating_window};
pub use slot::{DayLayout, Slot, generate_slots};
pub use time_of_day::{SLOT_GRANULARITY, TimeOfDay, minutes_to_time, time_to_minutes};
