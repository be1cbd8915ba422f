use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse grid scenario JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Invalid time of day '{0}', expected HH:MM")]
    InvalidTimeFormat(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Operating window must start before it ends (start: {start}, end: {end})")]
    InvalidOperatingWindow { start: String, end: String },

    #[error("Unknown operating timezone: {0}")]
    UnknownTimezone(String),

    #[error("Booking could not be created: {0}")]
    BookingFailed(String),

    #[error("No time range is selected")]
    NoActiveSelection,
}

pub type Result<T> = std::result::Result<T, Error>;
