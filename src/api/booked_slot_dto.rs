use serde::{Deserialize, Serialize};

/// An existing booking on the displayed date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedSlotDto {
    pub start: String,
    pub end: String,
}
