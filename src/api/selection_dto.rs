use serde::{Deserialize, Serialize};

/// The selection as exchanged with the surrounding page:
/// emitted on every change and accepted back as the external reset signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionDto {
    pub start: String,
    pub end: String,
    pub duration_minutes: u32,
}
