use serde::{Deserialize, Serialize};

/// `{ "start": "HH:MM", "end": "HH:MM" }`; either bound may be absent or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursEntryDto {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHoursDto {
    pub weekday: HoursEntryDto,
    #[serde(default)]
    pub weekend: Option<HoursEntryDto>,
}
