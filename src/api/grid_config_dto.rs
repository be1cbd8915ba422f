use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_SLOT_PIXEL_HEIGHT: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfigDto {
    /// IANA name of the timezone the space operates in.
    pub timezone: String,
    pub slot_pixel_height: f64,
    pub read_only: bool,
}

impl Default for GridConfigDto {
    fn default() -> Self {
        GridConfigDto { timezone: DEFAULT_TIMEZONE.to_string(), slot_pixel_height: DEFAULT_SLOT_PIXEL_HEIGHT, read_only: false }
    }
}
