use chrono_tz::Tz;

use crate::api::grid_config_dto::{DEFAULT_SLOT_PIXEL_HEIGHT, GridConfigDto};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub timezone: Tz,
    pub slot_pixel_height: f64,
    pub read_only: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig { timezone: Tz::UTC, slot_pixel_height: DEFAULT_SLOT_PIXEL_HEIGHT, read_only: false }
    }
}

impl GridConfig {
    pub fn from_dto(dto: &GridConfigDto) -> Result<Self> {
        let timezone = dto.timezone.trim().parse::<Tz>().map_err(|_| Error::UnknownTimezone(dto.timezone.clone()))?;

        let slot_pixel_height = if dto.slot_pixel_height.is_finite() && dto.slot_pixel_height > 0.0 {
            dto.slot_pixel_height
        } else {
            log::warn!("Slot pixel height {} is not positive, using {}.", dto.slot_pixel_height, DEFAULT_SLOT_PIXEL_HEIGHT);
            DEFAULT_SLOT_PIXEL_HEIGHT
        };

        Ok(GridConfig { timezone, slot_pixel_height, read_only: dto.read_only })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_empty_json() {
        let dto: GridConfigDto = serde_json::from_str("{}").unwrap();
        assert_eq!(GridConfig::from_dto(&dto).unwrap(), GridConfig::default());
    }

    #[test]
    fn bad_values() {
        let dto: GridConfigDto = serde_json::from_str(r#"{"timezone": "Europe/Atlantis"}"#).unwrap();
        assert!(matches!(GridConfig::from_dto(&dto), Err(Error::UnknownTimezone(_))));

        let dto: GridConfigDto = serde_json::from_str(r#"{"timezone": "Asia/Seoul", "slotPixelHeight": -4.0, "readOnly": true}"#).unwrap();
        let config = GridConfig::from_dto(&dto).unwrap();
        assert_eq!(config.slot_pixel_height, DEFAULT_SLOT_PIXEL_HEIGHT);
        assert!(config.read_only);
    }
}
