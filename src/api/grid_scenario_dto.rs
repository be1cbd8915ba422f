use serde::{Deserialize, Serialize};

use crate::api::booked_slot_dto::BookedSlotDto;
use crate::api::grid_config_dto::GridConfigDto;
use crate::api::operating_hours_dto::OperatingHoursDto;

/// Everything needed to show the grid of one space on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridScenarioDto {
    #[serde(default)]
    pub config: GridConfigDto,
    pub operating_hours: OperatingHoursDto,
    #[serde(default)]
    pub booked_slots: Vec<BookedSlotDto>,
    /// `YYYY-MM-DD`
    pub selected_date: String,
}
