use serde::de::DeserializeOwned;
use std::fs;

use crate::api::grid_scenario_dto::GridScenarioDto;
use crate::error::{Error, Result};

/// Parses a JSON file into a given type `T`.
///
/// Errors are converted into `crate::error::Error` variants:
/// - `Error::IoError` if the file cannot be read.
/// - `Error::DeserializationError` if the JSON is malformed.
pub fn parse_json_file<T: DeserializeOwned>(file_path: &str) -> Result<T> {
    let data = fs::read_to_string(file_path).map_err(Error::IoError)?;

    let parsed_data: T = serde_json::from_str(&data).map_err(Error::DeserializationError)?;

    Ok(parsed_data)
}

pub fn load_scenario(file_path: &str) -> Result<GridScenarioDto> {
    let scenario: GridScenarioDto = parse_json_file(file_path)?;
    log::info!("Scenario '{}' parsed ({} bookings on {}).", file_path, scenario.booked_slots.len(), scenario.selected_date);
    Ok(scenario)
}
