use std::sync::Arc;

use crate::domain::clock::system_clock::{OperatingClock, SystemClock};
use crate::domain::drag::pointer::{InMemoryPointerSource, PointerEventSource};
use crate::domain::grid::grid_config::GridConfig;
use crate::domain::grid::time_slot_grid::TimeSlotGrid;
use crate::domain::selection::selection_listener::SelectionListener;
use crate::error::Result;
use crate::loader::parser::load_scenario;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Builds a grid from a scenario file, reading "now" from the wall clock in the
/// scenario's operating timezone.
pub fn load_time_slot_grid(file_path: &str, listener: Box<dyn SelectionListener>) -> Result<TimeSlotGrid> {
    let scenario = load_scenario(file_path)?;
    let config = GridConfig::from_dto(&scenario.config)?;
    let clock: Arc<dyn SystemClock> = Arc::new(OperatingClock::new(config.timezone));
    let pointer_source: Arc<dyn PointerEventSource> = Arc::new(InMemoryPointerSource::new());

    TimeSlotGrid::from_scenario(&scenario, clock, listener, pointer_source)
}

/// Like [`load_time_slot_grid`] with an explicit clock.
pub fn load_time_slot_grid_with_clock(
    file_path: &str,
    clock: Arc<dyn SystemClock>,
    listener: Box<dyn SelectionListener>,
) -> Result<TimeSlotGrid> {
    let scenario = load_scenario(file_path)?;
    let pointer_source: Arc<dyn PointerEventSource> = Arc::new(InMemoryPointerSource::new());

    TimeSlotGrid::from_scenario(&scenario, clock, listener, pointer_source)
}
