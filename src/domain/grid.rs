pub mod grid_config;
pub mod time_slot_grid;
