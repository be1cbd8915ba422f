pub mod booked_slot_dto;
pub mod booking_request_dto;
pub mod grid_config_dto;
pub mod grid_scenario_dto;
pub mod operating_hours_dto;
pub mod selection_dto;
