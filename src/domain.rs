pub mod booking;
pub mod clock;
pub mod drag;
pub mod grid;
pub mod selection;
pub mod slot_model;
pub mod utils;
