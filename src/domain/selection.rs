pub mod selection;
pub mod selection_engine;
pub mod selection_event;
pub mod selection_listener;
