pub mod drag_controller;
pub mod drag_session;
pub mod pointer;
