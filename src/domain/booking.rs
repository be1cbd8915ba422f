pub mod booking_panel;
pub mod booking_submitter;
