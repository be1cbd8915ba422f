use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload handed to the booking-creation collaborator when the user confirms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequestDto {
    /// Client-generated, lets the collaborator recognise a resubmitted request.
    pub request_id: Uuid,
    pub space_id: String,
    pub date: NaiveDate,
    pub start: String,
    pub end: String,
    pub purpose: String,
    pub attendee_count: u32,
}
