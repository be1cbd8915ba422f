use crate::api::booking_request_dto::BookingRequestDto;
use crate::domain::utils::id::BookingId;
use crate::error::Result;

/// Outcome of an accepted booking request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingReceipt {
    pub booking_id: BookingId,
}

/// The external booking-creation collaborator (in production, the REST client).
///
/// Implementations report rejections as [`Error::BookingFailed`]; the panel passes
/// them through unchanged and never retries.
///
/// [`Error::BookingFailed`]: crate::error::Error::BookingFailed
pub trait BookingSubmitter: std::fmt::Debug + Send {
    fn submit(&mut self, request: &BookingRequestDto) -> Result<BookingReceipt>;
}
