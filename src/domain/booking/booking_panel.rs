use chrono::NaiveDate;
use uuid::Uuid;

use crate::api::booking_request_dto::BookingRequestDto;
use crate::api::selection_dto::SelectionDto;
use crate::domain::booking::booking_submitter::{BookingReceipt, BookingSubmitter};
use crate::domain::selection::selection_engine::SelectionEngine;
use crate::domain::selection::selection_event::{ClearReason, SelectionEvent};
use crate::domain::utils::id::SpaceId;
use crate::error::{Error, Result};

/// What the panel shows for the current selection snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    /// No range chosen yet; the panel only asks the user to pick one.
    Prompt,
    Ready { start: String, end: String, duration_minutes: u32, attendee_count: u32, max_capacity: u32 },
}

/// Final step of a booking: purpose and attendee count over a selection snapshot.
#[derive(Debug)]
pub struct BookingPanel {
    space_id: SpaceId,
    max_capacity: u32,
    purpose: String,
    attendee_count: u32,
    submitter: Box<dyn BookingSubmitter>,
}

impl BookingPanel {
    pub fn new(space_id: SpaceId, max_capacity: u32, submitter: Box<dyn BookingSubmitter>) -> Self {
        BookingPanel { space_id, max_capacity: max_capacity.max(1), purpose: String::new(), attendee_count: 1, submitter }
    }

    pub fn space_id(&self) -> &SpaceId {
        &self.space_id
    }

    pub fn max_capacity(&self) -> u32 {
        self.max_capacity
    }

    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    pub fn attendee_count(&self) -> u32 {
        self.attendee_count
    }

    pub fn set_purpose(&mut self, purpose: impl Into<String>) {
        self.purpose = purpose.into();
    }

    /// Stores the edited attendee count clamped to `[1, max_capacity]`.
    pub fn set_attendee_count(&mut self, raw: i64) -> u32 {
        self.attendee_count = raw.clamp(1, self.max_capacity as i64) as u32;
        self.attendee_count
    }

    pub fn view(&self, selection: Option<&SelectionDto>) -> PanelView {
        match selection {
            None => PanelView::Prompt,
            Some(selection) => PanelView::Ready {
                start: selection.start.clone(),
                end: selection.end.clone(),
                duration_minutes: selection.duration_minutes,
                attendee_count: self.attendee_count,
                max_capacity: self.max_capacity,
            },
        }
    }

    /// Submits the current selection of `engine` on `date`.
    ///
    /// On success the form resets and the selection is cleared. On failure the
    /// form and the selection stay as they were and the error is returned as is.
    pub fn confirm(&mut self, date: NaiveDate, engine: &mut SelectionEngine) -> Result<BookingReceipt> {
        let selection = engine.snapshot().ok_or(Error::NoActiveSelection)?;

        let request = BookingRequestDto {
            request_id: Uuid::new_v4(),
            space_id: self.space_id.to_string(),
            date,
            start: selection.start,
            end: selection.end,
            purpose: self.purpose.trim().to_string(),
            attendee_count: self.attendee_count.clamp(1, self.max_capacity),
        };

        match self.submitter.submit(&request) {
            Ok(receipt) => {
                log::info!(
                    "Booked {} on {} {}-{} for {} attendee(s) as {}.",
                    self.space_id,
                    date,
                    request.start,
                    request.end,
                    request.attendee_count,
                    receipt.booking_id
                );
                self.reset_form();
                engine.handle(SelectionEvent::Clear(ClearReason::BookingFinished));
                Ok(receipt)
            }
            Err(e) => {
                log::warn!("Booking request {} for {} was rejected: {}", request.request_id, self.space_id, e);
                Err(e)
            }
        }
    }

    /// Resets the form and asks the engine to drop its selection.
    pub fn cancel(&mut self, engine: &mut SelectionEngine) {
        self.reset_form();
        engine.handle(SelectionEvent::Clear(ClearReason::BookingFinished));
    }

    fn reset_form(&mut self) {
        self.purpose.clear();
        self.attendee_count = 1;
    }
}
