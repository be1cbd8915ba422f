use crate::domain::slot_model::time_of_day::TimeOfDay;

/// Why a selection is being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearReason {
    Explicit,
    DateChanged,
    /// The page replaced its copy of the selection with `null`.
    ExternalReset,
    /// A booking was confirmed or the booking form was cancelled.
    BookingFinished,
}

/// Every way the selection can change. [`SelectionEngine::handle`] is the only place
/// where the selection is mutated.
///
/// [`SelectionEngine::handle`]: crate::domain::selection::selection_engine::SelectionEngine::handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Click on the row starting at the given tick.
    Click(TimeOfDay),

    /// Move the end to a raw minute offset; may be negative or past midnight while dragging.
    ResizeEnd(i64),

    Clear(ClearReason),
}
