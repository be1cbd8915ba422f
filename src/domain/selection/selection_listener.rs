use std::sync::{Arc, Mutex};

use crate::api::selection_dto::SelectionDto;

/// Receives the selection after every change; `None` means the selection was cleared.
pub trait SelectionListener: Send {
    fn on_selection_change(&mut self, selection: Option<&SelectionDto>);
}

impl<F> SelectionListener for F
where
    F: FnMut(Option<&SelectionDto>) + Send,
{
    fn on_selection_change(&mut self, selection: Option<&SelectionDto>) {
        self(selection)
    }
}

/// Listener for hosts that do not observe the selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullListener;

impl SelectionListener for NullListener {
    fn on_selection_change(&mut self, _selection: Option<&SelectionDto>) {}
}

/// Keeps every emission in order. Clones share the same history.
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    history: Arc<Mutex<Vec<Option<SelectionDto>>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<Option<SelectionDto>> {
        self.history.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn last(&self) -> Option<Option<SelectionDto>> {
        self.history.lock().unwrap_or_else(|e| e.into_inner()).last().cloned()
    }

    pub fn len(&self) -> usize {
        self.history.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SelectionListener for RecordingListener {
    fn on_selection_change(&mut self, selection: Option<&SelectionDto>) {
        self.history.lock().unwrap_or_else(|e| e.into_inner()).push(selection.cloned());
    }
}
