use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Pointer or touch coordinates in grid pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        PointerPosition { x, y }
    }
}

/// Unified mouse/touch events as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed on the resize handle.
    Down(PointerPosition),
    Move(PointerPosition),
    Up,
    /// The platform aborted the gesture.
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerToken(pub u64);

/// Host hook for document-wide move/up/cancel listeners, which keep a drag alive
/// after the pointer leaves the handle.
pub trait PointerEventSource: std::fmt::Debug + Send + Sync {
    fn attach(&self) -> ListenerToken;

    fn detach(&self, token: ListenerToken);
}

/// A live set of global listeners. Dropping it detaches them.
#[derive(Debug)]
pub struct ListenerRegistration {
    source: Arc<dyn PointerEventSource>,
    token: ListenerToken,
}

impl ListenerRegistration {
    pub fn acquire(source: &Arc<dyn PointerEventSource>) -> Self {
        let token = source.attach();
        log::trace!("Attached global pointer listeners {:?}.", token);
        ListenerRegistration { source: Arc::clone(source), token }
    }

    pub fn token(&self) -> ListenerToken {
        self.token
    }
}

impl Drop for ListenerRegistration {
    fn drop(&mut self) {
        self.source.detach(self.token);
        log::trace!("Detached global pointer listeners {:?}.", self.token);
    }
}

/// What the host should do with the native event that triggered a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureDisposition {
    /// Suppress the platform default (text selection, scrolling).
    pub prevent_default: bool,
    /// Keep ancestors listening for the same gesture from seeing it.
    pub stop_propagation: bool,
}

impl GestureDisposition {
    pub const CAPTURED: GestureDisposition = GestureDisposition { prevent_default: true, stop_propagation: true };
    pub const IGNORED: GestureDisposition = GestureDisposition { prevent_default: false, stop_propagation: false };

    pub fn is_captured(&self) -> bool {
        self.prevent_default || self.stop_propagation
    }
}

/// Listener bookkeeping for headless hosts and tests.
#[derive(Debug, Default)]
pub struct InMemoryPointerSource {
    next_token: AtomicU64,
    attached: Mutex<HashSet<ListenerToken>>,
}

impl InMemoryPointerSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attached_count(&self) -> usize {
        self.attached.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl PointerEventSource for InMemoryPointerSource {
    fn attach(&self) -> ListenerToken {
        let token = ListenerToken(self.next_token.fetch_add(1, Ordering::Relaxed));
        self.attached.lock().unwrap_or_else(|e| e.into_inner()).insert(token);
        token
    }

    fn detach(&self, token: ListenerToken) {
        if !self.attached.lock().unwrap_or_else(|e| e.into_inner()).remove(&token) {
            log::warn!("Pointer listeners {:?} were detached twice.", token);
        }
    }
}
