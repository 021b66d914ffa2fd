//! User-facing cart notifications.

use std::fmt;
use std::sync::{Arc, Mutex};

/// A notification surfaced to the shopper after a failed cart operation.
///
/// Stock violations keep their own message; every other failure collapses
/// into one generic message per operation, so the UI never leaks transport
/// or storage details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The requested quantity exceeds the available stock.
    OutOfStock,
    /// Adding a product failed.
    AddFailed,
    /// Removing a product failed.
    RemoveFailed,
    /// Changing a product amount failed.
    UpdateFailed,
}

impl Notice {
    /// Storefront copy for this notice.
    pub fn message(&self) -> &'static str {
        match self {
            Notice::OutOfStock => "Requested quantity is out of stock",
            Notice::AddFailed => "Could not add the product to the cart",
            Notice::RemoveFailed => "Could not remove the product from the cart",
            Notice::UpdateFailed => "Could not change the product amount",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Sink for user-facing notices.
///
/// The storefront wires this to its toast system; the default sink logs.
pub trait Notifier: Send + Sync {
    /// Surface a notice to the shopper.
    fn notify(&self, notice: Notice);
}

/// Notifier that emits each notice as a warning-level log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        tracing::warn!(notice = ?notice, "{}", notice.message());
    }
}

/// Notifier that records notices for inspection in tests.
///
/// Clones share the same underlying list, so a test can keep a handle and
/// assert on what a consumer emitted.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    inner: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices recorded so far, in order.
    pub fn notices(&self) -> Vec<Notice> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Notice::OutOfStock.message(), "Requested quantity is out of stock");
        assert_eq!(
            Notice::AddFailed.to_string(),
            "Could not add the product to the cart"
        );
    }

    #[test]
    fn test_recorder_clones_share_notices() {
        let recorder = RecordingNotifier::new();
        let observer = recorder.clone();

        recorder.notify(Notice::OutOfStock);
        recorder.notify(Notice::AddFailed);

        assert_eq!(observer.notices(), vec![Notice::OutOfStock, Notice::AddFailed]);
    }
}
