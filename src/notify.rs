//! Single-slot transient notifications.
//!
//! At most one toast is visible at a time: showing a new message replaces
//! the current one. A toast auto-dismisses five seconds after it was shown
//! unless dismissed earlier. Expiry is computed against instants passed in
//! by the caller, so there is no timer thread and the behavior is fully
//! testable.

use std::time::{Duration, Instant};

/// How long a toast stays visible.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(5);

/// Visual flavor of a toast, mapping onto the alert styles of the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// A completed operation
    Success,
    /// A failed operation or rejected form
    Danger,
}

/// One transient message.
#[derive(Clone, Debug)]
pub struct Toast {
    /// Message text shown to the user
    pub message: String,
    /// Visual flavor
    pub kind: ToastKind,
    shown_at: Instant,
}

/// Owner of the single toast slot.
#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<Toast>,
}

impl Notifier {
    /// Creates a notifier with no visible toast.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Shows a message, replacing whatever is currently visible.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        self.current = Some(Toast {
            message: message.into(),
            kind,
            shown_at: now,
        });
    }

    /// Shorthand for a success toast.
    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message, ToastKind::Success, now);
    }

    /// Shorthand for a danger toast.
    pub fn danger(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message, ToastKind::Danger, now);
    }

    /// The toast that is visible at `now`, if any. A toast older than
    /// [`TOAST_LIFETIME`] is treated as dismissed.
    #[must_use]
    pub fn current(&self, now: Instant) -> Option<&Toast> {
        self.current
            .as_ref()
            .filter(|toast| now.duration_since(toast.shown_at) < TOAST_LIFETIME)
    }

    /// Dismisses the current toast early.
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
