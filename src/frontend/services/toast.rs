//! Transient notifications.

use dioxus::prelude::*;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Info => "toast toast-info",
            Self::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    /// Assigned by the queue on push.
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub auto_close: Duration,
    pub close_button: bool,
    pub close_on_click: bool,
}

impl Toast {
    const DEFAULT_AUTO_CLOSE: Duration = Duration::from_secs(5);

    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id: 0,
            kind,
            message: message.into(),
            auto_close: Self::DEFAULT_AUTO_CLOSE,
            close_button: true,
            close_on_click: false,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    #[must_use]
    pub const fn auto_close(mut self, after: Duration) -> Self {
        self.auto_close = after;
        self
    }

    /// Short-lived style: no close button, click anywhere to dismiss.
    #[must_use]
    pub const fn brief(mut self) -> Self {
        self.close_button = false;
        self.close_on_click = true;
        self
    }
}

/// Sink for toasts raised by services.
pub trait Notifier: Clone + 'static {
    fn push(&mut self, toast: Toast);
    fn dismiss_all(&mut self);
}

/// Toasts currently on screen.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastQueue {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastQueue {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.read().clone()
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|toast| toast.id != id);
    }
}

impl Notifier for ToastQueue {
    fn push(&mut self, mut toast: Toast) {
        let id = *self.next_id.peek() + 1;
        self.next_id.set(id);
        toast.id = id;
        log::debug!("Toast {id}: {}", toast.message);
        self.toasts.write().push(toast);
    }

    fn dismiss_all(&mut self) {
        self.toasts.write().clear();
    }
}

/// Creates the toast queue for the current scope.
pub fn use_toast_queue() -> ToastQueue {
    ToastQueue {
        toasts: use_signal(Vec::new),
        next_id: use_signal(|| 0),
    }
}
