//! Notification values

use std::fmt;
use std::time::Duration;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// Bold prefix shown before the message
    pub fn title(&self) -> &'static str {
        match self {
            NotificationKind::Info => "Información:",
            NotificationKind::Success => "Éxito!",
            NotificationKind::Error => "Error!",
        }
    }
}

/// A transient message for the person at the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    /// Auto-dismiss delay
    pub dismiss_after: Duration,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>, dismiss_after: Duration) -> Self {
        Self {
            kind,
            message: message.into(),
            dismiss_after,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.title(), self.message)
    }
}
