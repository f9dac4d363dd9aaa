//! User notifications
//!
//! Fire-and-forget messages shown to the person at the form.

pub mod memory;
pub mod notification;

pub use memory::MemoryNotifier;
pub use notification::{Notification, NotificationKind};

use log::{error, info};

/// Shows notifications to the user
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Notifier that writes every notification to the log
#[derive(Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Error => error!("{}", notification),
            _ => info!("{}", notification),
        }
    }
}
