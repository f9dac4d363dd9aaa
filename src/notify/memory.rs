//! In-memory notifier
//!
//! Keeps every notification shown and models the single visible slot: a new
//! notification replaces the previous one, and the visible one disappears
//! after its timeout or when dismissed.

use super::Notifier;
use super::notification::{Notification, NotificationKind};
use std::sync::Mutex;
use tokio::time::Instant;

#[derive(Default)]
struct Board {
    history: Vec<Notification>,
    visible: Option<(Notification, Instant)>,
}

#[derive(Default)]
pub struct MemoryNotifier {
    board: Mutex<Board>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything shown so far, oldest first
    pub fn history(&self) -> Vec<Notification> {
        self.board
            .lock()
            .map(|board| board.history.clone())
            .unwrap_or_default()
    }

    /// Messages of the given kind, oldest first
    pub fn messages(&self, kind: NotificationKind) -> Vec<String> {
        self.history()
            .into_iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.message)
            .collect()
    }

    /// The notification currently on screen, if it has not timed out
    pub fn visible(&self) -> Option<Notification> {
        let board = self.board.lock().ok()?;
        let (notification, shown_at) = board.visible.as_ref()?;
        if shown_at.elapsed() < notification.dismiss_after {
            Some(notification.clone())
        } else {
            None
        }
    }

    /// Click-to-close
    pub fn dismiss(&self) {
        if let Ok(mut board) = self.board.lock() {
            board.visible = None;
        }
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut board) = self.board.lock() {
            board.history.push(notification.clone());
            board.visible = Some((notification, Instant::now()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn info(message: &str) -> Notification {
        Notification::new(NotificationKind::Info, message, Duration::from_millis(15000))
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_notification_replaces_previous() {
        let notifier = MemoryNotifier::new();
        notifier.notify(info("primero"));
        notifier.notify(info("segundo"));

        assert_eq!(notifier.visible().map(|n| n.message), Some("segundo".to_string()));
        assert_eq!(notifier.history().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_dismiss_after_timeout() {
        let notifier = MemoryNotifier::new();
        notifier.notify(info("hola"));

        tokio::time::advance(Duration::from_millis(14999)).await;
        assert!(notifier.visible().is_some());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(notifier.visible().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_on_click() {
        let notifier = MemoryNotifier::new();
        notifier.notify(info("hola"));
        notifier.dismiss();
        assert!(notifier.visible().is_none());
        assert_eq!(notifier.messages(NotificationKind::Info), vec!["hola".to_string()]);
    }
}
