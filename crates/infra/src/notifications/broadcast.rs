//! Fan-out of notifications to any number of async subscribers.
//!
//! Backed by a `tokio::sync::broadcast` channel. Sending never blocks: slow
//! subscribers lag and lose the oldest messages, and a send with no
//! subscribers is dropped.

use slawatch_core::NotificationSink;
use slawatch_domain::Notification;
use tokio::sync::broadcast;
use tracing::trace;

pub const DEFAULT_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub struct BroadcastNotificationSink {
    sender: broadcast::Sender<Notification>,
}

impl Default for BroadcastNotificationSink {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl BroadcastNotificationSink {
    /// Channel buffering up to `capacity` messages per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }
}

impl NotificationSink for BroadcastNotificationSink {
    fn notify(&self, notification: Notification) {
        if self.sender.send(notification).is_err() {
            trace!("notification dropped: no subscribers");
        }
    }
}
