//! Port for emitting notifications
//!
//! Delivery is fire-and-forget: a sink never reports failure back to the
//! operation that produced the message.

use slawatch_domain::Notification;

/// Receives `{title, description, variant?}` messages from core services
pub trait NotificationSink: Send + Sync {
    /// Deliver a notification. Must not block on slow consumers.
    fn notify(&self, notification: Notification);
}
