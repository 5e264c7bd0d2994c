//! Logs every notification as a structured event.

use slawatch_core::NotificationSink;
use slawatch_domain::Notification;
use tracing::{info, warn};

/// Sink that writes notifications to the tracing subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, notification: Notification) {
        if notification.is_destructive() {
            warn!(
                title = %notification.title,
                description = %notification.description,
                "notification"
            );
        } else {
            info!(
                title = %notification.title,
                description = %notification.description,
                "notification"
            );
        }
    }
}
