//! In-memory sink that keeps every notification, for tests and status views.

use parking_lot::Mutex;
use slawatch_core::NotificationSink;
use slawatch_domain::Notification;

#[derive(Debug, Default)]
pub struct RecordingNotificationSink {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotificationSink {
    /// Everything recorded so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().clone()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().push(notification);
    }
}
