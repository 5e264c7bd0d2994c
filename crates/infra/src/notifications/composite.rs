//! Forwards each notification to several sinks in order.

use std::sync::Arc;

use slawatch_core::NotificationSink;
use slawatch_domain::Notification;

#[derive(Clone, Default)]
pub struct CompositeNotificationSink {
    sinks: Vec<Arc<dyn NotificationSink>>,
}

impl CompositeNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl NotificationSink for CompositeNotificationSink {
    fn notify(&self, notification: Notification) {
        if let Some((last, rest)) = self.sinks.split_last() {
            for sink in rest {
                sink.notify(notification.clone());
            }
            last.notify(notification);
        }
    }
}
