//! Notification sink adapters

pub mod broadcast;
pub mod composite;
pub mod recording;
pub mod tracing_sink;

pub use broadcast::BroadcastNotificationSink;
pub use composite::CompositeNotificationSink;
pub use recording::RecordingNotificationSink;
pub use tracing_sink::TracingNotificationSink;
