//! User-facing notification delivery.

pub mod ports;

pub use ports::NotificationSink;
