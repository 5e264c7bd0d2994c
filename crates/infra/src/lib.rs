//! # SlaWatch Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite key-value storage and the dashboard repository
//! - Timer-driven sync runner
//! - Notification sinks (tracing, broadcast, composite, recording)
//! - Embedded mock catalog
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `slawatch-core`
//! - Depends on `slawatch-domain` and `slawatch-core`
//! - Contains all "impure" code (I/O, timers)

pub mod catalog;
pub mod config;
pub mod database;
pub mod errors;
pub mod notifications;
pub mod scheduling;

// Re-export commonly used items
pub use catalog::EmbeddedCatalog;
pub use database::{DbManager, SqliteDashboardRepository, SqliteKeyValueStore};
pub use errors::InfraError;
pub use notifications::{
    BroadcastNotificationSink, CompositeNotificationSink, RecordingNotificationSink,
    TracingNotificationSink,
};
pub use scheduling::{SchedulerError, SchedulerResult, SyncRunner, SyncRunnerConfig};
