//! Scheduling infrastructure for timed background work
//!
//! The sync runner follows the runtime rules used across this crate:
//! - Explicit lifecycle management (start/cancel)
//! - Join handles for spawned tasks
//! - Cancellation token support
//! - Timeout wrapping when joining tasks
//! - Structured tracing

pub mod error;
pub mod sync_runner;

pub use error::{SchedulerError, SchedulerResult};
pub use sync_runner::{SyncRunner, SyncRunnerConfig};
