//! Simulated external sync job.

pub mod session;

pub use session::{sanitize_application_id, SyncError, SyncSession, TickOutcome};
