//! Scheduler error types

use std::time::Duration;

use slawatch_core::SyncError;
use slawatch_domain::SlaWatchError;
use thiserror::Error;
use tokio::task::JoinError;

use crate::errors::InfraError;

/// Scheduler-specific errors
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// A run is already in flight
    #[error("Scheduler already running")]
    AlreadyRunning,

    /// No run is in flight
    #[error("Scheduler not running")]
    NotRunning,

    /// Operation timed out
    #[error("Operation timed out after {duration:?}")]
    Timeout { duration: Duration },

    /// Task join failed
    #[error("Task join failed: {0}")]
    TaskJoinFailed(String),
}

impl From<SyncError> for SchedulerError {
    fn from(err: SyncError) -> Self {
        match err {
            SyncError::AlreadyRunning => Self::AlreadyRunning,
            SyncError::NotRunning => Self::NotRunning,
        }
    }
}

impl From<JoinError> for SchedulerError {
    fn from(err: JoinError) -> Self {
        Self::TaskJoinFailed(err.to_string())
    }
}

impl From<SchedulerError> for InfraError {
    fn from(err: SchedulerError) -> Self {
        let domain_err = match err {
            SchedulerError::AlreadyRunning | SchedulerError::NotRunning => {
                SlaWatchError::InvalidInput(err.to_string())
            }
            SchedulerError::Timeout { .. } | SchedulerError::TaskJoinFailed(_) => {
                SlaWatchError::Internal(err.to_string())
            }
        };
        InfraError(domain_err)
    }
}

impl From<SchedulerError> for SlaWatchError {
    fn from(err: SchedulerError) -> Self {
        InfraError::from(err).into()
    }
}

/// Convenience type alias for scheduler operations
pub type SchedulerResult<T> = Result<T, SchedulerError>;
