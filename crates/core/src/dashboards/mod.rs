//! User-defined dashboards: validation, active selection and persistence.

pub mod ports;
pub mod service;

use slawatch_domain::SlaWatchError;
use thiserror::Error;

pub use ports::DashboardStore;
pub use service::{DashboardRegistry, DashboardView};

/// Dashboard registry failures
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Name was empty after trimming
    #[error("Dashboard name cannot be empty")]
    EmptyName,

    /// Toggle attempted with no active dashboard
    #[error("No dashboard is selected")]
    NoActiveDashboard,

    #[error("Dashboard not found: {0}")]
    NotFound(String),

    /// Persisting or loading the list failed
    #[error("Dashboard storage failed: {0}")]
    Storage(#[from] SlaWatchError),
}

impl From<DashboardError> for SlaWatchError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::EmptyName | DashboardError::NoActiveDashboard => {
                Self::InvalidInput(err.to_string())
            }
            DashboardError::NotFound(id) => Self::NotFound(format!("dashboard {id}")),
            DashboardError::Storage(inner) => inner,
        }
    }
}

/// Convenience type alias for registry operations
pub type DashboardResult<T> = Result<T, DashboardError>;
