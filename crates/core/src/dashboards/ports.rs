//! Port interfaces for dashboard persistence
//!
//! The registry always reads and writes the *full* list; adapters store it
//! under a single namespace key.

use async_trait::async_trait;
use slawatch_domain::{Dashboard, Result};

/// Durable storage for user-defined dashboards
#[async_trait]
pub trait DashboardStore: Send + Sync {
    /// Load every stored dashboard. Absent data yields an empty list.
    async fn load_all(&self) -> Result<Vec<Dashboard>>;

    /// Replace the stored list with `dashboards`.
    async fn save_all(&self, dashboards: &[Dashboard]) -> Result<()>;
}
