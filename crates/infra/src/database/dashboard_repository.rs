//! Dashboard persistence as one JSON document in the key-value store.

use std::sync::Arc;

use async_trait::async_trait;
use slawatch_core::DashboardStore;
use slawatch_domain::{Dashboard, Result as DomainResult, SlaWatchError};
use tracing::{debug, instrument};

use super::kv_store::SqliteKeyValueStore;
use super::manager::DbManager;
use crate::errors::InfraError;

/// Stores the full dashboard list under a single namespace
pub struct SqliteDashboardRepository {
    kv: SqliteKeyValueStore,
    namespace: String,
}

impl SqliteDashboardRepository {
    pub fn new(db: Arc<DbManager>, namespace: impl Into<String>) -> Self {
        Self { kv: SqliteKeyValueStore::new(db), namespace: namespace.into() }
    }
}

#[async_trait]
impl DashboardStore for SqliteDashboardRepository {
    #[instrument(skip(self), fields(namespace = %self.namespace))]
    async fn load_all(&self) -> DomainResult<Vec<Dashboard>> {
        let Some(raw) = self.kv.get(&self.namespace).await? else {
            debug!("no stored dashboards");
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|err| SlaWatchError::from(InfraError::from(err)))
    }

    #[instrument(skip_all, fields(namespace = %self.namespace, count = dashboards.len()))]
    async fn save_all(&self, dashboards: &[Dashboard]) -> DomainResult<()> {
        let raw = serde_json::to_string(dashboards)
            .map_err(|err| SlaWatchError::from(InfraError::from(err)))?;
        self.kv.put(&self.namespace, raw).await
    }
}
