//! Namespaced key-value storage on top of the `kv_store` table.
//!
//! Values are opaque strings; callers choose the encoding.

use std::sync::Arc;

use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use slawatch_domain::{Result as DomainResult, SlaWatchError};
use tokio::task;
use tracing::debug;

use super::manager::{map_sql_error, DbManager};

/// SQLite-backed string store keyed by namespace
#[derive(Clone)]
pub struct SqliteKeyValueStore {
    db: Arc<DbManager>,
}

impl SqliteKeyValueStore {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    /// Value stored under `namespace`, if any.
    pub async fn get(&self, namespace: &str) -> DomainResult<Option<String>> {
        let db = Arc::clone(&self.db);
        let namespace = namespace.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<String>> {
            let conn = db.get_connection()?;
            conn.query_row(
                "SELECT value FROM kv_store WHERE namespace = ?1",
                params![&namespace],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    /// Insert or replace the value under `namespace`.
    pub async fn put(&self, namespace: &str, value: String) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let namespace = namespace.to_string();
        let updated_at = Utc::now().timestamp();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO kv_store (namespace, value, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(namespace) DO UPDATE SET
                     value = excluded.value,
                     updated_at = excluded.updated_at",
                params![&namespace, &value, updated_at],
            )
            .map_err(map_sql_error)?;
            debug!(namespace = %namespace, bytes = value.len(), "kv value stored");
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_join_error(err: task::JoinError) -> SlaWatchError {
    if err.is_cancelled() {
        SlaWatchError::Internal("blocking task cancelled".into())
    } else {
        SlaWatchError::Internal(format!("blocking task panicked: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn store() -> (SqliteKeyValueStore, TempDir) {
        let temp_dir = TempDir::new().expect("temp dir created");
        let db = DbManager::new(temp_dir.path().join("kv.db"), 2).expect("manager created");
        db.run_migrations().expect("migrations run");
        (SqliteKeyValueStore::new(Arc::new(db)), temp_dir)
    }

    #[tokio::test]
    async fn missing_namespace_is_none() {
        let (store, _dir) = store();
        assert_eq!(store.get("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_overwrites_existing_value() {
        let (store, _dir) = store();

        store.put("ns", "first".to_string()).await.unwrap();
        store.put("ns", "second".to_string()).await.unwrap();

        assert_eq!(store.get("ns").await.unwrap().as_deref(), Some("second"));
    }
}
