//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DASHBOARDS_STORAGE_KEY, DEFAULT_POOL_SIZE, DEFAULT_STORAGE_PATH, SYNC_PROGRESS_MAX,
    SYNC_PROGRESS_STEP, SYNC_TICK_INTERVAL_MS,
};
use crate::errors::{Result, SlaWatchError};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Durable key-value storage used for user-defined dashboards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub path: String,
    pub pool_size: u32,
    /// Key under which the serialized dashboard list is stored
    pub namespace: String,
}

/// Simulated sync cadence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub tick_interval_ms: u64,
    pub progress_step: u8,
}

/// Log output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

fn default_namespace() -> String {
    DASHBOARDS_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_STORAGE_PATH.to_string(),
            pool_size: DEFAULT_POOL_SIZE,
            namespace: default_namespace(),
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self { tick_interval_ms: SYNC_TICK_INTERVAL_MS, progress_step: SYNC_PROGRESS_STEP }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}

impl Config {
    /// Reject values the runtime cannot honour.
    ///
    /// # Errors
    /// Returns `SlaWatchError::Config` for an empty storage path or namespace,
    /// a zero pool size, a zero tick interval, or a progress step outside
    /// `1..=100`.
    pub fn validate(&self) -> Result<()> {
        if self.storage.path.trim().is_empty() {
            return Err(SlaWatchError::Config("storage path must not be empty".into()));
        }
        if self.storage.namespace.trim().is_empty() {
            return Err(SlaWatchError::Config("storage namespace must not be empty".into()));
        }
        if self.storage.pool_size == 0 {
            return Err(SlaWatchError::Config("storage pool size must be at least 1".into()));
        }
        if self.sync.tick_interval_ms == 0 {
            return Err(SlaWatchError::Config("sync tick interval must be positive".into()));
        }
        if self.sync.progress_step == 0 || self.sync.progress_step > SYNC_PROGRESS_MAX {
            return Err(SlaWatchError::Config(format!(
                "sync progress step must be within 1..={SYNC_PROGRESS_MAX}, got {}",
                self.sync.progress_step
            )));
        }
        Ok(())
    }
}
