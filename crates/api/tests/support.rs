#![allow(dead_code)]

use slawatch_domain::{Config, StorageConfig, SyncConfig};
use slawatch_lib::context::AppContext;
use tempfile::TempDir;

/// Config pointing at a fresh database inside `dir` with a fast sync cadence.
pub fn test_config(dir: &TempDir) -> Config {
    Config {
        storage: StorageConfig {
            path: dir.path().join("slawatch.db").to_string_lossy().to_string(),
            pool_size: 2,
            ..StorageConfig::default()
        },
        sync: SyncConfig { tick_interval_ms: 5, progress_step: 50 },
        ..Config::default()
    }
}

/// Build a context over a temporary database.
///
/// Returns the temp dir too; dropping it removes the database.
pub async fn setup_context() -> (AppContext, TempDir) {
    let temp_dir = TempDir::new().expect("failed to create temporary test directory");
    let ctx = AppContext::new_with_config(test_config(&temp_dir))
        .await
        .expect("application context should build");
    (ctx, temp_dir)
}

/// Context whose sync never ticks during a test, so a run stays in flight.
pub async fn setup_slow_sync_context() -> (AppContext, TempDir) {
    let temp_dir = TempDir::new().expect("failed to create temporary test directory");
    let mut config = test_config(&temp_dir);
    config.sync.tick_interval_ms = 60_000;
    let ctx = AppContext::new_with_config(config).await.expect("application context should build");
    (ctx, temp_dir)
}

/// Build a second context over the same database directory.
pub async fn reopen_context(dir: &TempDir) -> AppContext {
    AppContext::new_with_config(test_config(dir)).await.expect("context should reopen")
}
