//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::fs;

use slawatch_domain::SlaWatchError;
use slawatch_infra::config;
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("config file should be written");
    path
}

#[test]
fn test_load_config_from_json_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_config(
        &dir,
        "config.json",
        r#"{
            "storage": {
                "path": "/tmp/integration_test.db",
                "pool_size": 6,
                "namespace": "team.dashboards"
            },
            "sync": { "tick_interval_ms": 250, "progress_step": 20 },
            "logging": { "level": "debug", "json": true }
        }"#,
    );

    let config = config::load_from_file(Some(path)).expect("json config should load");

    assert_eq!(config.storage.path, "/tmp/integration_test.db");
    assert_eq!(config.storage.pool_size, 6);
    assert_eq!(config.storage.namespace, "team.dashboards");
    assert_eq!(config.sync.tick_interval_ms, 250);
    assert_eq!(config.sync.progress_step, 20);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
}

#[test]
fn test_load_config_from_toml_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_config(
        &dir,
        "slawatch.toml",
        r#"
[storage]
path = "/tmp/integration_test_toml.db"

[sync]
tick_interval_ms = 400
"#,
    );

    let config = config::load_from_file(Some(path)).expect("toml config should load");

    assert_eq!(config.storage.path, "/tmp/integration_test_toml.db");
    assert_eq!(config.storage.pool_size, 4);
    assert_eq!(config.storage.namespace, "slawatch.dashboards");
    assert_eq!(config.sync.tick_interval_ms, 400);
    assert_eq!(config.sync.progress_step, 10);
}

#[test]
fn test_missing_file_is_a_config_error() {
    let dir = TempDir::new().expect("temp dir should be created");

    let err = config::load_from_file(Some(dir.path().join("absent.toml"))).unwrap_err();

    assert!(matches!(err, SlaWatchError::Config(msg) if msg.contains("not found")));
}

#[test]
fn test_invalid_values_are_rejected_after_parsing() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_config(&dir, "config.toml", "[sync]\nprogress_step = 0\n");

    let err = config::load_from_file(Some(path)).unwrap_err();

    assert!(matches!(err, SlaWatchError::Config(msg) if msg.contains("progress step")));
}

#[test]
fn test_malformed_toml_is_reported() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_config(&dir, "config.toml", "[storage\npath = ");

    assert!(matches!(config::load_from_file(Some(path)), Err(SlaWatchError::Config(_))));
}
