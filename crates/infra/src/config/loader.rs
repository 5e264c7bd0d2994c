//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `SLAWATCH_STORAGE_PATH` is unset, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! Every loaded configuration is validated before it is returned.
//!
//! ## Environment Variables
//! - `SLAWATCH_STORAGE_PATH`: SQLite file path (required for env loading)
//! - `SLAWATCH_STORAGE_POOL_SIZE`: Connection pool size
//! - `SLAWATCH_STORAGE_NAMESPACE`: Key the dashboard list is stored under
//! - `SLAWATCH_SYNC_TICK_MS`: Sync tick interval in milliseconds
//! - `SLAWATCH_SYNC_STEP`: Progress added per tick (1-100)
//! - `SLAWATCH_LOG_LEVEL`: Default log filter when `RUST_LOG` is unset
//! - `SLAWATCH_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./slawatch.json` or `./slawatch.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use slawatch_domain::{Config, LoggingConfig, Result, SlaWatchError, StorageConfig, SyncConfig};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variable is missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `SlaWatchError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - A value fails validation
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `SLAWATCH_STORAGE_PATH` must be present; every other variable falls back
/// to its default when unset.
///
/// # Errors
/// Returns `SlaWatchError::Config` if the storage path is missing or a value
/// cannot be parsed or fails validation.
pub fn load_from_env() -> Result<Config> {
    let defaults = Config::default();

    let storage = StorageConfig {
        path: env_var("SLAWATCH_STORAGE_PATH")?,
        pool_size: env_parse("SLAWATCH_STORAGE_POOL_SIZE", "pool size")?
            .unwrap_or(defaults.storage.pool_size),
        namespace: std::env::var("SLAWATCH_STORAGE_NAMESPACE")
            .unwrap_or(defaults.storage.namespace),
    };

    let sync = SyncConfig {
        tick_interval_ms: env_parse("SLAWATCH_SYNC_TICK_MS", "sync tick interval")?
            .unwrap_or(defaults.sync.tick_interval_ms),
        progress_step: env_parse("SLAWATCH_SYNC_STEP", "sync progress step")?
            .unwrap_or(defaults.sync.progress_step),
    };

    let logging = LoggingConfig {
        level: std::env::var("SLAWATCH_LOG_LEVEL").unwrap_or(defaults.logging.level),
        json: env_bool("SLAWATCH_LOG_JSON", defaults.logging.json),
    };

    let config = Config { storage, sync, logging };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Sections and fields missing from the file take their defaults.
///
/// # Errors
/// Returns `SlaWatchError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - A value fails validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SlaWatchError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SlaWatchError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SlaWatchError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SlaWatchError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SlaWatchError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(SlaWatchError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./config.{json,toml}`,
///    `./slawatch.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_files(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_files(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidate_files(base: &Path) -> Vec<PathBuf> {
    vec![
        base.join("config.json"),
        base.join("config.toml"),
        base.join("slawatch.json"),
        base.join("slawatch.toml"),
        base.join("../config.json"),
        base.join("../config.toml"),
        base.join("../../config.json"),
        base.join("../../config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `SlaWatchError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        SlaWatchError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse an optional numeric environment variable
///
/// # Errors
/// Returns `SlaWatchError::Config` if the variable is set but unparsable.
fn env_parse<T>(key: &str, label: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| SlaWatchError::Config(format!("Invalid {label}: {e}"))),
        Err(_) => Ok(None),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
