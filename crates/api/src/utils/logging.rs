//! Tracing setup and structured command logging

use std::time::Duration;

use slawatch_domain::{LoggingConfig, SlaWatchError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `config.level`. A second call is a no-op so tests and
/// the binary can both call it.
pub fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = if config.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"dashboards::create_dashboard"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
/// * `error_type` - Stable label of the failure, see [`error_label`].
#[inline]
pub fn log_command_execution(
    command: &str,
    elapsed: Duration,
    success: bool,
    error_type: Option<&str>,
) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, error_type, "command_execution_failure");
    }
}

/// Convert a `SlaWatchError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &SlaWatchError) -> &'static str {
    match error {
        SlaWatchError::Database(_) => "database",
        SlaWatchError::Config(_) => "config",
        SlaWatchError::NotFound(_) => "not_found",
        SlaWatchError::InvalidInput(_) => "invalid_input",
        SlaWatchError::Internal(_) => "internal",
    }
}
