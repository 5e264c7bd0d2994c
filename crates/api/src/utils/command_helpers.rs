//! Command execution helpers
//!
//! Provides utilities to reduce boilerplate when implementing commands with
//! timing and logging.

use std::future::Future;
use std::time::Instant;

use slawatch_domain::Result as DomainResult;

use crate::utils::logging::{error_label, log_command_execution};

/// Execute a command with automatic timing and logging
///
/// The error is rendered with its `Display` text, which is what a frontend
/// shows to the user.
///
/// # Example
///
/// ```rust,ignore
/// pub async fn my_command(ctx: &AppContext, id: &str) -> Result<MyResponse, String> {
///     execute_command("my_module::my_command", || async {
///         ctx.some_service.do_something(id).await.map_err(Into::into)
///     })
///     .await
/// }
/// ```
pub async fn execute_command<F, Fut, T>(command_name: &str, command_fn: F) -> Result<T, String>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = command_fn().await;

    let elapsed = start.elapsed();
    let error_type = result.as_ref().err().map(error_label);
    log_command_execution(command_name, elapsed, result.is_ok(), error_type);

    result.map_err(|err| err.to_string())
}
