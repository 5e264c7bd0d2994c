//! Data sync commands

use slawatch_domain::SyncSnapshot;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Start a sync run. Non-digit characters in `application_id` are dropped.
pub async fn start_sync(
    ctx: &AppContext,
    application_id: Option<&str>,
) -> Result<SyncSnapshot, String> {
    execute_command("sync::start_sync", || async { Ok(ctx.sync.start(application_id).await?) })
        .await
}

pub async fn cancel_sync(ctx: &AppContext) -> Result<SyncSnapshot, String> {
    execute_command("sync::cancel_sync", || async { Ok(ctx.sync.cancel().await?) }).await
}

/// Current status, progress and report figures.
pub async fn get_sync_status(ctx: &AppContext) -> Result<SyncSnapshot, String> {
    execute_command("sync::get_sync_status", || async { Ok(ctx.sync.snapshot()) }).await
}
