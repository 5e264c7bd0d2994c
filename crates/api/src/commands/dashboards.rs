//! Custom dashboard commands

use slawatch_core::DashboardView;
use slawatch_domain::Dashboard;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

pub async fn list_dashboards(ctx: &AppContext) -> Result<Vec<Dashboard>, String> {
    execute_command("dashboards::list_dashboards", || async { Ok(ctx.dashboards.list().await) })
        .await
}

/// Create a dashboard and make it the active one.
pub async fn create_dashboard(ctx: &AppContext, name: &str) -> Result<Dashboard, String> {
    execute_command("dashboards::create_dashboard", || async {
        Ok(ctx.dashboards.create(name).await?)
    })
    .await
}

pub async fn select_dashboard(ctx: &AppContext, id: &str) -> Result<Dashboard, String> {
    execute_command("dashboards::select_dashboard", || async {
        Ok(ctx.dashboards.select(id).await?)
    })
    .await
}

pub async fn delete_dashboard(ctx: &AppContext, id: &str) -> Result<Dashboard, String> {
    execute_command("dashboards::delete_dashboard", || async {
        Ok(ctx.dashboards.delete(id).await?)
    })
    .await
}

pub async fn rename_dashboard(
    ctx: &AppContext,
    id: &str,
    name: &str,
) -> Result<Dashboard, String> {
    execute_command("dashboards::rename_dashboard", || async {
        Ok(ctx.dashboards.rename(id, name).await?)
    })
    .await
}

/// Add or remove an application on the active dashboard.
pub async fn toggle_dashboard_application(
    ctx: &AppContext,
    application: &str,
) -> Result<Dashboard, String> {
    execute_command("dashboards::toggle_dashboard_application", || async {
        Ok(ctx.dashboards.toggle_application(application).await?)
    })
    .await
}

/// The active dashboard with its applications' health, if one is selected.
pub async fn get_active_dashboard(ctx: &AppContext) -> Result<Option<DashboardView>, String> {
    execute_command("dashboards::get_active_dashboard", || async {
        Ok(ctx.dashboards.active_view(&ctx.catalog).await)
    })
    .await
}
