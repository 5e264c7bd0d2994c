//! Landing-page figures and the organization tree

use serde::Serialize;
use slawatch_core::{CatalogOverview, StatusPercentages, StatusSummary};
use slawatch_domain::Organization;
use tracing::debug;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Status counts with their share of the total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummaryResponse {
    pub summary: StatusSummary,
    pub percentages: StatusPercentages,
}

/// Counts of applications, interfaces and datasets plus the status summary
pub async fn get_overview(ctx: &AppContext) -> Result<CatalogOverview, String> {
    execute_command("overview::get_overview", || async { Ok(ctx.catalog.overview()) }).await
}

pub async fn get_status_summary(ctx: &AppContext) -> Result<StatusSummaryResponse, String> {
    execute_command("overview::get_status_summary", || async {
        let summary = ctx.catalog.summary();
        Ok(StatusSummaryResponse { summary, percentages: summary.percentages() })
    })
    .await
}

/// Departments → teams → applications with summed metrics
pub async fn get_organization(ctx: &AppContext) -> Result<Organization, String> {
    execute_command("overview::get_organization", || async {
        debug!(departments = ctx.organization.departments.len(), "returning organization");
        Ok(ctx.organization.as_ref().clone())
    })
    .await
}
