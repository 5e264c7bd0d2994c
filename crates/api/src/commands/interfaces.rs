//! Interface list, details and application lookups

use slawatch_core::ApplicationHealth;
use slawatch_domain::{Application, Interface, SlaWatchError, StatusFilter};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Interfaces for a status tab: `all`, `breached`, `at-risk` or `on-schedule`.
pub async fn list_interfaces(ctx: &AppContext, tab: &str) -> Result<Vec<Interface>, String> {
    execute_command("interfaces::list_interfaces", || async {
        let filter: StatusFilter = tab.parse().map_err(SlaWatchError::InvalidInput)?;
        Ok(ctx.catalog.filter_by_status(filter).into_iter().cloned().collect())
    })
    .await
}

pub async fn get_interface(ctx: &AppContext, id: &str) -> Result<Interface, String> {
    execute_command("interfaces::get_interface", || async {
        ctx.catalog.find_interface(id).cloned()
    })
    .await
}

/// Case-insensitive name search; an empty term lists every application.
pub async fn search_applications(
    ctx: &AppContext,
    term: &str,
) -> Result<Vec<Application>, String> {
    execute_command("interfaces::search_applications", || async {
        Ok(ctx.catalog.search_applications(term).into_iter().cloned().collect())
    })
    .await
}

pub async fn get_application_health(
    ctx: &AppContext,
    application: &str,
) -> Result<ApplicationHealth, String> {
    execute_command("interfaces::get_application_health", || async {
        Ok(ctx.catalog.application_health(application))
    })
    .await
}
