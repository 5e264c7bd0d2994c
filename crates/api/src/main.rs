//! SlaWatch - SLA monitoring backend
//!
//! Boots the application context, logs a status report and exits.

use anyhow::Context as _;
use slawatch_infra::config;
use slawatch_lib::utils::logging::init_tracing;
use slawatch_lib::AppContext;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    let loaded = config::load();
    let config = loaded.clone().unwrap_or_default();
    init_tracing(&config.logging);

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => warn!(error = %err, "could not load .env file"),
    }
    if let Err(err) = loaded {
        warn!(error = %err, "no usable configuration found, using defaults");
    }

    info!("SlaWatch starting...");
    let ctx = AppContext::new_with_config(config)
        .await
        .context("failed to initialise application context")?;

    report(&ctx).await;

    ctx.shutdown().await.context("failed to shut down cleanly")?;
    Ok(())
}

async fn report(ctx: &AppContext) {
    let overview = ctx.catalog.overview();
    let pct = overview.summary.percentages();
    info!(
        applications = overview.applications,
        interfaces = overview.interfaces,
        datasets = overview.datasets,
        breached_pct = pct.breached,
        at_risk_pct = pct.at_risk,
        on_schedule_pct = pct.on_schedule,
        "catalog overview"
    );

    for dept in &ctx.organization.departments {
        info!(
            department = %dept.name,
            status = %dept.status,
            breached = dept.metrics.breached,
            at_risk = dept.metrics.at_risk,
            on_schedule = dept.metrics.on_schedule,
            "department status"
        );
    }

    let dashboards = ctx.dashboards.list().await;
    info!(count = dashboards.len(), db_path = %ctx.db.path().display(), "stored dashboards");

    let sync = ctx.sync.snapshot();
    info!(
        status = %sync.status,
        last_run = %sync.report.last_run,
        next_run = %sync.report.next_run,
        "sync status"
    );
}
