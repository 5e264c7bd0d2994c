//! Application context - dependency injection container

use std::sync::Arc;

use slawatch_core::{
    build_organization, CatalogService, CatalogSource, DashboardRegistry, DashboardStore,
    NotificationSink,
};
use slawatch_domain::{Config, Organization, Result};
use slawatch_infra::{
    config, BroadcastNotificationSink, CompositeNotificationSink, DbManager, EmbeddedCatalog,
    SqliteDashboardRepository, SyncRunner, SyncRunnerConfig, TracingNotificationSink,
};
use tracing::{info, instrument, warn};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub catalog: Arc<CatalogService>,
    /// Roll-up of the catalog, computed once at startup
    pub organization: Arc<Organization>,
    pub dashboards: Arc<DashboardRegistry>,
    pub sync: Arc<SyncRunner>,
    /// Subscribe here to receive every toast a frontend would show
    pub notifications: Arc<BroadcastNotificationSink>,
    notifier: Arc<dyn NotificationSink>,
}

impl AppContext {
    /// Build the context from the environment or a config file, falling back
    /// to defaults when neither is present.
    pub async fn new() -> Result<Self> {
        let config = config::load().unwrap_or_else(|err| {
            warn!(error = %err, "no usable configuration found, using defaults");
            Config::default()
        });
        Self::new_with_config(config).await
    }

    /// Build the context with the embedded catalog.
    pub async fn new_with_config(config: Config) -> Result<Self> {
        Self::new_with_catalog(config, &EmbeddedCatalog::default()).await
    }

    /// Build the context over any catalog source.
    #[instrument(skip_all, fields(db_path = %config.storage.path))]
    pub async fn new_with_catalog(config: Config, source: &dyn CatalogSource) -> Result<Self> {
        config.validate()?;

        let notifications = Arc::new(BroadcastNotificationSink::default());
        let notifier: Arc<dyn NotificationSink> = Arc::new(
            CompositeNotificationSink::new()
                .with_sink(Arc::new(TracingNotificationSink))
                .with_sink(notifications.clone()),
        );

        let db = Arc::new(DbManager::from_config(&config.storage)?);
        let store: Arc<dyn DashboardStore> = Arc::new(SqliteDashboardRepository::new(
            Arc::clone(&db),
            config.storage.namespace.clone(),
        ));
        let dashboards = Arc::new(DashboardRegistry::load(store, Arc::clone(&notifier)).await?);

        let catalog = Arc::new(source.load()?);
        let organization = Arc::new(build_organization(&catalog));
        let catalog = Arc::new(CatalogService::new(catalog, Arc::clone(&notifier)));

        let sync = Arc::new(SyncRunner::new(
            SyncRunnerConfig::from(&config.sync),
            Arc::clone(&notifier),
        ));

        info!(
            db_path = %db.path().display(),
            applications = catalog.catalog().applications.len(),
            interfaces = catalog.catalog().interfaces.len(),
            "application context ready"
        );

        Ok(Self { config, db, catalog, organization, dashboards, sync, notifications, notifier })
    }

    /// The sink every service in this context reports to.
    pub fn notifier(&self) -> Arc<dyn NotificationSink> {
        Arc::clone(&self.notifier)
    }

    /// Stop the sync timer if it is running.
    pub async fn shutdown(&self) -> Result<()> {
        if self.sync.is_running() {
            self.sync.cancel().await?;
        }
        info!("application context shut down");
        Ok(())
    }
}
