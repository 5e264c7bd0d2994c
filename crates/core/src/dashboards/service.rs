//! Dashboard registry - core business logic
//!
//! Every mutation is applied to a copy of the list, persisted, and only then
//! committed to memory. A failed save therefore leaves the registry exactly as
//! it was before the call.

use std::sync::Arc;

use serde::Serialize;
use slawatch_domain::{Dashboard, Notification};
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use super::ports::DashboardStore;
use super::{DashboardError, DashboardResult};
use crate::catalog::{ApplicationHealth, CatalogService};
use crate::notifications::NotificationSink;

/// Active dashboard with each selected application resolved to its health
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub dashboard: Dashboard,
    pub applications: Vec<ApplicationHealth>,
}

#[derive(Debug, Default)]
struct RegistryState {
    dashboards: Vec<Dashboard>,
    active_id: Option<String>,
}

impl RegistryState {
    fn position(&self, id: &str) -> Option<usize> {
        self.dashboards.iter().position(|dashboard| dashboard.id == id)
    }

    fn active(&self) -> Option<&Dashboard> {
        let id = self.active_id.as_deref()?;
        self.dashboards.iter().find(|dashboard| dashboard.id == id)
    }
}

/// Dashboard registry service
pub struct DashboardRegistry {
    store: Arc<dyn DashboardStore>,
    notifier: Arc<dyn NotificationSink>,
    state: Mutex<RegistryState>,
}

impl DashboardRegistry {
    /// Registry over an empty list; nothing is read from `store`.
    pub fn new(store: Arc<dyn DashboardStore>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self { store, notifier, state: Mutex::new(RegistryState::default()) }
    }

    /// Load the stored list once. No dashboard is active afterwards.
    #[instrument(skip_all)]
    pub async fn load(
        store: Arc<dyn DashboardStore>,
        notifier: Arc<dyn NotificationSink>,
    ) -> DashboardResult<Self> {
        let dashboards = store.load_all().await?;
        info!(count = dashboards.len(), "dashboards loaded");

        Ok(Self {
            store,
            notifier,
            state: Mutex::new(RegistryState { dashboards, active_id: None }),
        })
    }

    /// Create a dashboard with an empty selection and make it active.
    #[instrument(skip(self))]
    pub async fn create(&self, name: &str) -> DashboardResult<Dashboard> {
        let name = self.validate_name(name)?;
        let dashboard = Dashboard::new(Uuid::new_v4().to_string(), name);

        let mut state = self.state.lock().await;
        let mut next = state.dashboards.clone();
        next.push(dashboard.clone());
        self.persist(&next).await?;

        state.dashboards = next;
        state.active_id = Some(dashboard.id.clone());
        drop(state);

        info!(dashboard_id = %dashboard.id, "dashboard created");
        self.notifier.notify(Notification::info(
            "Dashboard created",
            format!("\"{}\" is now the active dashboard", dashboard.name),
        ));
        Ok(dashboard)
    }

    /// Make `id` the active dashboard. The stored list is not touched.
    #[instrument(skip(self))]
    pub async fn select(&self, id: &str) -> DashboardResult<Dashboard> {
        let mut state = self.state.lock().await;
        let Some(pos) = state.position(id) else {
            drop(state);
            return Err(self.not_found(id));
        };

        let dashboard = state.dashboards[pos].clone();
        state.active_id = Some(dashboard.id.clone());
        drop(state);

        debug!(dashboard_id = %id, "dashboard selected");
        self.notifier.notify(Notification::info(
            "Dashboard selected",
            format!("Now viewing \"{}\"", dashboard.name),
        ));
        Ok(dashboard)
    }

    /// Remove `id`; clears the active reference if it pointed there.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> DashboardResult<Dashboard> {
        let mut state = self.state.lock().await;
        let Some(pos) = state.position(id) else {
            drop(state);
            return Err(self.not_found(id));
        };

        let mut next = state.dashboards.clone();
        let removed = next.remove(pos);
        self.persist(&next).await?;

        state.dashboards = next;
        if state.active_id.as_deref() == Some(id) {
            state.active_id = None;
        }
        drop(state);

        info!(dashboard_id = %id, "dashboard deleted");
        self.notifier.notify(Notification::info(
            "Dashboard deleted",
            format!("\"{}\" has been removed", removed.name),
        ));
        Ok(removed)
    }

    /// Replace the name of `id` in place.
    #[instrument(skip(self))]
    pub async fn rename(&self, id: &str, new_name: &str) -> DashboardResult<Dashboard> {
        let name = self.validate_name(new_name)?;

        let mut state = self.state.lock().await;
        let Some(pos) = state.position(id) else {
            drop(state);
            return Err(self.not_found(id));
        };

        let mut next = state.dashboards.clone();
        next[pos].name = name;
        let renamed = next[pos].clone();
        self.persist(&next).await?;

        state.dashboards = next;
        drop(state);

        info!(dashboard_id = %id, "dashboard renamed");
        self.notifier.notify(Notification::info(
            "Dashboard renamed",
            format!("Dashboard is now called \"{}\"", renamed.name),
        ));
        Ok(renamed)
    }

    /// Toggle `app_name` in the active dashboard's selection.
    #[instrument(skip(self))]
    pub async fn toggle_application(&self, app_name: &str) -> DashboardResult<Dashboard> {
        let mut state = self.state.lock().await;
        let Some(pos) = state.active_id.as_deref().and_then(|id| state.position(id)) else {
            drop(state);
            warn!(app = %app_name, "toggle rejected: no active dashboard");
            self.notifier.notify(Notification::destructive(
                "Error",
                "Select or create a dashboard first",
            ));
            return Err(DashboardError::NoActiveDashboard);
        };

        let mut next = state.dashboards.clone();
        let selected = next[pos].toggle(app_name);
        let updated = next[pos].clone();
        self.persist(&next).await?;

        state.dashboards = next;
        drop(state);

        debug!(dashboard_id = %updated.id, app = %app_name, selected, "application toggled");
        Ok(updated)
    }

    pub async fn list(&self) -> Vec<Dashboard> {
        self.state.lock().await.dashboards.clone()
    }

    pub async fn active(&self) -> Option<Dashboard> {
        self.state.lock().await.active().cloned()
    }

    /// The active dashboard with each selected application's health.
    pub async fn active_view(&self, catalog: &CatalogService) -> Option<DashboardView> {
        let dashboard = self.active().await?;
        let applications =
            dashboard.selected_apps.iter().map(|app| catalog.application_health(app)).collect();
        Some(DashboardView { dashboard, applications })
    }

    fn validate_name(&self, name: &str) -> DashboardResult<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            warn!("dashboard name rejected: empty after trimming");
            self.notifier
                .notify(Notification::destructive("Error", DashboardError::EmptyName.to_string()));
            return Err(DashboardError::EmptyName);
        }
        Ok(trimmed.to_string())
    }

    fn not_found(&self, id: &str) -> DashboardError {
        warn!(dashboard_id = %id, "dashboard not found");
        self.notifier.notify(Notification::destructive(
            "Dashboard not found",
            format!("No dashboard with ID {id} was found."),
        ));
        DashboardError::NotFound(id.to_string())
    }

    async fn persist(&self, dashboards: &[Dashboard]) -> DashboardResult<()> {
        if let Err(err) = self.store.save_all(dashboards).await {
            error!(error = %err, "failed to persist dashboards");
            self.notifier.notify(Notification::destructive(
                "Error",
                "Could not save dashboards. Please try again.",
            ));
            return Err(DashboardError::Storage(err));
        }
        Ok(())
    }
}
