//! User-defined dashboards: named selections of applications.

use serde::{Deserialize, Serialize};

/// A saved, named subset of applications for focused monitoring
///
/// Serialized as `{id, name, selectedApps}`; the order of `selected_apps`
/// carries no meaning but is preserved across storage round trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub selected_apps: Vec<String>,
}

impl Dashboard {
    /// A dashboard with no applications selected.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), selected_apps: Vec::new() }
    }

    pub fn contains(&self, app_name: &str) -> bool {
        self.selected_apps.iter().any(|app| app == app_name)
    }

    /// Add `app_name` if absent, remove it if present.
    ///
    /// Returns `true` when the application is selected afterwards.
    pub fn toggle(&mut self, app_name: &str) -> bool {
        if let Some(pos) = self.selected_apps.iter().position(|app| app == app_name) {
            self.selected_apps.remove(pos);
            false
        } else {
            self.selected_apps.push(app_name.to_string());
            true
        }
    }
}
