//! Read-only queries over the monitored catalog.
//!
//! The catalog never changes after startup, so the service hands out borrowed
//! views instead of copies wherever it can.

pub mod ports;

use std::sync::Arc;

use serde::Serialize;
use slawatch_domain::{
    Application, Catalog, Interface, Notification, SlaStatus, SlaWatchError, StatusFilter,
};
use tracing::{debug, warn};

use crate::notifications::NotificationSink;
use crate::status::summary::StatusSummary;

/// Headline counts for the overview page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOverview {
    pub applications: usize,
    pub interfaces: usize,
    pub datasets: usize,
    pub summary: StatusSummary,
}

/// One application with all of its interfaces and their worst status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationHealth {
    pub application: String,
    pub status: SlaStatus,
    pub interfaces: Vec<Interface>,
}

impl ApplicationHealth {
    /// Worst-of-all status: any breached interface wins, then any at-risk.
    pub fn from_interfaces<'a, I>(application: &str, interfaces: I) -> Self
    where
        I: IntoIterator<Item = &'a Interface>,
    {
        let interfaces: Vec<Interface> = interfaces
            .into_iter()
            .filter(|iface| iface.application == application)
            .cloned()
            .collect();
        let status = interfaces
            .iter()
            .map(|iface| iface.status)
            .fold(SlaStatus::OnSchedule, SlaStatus::worst);

        Self { application: application.to_string(), status, interfaces }
    }
}

/// Query service over an immutable [`Catalog`]
pub struct CatalogService {
    catalog: Arc<Catalog>,
    notifier: Arc<dyn NotificationSink>,
}

impl CatalogService {
    pub fn new(catalog: Arc<Catalog>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self { catalog, notifier }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn overview(&self) -> CatalogOverview {
        CatalogOverview {
            applications: self.catalog.applications.len(),
            interfaces: self.catalog.interfaces.len(),
            datasets: self.catalog.datasets.len(),
            summary: self.summary(),
        }
    }

    pub fn summary(&self) -> StatusSummary {
        StatusSummary::from_interfaces(&self.catalog.interfaces)
    }

    /// Interfaces for one status tab, in catalog order.
    pub fn filter_by_status(&self, filter: StatusFilter) -> Vec<&Interface> {
        self.catalog.interfaces.iter().filter(|iface| filter.matches(iface.status)).collect()
    }

    /// Look up an interface by id.
    ///
    /// A miss raises a destructive notification and returns
    /// [`SlaWatchError::NotFound`]; the caller decides where to fall back to.
    pub fn find_interface(&self, id: &str) -> Result<&Interface, SlaWatchError> {
        if let Some(iface) = self.catalog.interfaces.iter().find(|iface| iface.id == id) {
            debug!(interface_id = %id, "interface found");
            return Ok(iface);
        }

        warn!(interface_id = %id, "interface lookup missed");
        self.notifier.notify(Notification::destructive(
            "Interface not found",
            format!("No interface with ID {id} was found."),
        ));
        Err(SlaWatchError::NotFound(format!("interface {id}")))
    }

    /// Case-insensitive substring match on application names.
    ///
    /// An empty (or whitespace) term returns every application.
    pub fn search_applications(&self, term: &str) -> Vec<&Application> {
        let needle = term.trim().to_lowercase();
        self.catalog
            .applications
            .iter()
            .filter(|app| needle.is_empty() || app.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn application_health(&self, application: &str) -> ApplicationHealth {
        ApplicationHealth::from_interfaces(application, &self.catalog.interfaces)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use slawatch_domain::{DataStats, Dataset, DatasetKind};

    use super::*;

    #[derive(Default)]
    struct Collect(Mutex<Vec<Notification>>);

    impl NotificationSink for Collect {
        fn notify(&self, notification: Notification) {
            self.0.lock().unwrap().push(notification);
        }
    }

    fn iface(id: &str, application: &str, status: SlaStatus) -> Interface {
        Interface {
            id: id.to_string(),
            name: format!("Interface {id}"),
            kind: "API Integration".to_string(),
            application: application.to_string(),
            status,
            next_run: "Today, 10:00 AM".to_string(),
            last_update: "Today, 08:00 AM".to_string(),
            schedule: "Daily".to_string(),
            datasets: vec![Dataset {
                name: "Orders".to_string(),
                kind: DatasetKind::Database,
                schedule: "Daily".to_string(),
            }],
            data_stats: DataStats::default(),
            performance_history: [1, 2, 3, 4, 5, 6, 7],
        }
    }

    fn service() -> (CatalogService, Arc<Collect>) {
        let catalog = Catalog {
            applications: vec![
                Application { id: "a1".to_string(), name: "CRM System".to_string() },
                Application { id: "a2".to_string(), name: "HR Dashboard".to_string() },
            ],
            interfaces: vec![
                iface("1", "CRM System", SlaStatus::OnSchedule),
                iface("2", "CRM System", SlaStatus::Breached),
                iface("3", "HR Dashboard", SlaStatus::AtRisk),
            ],
            datasets: Vec::new(),
        };
        let sink = Arc::new(Collect::default());
        (CatalogService::new(Arc::new(catalog), sink.clone()), sink)
    }

    #[test]
    fn filter_by_status_keeps_catalog_order() {
        let (service, _) = service();

        let ids: Vec<_> =
            service.filter_by_status(StatusFilter::All).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);

        let breached = service.filter_by_status(StatusFilter::Breached);
        assert_eq!(breached.len(), 1);
        assert_eq!(breached[0].id, "2");
    }

    #[test]
    fn find_interface_miss_notifies() {
        let (service, sink) = service();

        assert!(service.find_interface("2").is_ok());
        let err = service.find_interface("999").unwrap_err();
        assert!(matches!(err, SlaWatchError::NotFound(_)));

        let notes = sink.0.lock().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Interface not found");
        assert_eq!(notes[0].description, "No interface with ID 999 was found.");
        assert!(notes[0].is_destructive());
    }

    #[test]
    fn search_is_case_insensitive() {
        let (service, _) = service();

        let hits = service.search_applications("crm");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "CRM System");
        assert_eq!(service.search_applications("  ").len(), 2);
    }

    #[test]
    fn application_health_uses_worst_status() {
        let (service, _) = service();

        let crm = service.application_health("CRM System");
        assert_eq!(crm.status, SlaStatus::Breached);
        assert_eq!(crm.interfaces.len(), 2);

        let unknown = service.application_health("Nope");
        assert_eq!(unknown.status, SlaStatus::OnSchedule);
        assert!(unknown.interfaces.is_empty());
    }
}
