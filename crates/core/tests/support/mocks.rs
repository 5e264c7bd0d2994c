//! Mock port implementations for testing

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use slawatch_core::{DashboardStore, NotificationSink};
use slawatch_domain::{Dashboard, Notification, Result as DomainResult, SlaWatchError};

/// In-memory mock for `DashboardStore`.
///
/// Counts saves and can be switched into a failing mode to exercise the
/// persistence error path.
#[derive(Default)]
pub struct InMemoryDashboardStore {
    dashboards: Mutex<Vec<Dashboard>>,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
}

impl InMemoryDashboardStore {
    pub fn seeded(dashboards: Vec<Dashboard>) -> Arc<Self> {
        Arc::new(Self { dashboards: Mutex::new(dashboards), ..Self::default() })
    }

    pub fn stored(&self) -> Vec<Dashboard> {
        self.dashboards.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl DashboardStore for InMemoryDashboardStore {
    async fn load_all(&self) -> DomainResult<Vec<Dashboard>> {
        Ok(self.stored())
    }

    async fn save_all(&self, dashboards: &[Dashboard]) -> DomainResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(SlaWatchError::Database("disk full".to_string()));
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.dashboards.lock().unwrap() = dashboards.to_vec();
        Ok(())
    }
}

/// Collects every notification in emission order.
#[derive(Default)]
pub struct RecordingSink {
    notes: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn notes(&self) -> Vec<Notification> {
        self.notes.lock().unwrap().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.notes().into_iter().map(|note| note.title).collect()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notes.lock().unwrap().last().cloned()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.notes.lock().unwrap().push(notification);
    }
}
