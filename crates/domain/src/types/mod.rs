//! Domain types and models

pub mod catalog;
pub mod dashboard;
pub mod notification;
pub mod organization;
pub mod sync;

pub use catalog::{
    Application, Catalog, DataStats, Dataset, DatasetKind, Interface, SlaStatus, StatusFilter,
};
pub use dashboard::Dashboard;
pub use notification::{Notification, NotificationVariant};
pub use organization::{ApplicationNode, DepartmentNode, Organization, StatusMetrics, TeamNode};
pub use sync::{SyncCategoryStats, SyncReport, SyncSnapshot, SyncStatus};
