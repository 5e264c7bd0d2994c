//! # SlaWatch Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Status summary and organization roll-up
//! - Catalog queries (filtering, lookup, application health)
//! - Dashboard registry use cases
//! - Sync session state machine
//! - Port/adapter interfaces (traits)
//!
//! ## Architecture Principles
//! - Only depends on `slawatch-domain`
//! - No database, timer, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod catalog;
pub mod dashboards;
pub mod notifications;
pub mod status;
pub mod sync;

// Re-export specific items to avoid ambiguity
pub use catalog::ports::CatalogSource;
pub use catalog::{ApplicationHealth, CatalogOverview, CatalogService};
pub use dashboards::ports::DashboardStore;
pub use dashboards::{DashboardError, DashboardRegistry, DashboardResult, DashboardView};
pub use notifications::ports::NotificationSink;
pub use status::organization::{
    assign_team, build_organization, derive_status, DepartmentId, OrganizationBuilder,
    TeamAssignment, TeamId,
};
pub use status::summary::{StatusPercentages, StatusSummary};
pub use sync::session::{sanitize_application_id, SyncError, SyncSession, TickOutcome};
