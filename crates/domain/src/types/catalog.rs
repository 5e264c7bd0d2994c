//! Monitored catalog: applications, their interfaces and datasets.
//!
//! The catalog is loaded once at startup and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::constants::PERFORMANCE_HISTORY_DAYS;
use crate::impl_domain_status_conversions;

/// Coarse SLA health classification for a monitored interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SlaStatus {
    Breached,
    AtRisk,
    #[default]
    OnSchedule,
}

impl_domain_status_conversions!(SlaStatus {
    Breached => "breached",
    AtRisk => "at-risk",
    OnSchedule => "on-schedule",
});

impl SlaStatus {
    /// All statuses in priority order (most severe first)
    pub const ALL: [Self; 3] = [Self::Breached, Self::AtRisk, Self::OnSchedule];

    /// Lower rank is more severe.
    pub const fn severity_rank(self) -> u8 {
        match self {
            Self::Breached => 0,
            Self::AtRisk => 1,
            Self::OnSchedule => 2,
        }
    }

    /// The more severe of two statuses.
    #[must_use]
    pub const fn worst(self, other: Self) -> Self {
        if other.severity_rank() < self.severity_rank() {
            other
        } else {
            self
        }
    }
}

/// Interface list tab: everything, or a single status bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    #[default]
    All,
    Breached,
    AtRisk,
    OnSchedule,
}

impl_domain_status_conversions!(StatusFilter {
    All => "all",
    Breached => "breached",
    AtRisk => "at-risk",
    OnSchedule => "on-schedule",
});

impl StatusFilter {
    /// Whether an interface with `status` belongs in this tab.
    pub fn matches(self, status: SlaStatus) -> bool {
        match self {
            Self::All => true,
            Self::Breached => status == SlaStatus::Breached,
            Self::AtRisk => status == SlaStatus::AtRisk,
            Self::OnSchedule => status == SlaStatus::OnSchedule,
        }
    }
}

impl From<SlaStatus> for StatusFilter {
    fn from(status: SlaStatus) -> Self {
        match status {
            SlaStatus::Breached => Self::Breached,
            SlaStatus::AtRisk => Self::AtRisk,
            SlaStatus::OnSchedule => Self::OnSchedule,
        }
    }
}

/// Storage medium of a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    File,
    Database,
}

impl_domain_status_conversions!(DatasetKind {
    File => "file",
    Database => "database",
});

/// A dataset fed by an interface. Purely descriptive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DatasetKind,
    pub schedule: String,
}

/// Aggregate statistics shown on the interface details view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DataStats {
    pub size: String,
    pub records: String,
    pub avg_processing: String,
    pub last_modified: String,
}

/// One monitored data-integration job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interface {
    pub id: String,
    pub name: String,
    /// Free-text category, e.g. "API Integration"
    #[serde(rename = "type")]
    pub kind: String,
    /// Owning application, matched by exact name
    pub application: String,
    pub status: SlaStatus,
    pub next_run: String,
    pub last_update: String,
    pub schedule: String,
    pub datasets: Vec<Dataset>,
    pub data_stats: DataStats,
    /// Seconds per run, one entry per weekday
    pub performance_history: [u32; PERFORMANCE_HISTORY_DAYS],
}

/// A monitored application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub name: String,
}

/// Everything the dashboard monitors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Catalog {
    pub applications: Vec<Application>,
    pub interfaces: Vec<Interface>,
    pub datasets: Vec<Dataset>,
}
