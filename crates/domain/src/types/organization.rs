//! Organization hierarchy (department → team → application) with rolled-up
//! status counts.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use super::catalog::SlaStatus;

/// Per-status interface counts (not percentages)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatusMetrics {
    pub breached: u32,
    pub at_risk: u32,
    pub on_schedule: u32,
}

impl StatusMetrics {
    /// Metrics with a single count in the bucket for `status`.
    pub const fn single(status: SlaStatus) -> Self {
        match status {
            SlaStatus::Breached => Self { breached: 1, at_risk: 0, on_schedule: 0 },
            SlaStatus::AtRisk => Self { breached: 0, at_risk: 1, on_schedule: 0 },
            SlaStatus::OnSchedule => Self { breached: 0, at_risk: 0, on_schedule: 1 },
        }
    }

    /// Count for one status bucket.
    pub const fn count(&self, status: SlaStatus) -> u32 {
        match status {
            SlaStatus::Breached => self.breached,
            SlaStatus::AtRisk => self.at_risk,
            SlaStatus::OnSchedule => self.on_schedule,
        }
    }

    pub const fn total(&self) -> u32 {
        self.breached + self.at_risk + self.on_schedule
    }

    /// Status by presence, not magnitude: any breach wins, then any risk.
    pub const fn status(&self) -> SlaStatus {
        if self.breached > 0 {
            SlaStatus::Breached
        } else if self.at_risk > 0 {
            SlaStatus::AtRisk
        } else {
            SlaStatus::OnSchedule
        }
    }
}

impl Add for StatusMetrics {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            breached: self.breached + rhs.breached,
            at_risk: self.at_risk + rhs.at_risk,
            on_schedule: self.on_schedule + rhs.on_schedule,
        }
    }
}

impl AddAssign for StatusMetrics {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for StatusMetrics {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a StatusMetrics> for StatusMetrics {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Leaf node: one application and its representative status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationNode {
    pub id: String,
    pub name: String,
    pub status: SlaStatus,
    pub metrics: StatusMetrics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamNode {
    pub id: String,
    pub name: String,
    pub status: SlaStatus,
    pub applications: Vec<ApplicationNode>,
    pub metrics: StatusMetrics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentNode {
    pub id: String,
    pub name: String,
    pub status: SlaStatus,
    pub teams: Vec<TeamNode>,
    pub metrics: StatusMetrics,
}

/// Immutable snapshot of the whole hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Organization {
    pub departments: Vec<DepartmentNode>,
}

impl Organization {
    /// Sum over every department.
    pub fn metrics(&self) -> StatusMetrics {
        self.departments.iter().map(|dept| &dept.metrics).sum()
    }

    pub fn department(&self, id: &str) -> Option<&DepartmentNode> {
        self.departments.iter().find(|dept| dept.id == id)
    }

    pub fn teams(&self) -> impl Iterator<Item = &TeamNode> {
        self.departments.iter().flat_map(|dept| dept.teams.iter())
    }

    pub fn applications(&self) -> impl Iterator<Item = &ApplicationNode> {
        self.teams().flat_map(|team| team.applications.iter())
    }
}
