//! Three-way status counts over a flat set of interfaces.

use serde::{Deserialize, Serialize};
use slawatch_domain::{Interface, SlaStatus, StatusMetrics};

/// Counts per SLA status plus the total they add up to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub total: u32,
    pub metrics: StatusMetrics,
}

/// Share of the total per status, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatusPercentages {
    pub breached: f64,
    pub at_risk: f64,
    pub on_schedule: f64,
}

impl StatusSummary {
    pub fn from_interfaces<'a, I>(interfaces: I) -> Self
    where
        I: IntoIterator<Item = &'a Interface>,
    {
        Self::from_statuses(interfaces.into_iter().map(|iface| iface.status))
    }

    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = SlaStatus>,
    {
        let metrics: StatusMetrics = statuses.into_iter().map(StatusMetrics::single).sum();
        Self { total: metrics.total(), metrics }
    }

    pub const fn count(&self, status: SlaStatus) -> u32 {
        self.metrics.count(status)
    }

    /// Percent of the total for `status`; an empty summary yields `0.0`.
    pub fn percentage(&self, status: SlaStatus) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.count(status)) * 100.0 / f64::from(self.total)
    }

    pub fn percentages(&self) -> StatusPercentages {
        StatusPercentages {
            breached: self.percentage(SlaStatus::Breached),
            at_risk: self.percentage(SlaStatus::AtRisk),
            on_schedule: self.percentage(SlaStatus::OnSchedule),
        }
    }

    /// Overall status by the breached > at-risk > on-schedule rule.
    pub const fn status(&self) -> SlaStatus {
        self.metrics.status()
    }
}
