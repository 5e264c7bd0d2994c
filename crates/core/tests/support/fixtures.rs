//! Catalog fixtures

use slawatch_domain::{Application, Catalog, DataStats, Interface, SlaStatus};

pub fn application(id: &str, name: &str) -> Application {
    Application { id: id.to_string(), name: name.to_string() }
}

pub fn interface(id: &str, application: &str, status: SlaStatus) -> Interface {
    Interface {
        id: id.to_string(),
        name: format!("{application} feed {id}"),
        kind: "API Integration".to_string(),
        application: application.to_string(),
        status,
        next_run: "Today, 02:00 PM".to_string(),
        last_update: "Today, 10:00 AM".to_string(),
        schedule: "Every 4 hours".to_string(),
        datasets: Vec::new(),
        data_stats: DataStats::default(),
        performance_history: [40, 42, 38, 45, 41, 39, 44],
    }
}

/// Seven applications, so teams 1 and 2 each receive two.
///
/// `CRM System` has a breached interface listed *after* an on-schedule one,
/// which separates first-match roll-up from worst-of-all health.
pub fn catalog() -> Catalog {
    Catalog {
        applications: vec![
            application("1", "CRM System"),
            application("2", "ERP Platform"),
            application("3", "Payroll"),
            application("4", "Warehouse"),
            application("5", "Shipping"),
            application("6", "HR Dashboard"),
            application("7", "Data Lake"),
        ],
        interfaces: vec![
            interface("i1", "CRM System", SlaStatus::OnSchedule),
            interface("i2", "CRM System", SlaStatus::Breached),
            interface("i3", "ERP Platform", SlaStatus::AtRisk),
            interface("i4", "Payroll", SlaStatus::Breached),
            interface("i5", "Shipping", SlaStatus::OnSchedule),
            interface("i6", "HR Dashboard", SlaStatus::AtRisk),
        ],
        datasets: Vec::new(),
    }
}
