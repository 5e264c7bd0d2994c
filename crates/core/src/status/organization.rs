//! Organization roll-up: applications → teams → departments.
//!
//! Each application takes the status of the *first* interface whose
//! `application` field equals its name; applications without interfaces are
//! on-schedule with zero counts. Teams and departments hold the element-wise
//! sum of their children's metrics and derive their status from it.
//!
//! Team membership is positional: [`assign_team`] maps the application's
//! index in the catalog onto five fixed teams. The mapping is a plain
//! function so callers can swap it via [`OrganizationBuilder::with_assignment`].

use slawatch_domain::constants::TEAM_COUNT;
use slawatch_domain::{
    Application, ApplicationNode, Catalog, DepartmentNode, Interface, Organization, SlaStatus,
    StatusMetrics, TeamNode,
};
use tracing::debug;

/// The three fixed departments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepartmentId {
    InformationTechnology,
    Finance,
    Operations,
}

impl DepartmentId {
    pub const ALL: [Self; 3] = [Self::InformationTechnology, Self::Finance, Self::Operations];

    pub const fn id(self) -> &'static str {
        match self {
            Self::InformationTechnology => "dept1",
            Self::Finance => "dept2",
            Self::Operations => "dept3",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::InformationTechnology => "Information Technology",
            Self::Finance => "Finance",
            Self::Operations => "Operations",
        }
    }
}

/// The five fixed teams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamId {
    Development,
    Infrastructure,
    Accounting,
    Logistics,
    SupplyChain,
}

impl TeamId {
    pub const ALL: [Self; TEAM_COUNT] = [
        Self::Development,
        Self::Infrastructure,
        Self::Accounting,
        Self::Logistics,
        Self::SupplyChain,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Development => "team1",
            Self::Infrastructure => "team2",
            Self::Accounting => "team3",
            Self::Logistics => "team4",
            Self::SupplyChain => "team5",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Development => "Development",
            Self::Infrastructure => "Infrastructure",
            Self::Accounting => "Accounting",
            Self::Logistics => "Logistics",
            Self::SupplyChain => "Supply Chain",
        }
    }

    pub const fn department(self) -> DepartmentId {
        match self {
            Self::Development | Self::Infrastructure => DepartmentId::InformationTechnology,
            Self::Accounting => DepartmentId::Finance,
            Self::Logistics | Self::SupplyChain => DepartmentId::Operations,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::Development => 0,
            Self::Infrastructure => 1,
            Self::Accounting => 2,
            Self::Logistics => 3,
            Self::SupplyChain => 4,
        }
    }
}

/// Maps an application's catalog index to its team.
pub type TeamAssignment = fn(usize) -> TeamId;

/// Round-robin over the five teams: `index mod 5` in [`TeamId::ALL`] order.
pub const fn assign_team(index: usize) -> TeamId {
    TeamId::ALL[index % TEAM_COUNT]
}

/// Builds the organization snapshot with a configurable team assignment
#[derive(Debug, Clone, Copy)]
pub struct OrganizationBuilder {
    assignment: TeamAssignment,
}

impl Default for OrganizationBuilder {
    fn default() -> Self {
        Self { assignment: assign_team }
    }
}

impl OrganizationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the positional team assignment policy.
    #[must_use]
    pub fn with_assignment(mut self, assignment: TeamAssignment) -> Self {
        self.assignment = assignment;
        self
    }

    pub fn build(&self, applications: &[Application], interfaces: &[Interface]) -> Organization {
        let mut buckets: [Vec<ApplicationNode>; TEAM_COUNT] = Default::default();

        for (index, app) in applications.iter().enumerate() {
            let team = (self.assignment)(index);
            buckets[team.slot()].push(application_node(app, interfaces));
        }

        let mut teams: Vec<(TeamId, TeamNode)> = TeamId::ALL
            .into_iter()
            .zip(buckets)
            .map(|(team, applications)| (team, team_node(team, applications)))
            .collect();

        let departments = DepartmentId::ALL
            .into_iter()
            .map(|dept| {
                let (members, rest): (Vec<_>, Vec<_>) =
                    teams.drain(..).partition(|(team, _)| team.department() == dept);
                teams = rest;
                department_node(dept, members.into_iter().map(|(_, node)| node).collect())
            })
            .collect();

        let organization = Organization { departments };
        debug!(
            applications = applications.len(),
            interfaces = interfaces.len(),
            status = %organization.metrics().status(),
            "organization roll-up computed"
        );
        organization
    }
}

/// Roll up a catalog with the default round-robin assignment.
pub fn build_organization(catalog: &Catalog) -> Organization {
    OrganizationBuilder::default().build(&catalog.applications, &catalog.interfaces)
}

/// Status by presence: any breach wins, then any risk.
pub const fn derive_status(metrics: &StatusMetrics) -> SlaStatus {
    metrics.status()
}

fn application_node(app: &Application, interfaces: &[Interface]) -> ApplicationNode {
    let representative = interfaces.iter().find(|iface| iface.application == app.name);

    let (status, metrics) = representative.map_or_else(
        || (SlaStatus::OnSchedule, StatusMetrics::default()),
        |iface| (iface.status, StatusMetrics::single(iface.status)),
    );

    ApplicationNode { id: app.id.clone(), name: app.name.clone(), status, metrics }
}

fn team_node(team: TeamId, applications: Vec<ApplicationNode>) -> TeamNode {
    let metrics: StatusMetrics = applications.iter().map(|app| &app.metrics).sum();
    TeamNode {
        id: team.id().to_string(),
        name: team.name().to_string(),
        status: derive_status(&metrics),
        applications,
        metrics,
    }
}

fn department_node(dept: DepartmentId, teams: Vec<TeamNode>) -> DepartmentNode {
    let metrics: StatusMetrics = teams.iter().map(|team| &team.metrics).sum();
    DepartmentNode {
        id: dept.id().to_string(),
        name: dept.name().to_string(),
        status: derive_status(&metrics),
        teams,
        metrics,
    }
}
