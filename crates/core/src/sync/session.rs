//! Sync session state machine
//!
//! ```text
//! idle ──start──▶ running ──tick (progress = 100)──▶ completed
//!                   │  ▲ tick (progress < 100)
//!                   │  └─┘
//!                   ├──fail──▶ error
//!                   └──cancel──▶ idle
//! ```
//!
//! The session owns no timer; whoever drives [`SyncSession::tick`] decides the
//! cadence. Every transition returns the notification it produces so the
//! driver can emit it.

use chrono::{DateTime, Utc};
use slawatch_domain::constants::{SYNC_PROGRESS_MAX, SYNC_PROGRESS_STEP};
use slawatch_domain::{Notification, SlaWatchError, SyncReport, SyncSnapshot, SyncStatus};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("Sync already running")]
    AlreadyRunning,

    #[error("Sync not running")]
    NotRunning,
}

impl From<SyncError> for SlaWatchError {
    fn from(err: SyncError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

/// Result of advancing the session by one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still running, at the given progress
    Progressed(u8),
    /// Progress reached 100 on this tick
    Completed(Notification),
    /// Not running; nothing changed
    Inactive,
}

/// Keep digits only. An input with no digits means "all applications".
pub fn sanitize_application_id(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    (!digits.is_empty()).then_some(digits)
}

#[derive(Debug, Clone)]
pub struct SyncSession {
    status: SyncStatus,
    progress: u8,
    step: u8,
    application_id: Option<String>,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
    last_error: Option<String>,
    report: SyncReport,
}

impl Default for SyncSession {
    fn default() -> Self {
        Self::new(SYNC_PROGRESS_STEP)
    }
}

impl SyncSession {
    /// Idle session advancing `step` percent per tick (clamped to `1..=100`).
    pub fn new(step: u8) -> Self {
        Self {
            status: SyncStatus::Idle,
            progress: 0,
            step: step.clamp(1, SYNC_PROGRESS_MAX),
            application_id: None,
            started_at: None,
            finished_at: None,
            last_error: None,
            report: SyncReport::default(),
        }
    }

    pub const fn status(&self) -> SyncStatus {
        self.status
    }

    pub const fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_syncing(&self) -> bool {
        self.status == SyncStatus::Running
    }

    /// Begin a run. Rejected while one is already in flight.
    ///
    /// `application_id` is sanitised to digits; an empty result syncs all
    /// applications.
    pub fn start(&mut self, application_id: Option<&str>) -> Result<Notification, SyncError> {
        if self.is_syncing() {
            warn!(progress = self.progress, "sync start rejected: already running");
            return Err(SyncError::AlreadyRunning);
        }

        self.application_id = application_id.and_then(sanitize_application_id);
        self.status = SyncStatus::Running;
        self.progress = 0;
        self.started_at = Some(Utc::now());
        self.finished_at = None;
        self.last_error = None;

        info!(application_id = ?self.application_id, "sync started");
        let description = self.application_id.as_ref().map_or_else(
            || "Syncing all applications".to_string(),
            |id| format!("Syncing application ID: {id}"),
        );
        Ok(Notification::info("Sync started", description))
    }

    /// Advance progress by one step; completes when it reaches 100.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_syncing() {
            return TickOutcome::Inactive;
        }

        self.progress = self.progress.saturating_add(self.step).min(SYNC_PROGRESS_MAX);
        if self.progress < SYNC_PROGRESS_MAX {
            debug!(progress = self.progress, "sync progressed");
            return TickOutcome::Progressed(self.progress);
        }

        self.status = SyncStatus::Completed;
        self.finished_at = Some(Utc::now());
        info!("sync completed");
        TickOutcome::Completed(Notification::info(
            "Sync completed",
            "Data has been synchronized from DLAS",
        ))
    }

    /// Move a running session to `error`.
    pub fn fail(&mut self, reason: &str) -> Result<Notification, SyncError> {
        if !self.is_syncing() {
            return Err(SyncError::NotRunning);
        }

        self.status = SyncStatus::Error;
        self.finished_at = Some(Utc::now());
        self.last_error = Some(reason.to_string());

        warn!(progress = self.progress, reason, "sync failed");
        Ok(Notification::destructive("Sync failed", reason))
    }

    /// Stop a running session. Progress is kept; status returns to `idle`.
    pub fn cancel(&mut self) -> Result<Notification, SyncError> {
        if !self.is_syncing() {
            return Err(SyncError::NotRunning);
        }

        self.status = SyncStatus::Idle;
        self.finished_at = Some(Utc::now());

        info!(progress = self.progress, "sync cancelled");
        Ok(Notification::info("Sync cancelled", format!("Sync stopped at {}%", self.progress)))
    }

    pub fn snapshot(&self) -> SyncSnapshot {
        SyncSnapshot {
            status: self.status,
            progress: self.progress,
            is_syncing: self.is_syncing(),
            application_id: self.application_id.clone(),
            started_at: self.started_at,
            finished_at: self.finished_at,
            last_error: self.last_error.clone(),
            report: self.report.clone(),
        }
    }
}
