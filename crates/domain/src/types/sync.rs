//! Simulated external sync job: lifecycle status and report data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Sync lifecycle: `idle → running → completed | error`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    #[default]
    Idle,
    Running,
    Error,
    Completed,
}

impl_domain_status_conversions!(SyncStatus {
    Idle => "idle",
    Running => "running",
    Error => "error",
    Completed => "completed",
});

/// Counter block for one synced category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncCategoryStats {
    pub total: u32,
    pub processed: u32,
    /// Whole percent, 0..=100
    pub success_rate: u8,
}

impl SyncCategoryStats {
    pub const fn new(total: u32, processed: u32, success_rate: u8) -> Self {
        Self { total, processed, success_rate }
    }
}

/// Fixed report figures shown alongside the live progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub last_run: String,
    pub next_run: String,
    pub applications: SyncCategoryStats,
    pub interfaces: SyncCategoryStats,
    pub datasets: SyncCategoryStats,
    pub elapsed_time: String,
    pub errors: Vec<String>,
}

impl Default for SyncReport {
    fn default() -> Self {
        Self {
            last_run: "08:27 PM".to_string(),
            next_run: "06:00 AM".to_string(),
            applications: SyncCategoryStats::new(15, 15, 100),
            interfaces: SyncCategoryStats::new(4, 2, 50),
            datasets: SyncCategoryStats::new(12, 0, 0),
            elapsed_time: "1s".to_string(),
            errors: vec![
                "Error processing dataset 'Customer Records': Connection timeout".to_string(),
                "Error processing interface 'Shipping API': Invalid response format".to_string(),
            ],
        }
    }
}

/// Point-in-time view of a sync session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSnapshot {
    pub status: SyncStatus,
    pub progress: u8,
    pub is_syncing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
    pub report: SyncReport,
}
