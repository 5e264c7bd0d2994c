//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Sync simulation
pub const SYNC_TICK_INTERVAL_MS: u64 = 800;
pub const SYNC_PROGRESS_STEP: u8 = 10;
pub const SYNC_PROGRESS_MAX: u8 = 100;

// Dashboard persistence
pub const DASHBOARDS_STORAGE_KEY: &str = "slawatch.dashboards";

// Organization roll-up
pub const TEAM_COUNT: usize = 5;
pub const PERFORMANCE_HISTORY_DAYS: usize = 7;

// Storage defaults
pub const DEFAULT_STORAGE_PATH: &str = "slawatch.db";
pub const DEFAULT_POOL_SIZE: u32 = 4;
