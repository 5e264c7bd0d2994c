//! # SlaWatch Domain
//!
//! Business domain types and models for SlaWatch.
//!
//! This crate contains:
//! - Catalog types (interfaces, datasets, applications)
//! - Organization roll-up nodes and status metrics
//! - User-defined dashboards, sync session snapshots and notifications
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other SlaWatch crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
