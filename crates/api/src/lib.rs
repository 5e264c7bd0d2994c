//! # SlaWatch API
//!
//! Application layer - commands and main entry point.
//!
//! This crate contains:
//! - Commands (the calls a frontend makes into the backend)
//! - Application context (dependency injection)
//! - Logging setup and the `slawatch` binary
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Every command returns `Result<T, String>` like a UI bridge

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
