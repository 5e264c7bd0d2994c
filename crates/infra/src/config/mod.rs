//! Configuration loading
//!
//! `SLAWATCH_*` environment variables take precedence; otherwise the first
//! `config.{json,toml}` or `slawatch.{json,toml}` found is parsed.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
