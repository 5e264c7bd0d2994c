//! Database implementations

pub mod dashboard_repository;
pub mod kv_store;
pub mod manager;

pub use dashboard_repository::SqliteDashboardRepository;
pub use kv_store::SqliteKeyValueStore;
pub use manager::{DbManager, SqliteConnection};
