//! Port for loading the monitored catalog

use slawatch_domain::{Catalog, Result};

/// Supplies the static catalog once at startup
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Catalog>;
}
