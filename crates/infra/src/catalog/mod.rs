//! Static catalog shipped inside the binary.

use slawatch_core::CatalogSource;
use slawatch_domain::{Catalog, Result, SlaWatchError};
use tracing::debug;

const MOCK_CATALOG_JSON: &str = include_str!("mock_catalog.json");

/// Catalog source backed by an embedded JSON document
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedCatalog {
    raw: &'static str,
}

impl Default for EmbeddedCatalog {
    fn default() -> Self {
        Self { raw: MOCK_CATALOG_JSON }
    }
}

impl EmbeddedCatalog {
    /// Source over a caller-supplied document with the same shape.
    pub const fn from_static(raw: &'static str) -> Self {
        Self { raw }
    }
}

impl CatalogSource for EmbeddedCatalog {
    fn load(&self) -> Result<Catalog> {
        let catalog: Catalog = serde_json::from_str(self.raw)
            .map_err(|err| SlaWatchError::Config(format!("invalid catalog document: {err}")))?;
        debug!(
            applications = catalog.applications.len(),
            interfaces = catalog.interfaces.len(),
            datasets = catalog.datasets.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use slawatch_domain::{DatasetKind, SlaStatus};

    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = EmbeddedCatalog::default().load().unwrap();

        assert_eq!(catalog.applications.len(), 5);
        assert_eq!(catalog.interfaces.len(), 6);
        assert_eq!(catalog.datasets.len(), 12);

        let first = &catalog.interfaces[0];
        assert_eq!(first.id, "if1");
        assert_eq!(first.status, SlaStatus::Breached);
        assert_eq!(first.datasets[0].kind, DatasetKind::Database);
        assert_eq!(first.data_stats.avg_processing, "42 seconds");
        assert_eq!(first.performance_history, [60, 55, 48, 75, 90, 42, 58]);
    }

    #[test]
    fn every_interface_belongs_to_a_known_application() {
        let catalog = EmbeddedCatalog::default().load().unwrap();
        for iface in &catalog.interfaces {
            assert!(
                catalog.applications.iter().any(|app| app.name == iface.application),
                "{} references unknown application {}",
                iface.id,
                iface.application
            );
        }
    }

    #[test]
    fn malformed_document_is_a_config_error() {
        let err = EmbeddedCatalog::from_static("{\"applications\": [").load().unwrap_err();
        assert!(matches!(err, SlaWatchError::Config(_)));
    }
}
