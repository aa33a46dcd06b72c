//! Catalog of entity collections, one per entity kind

use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::{DomainError, EntityCollection, EntityKind, EntityRecord};

/// Data shipped with the service, created on first use and shared afterwards
static BUILTIN: Lazy<Arc<Catalog>> = Lazy::new(|| {
    Arc::new(Catalog::new(
        EntityCollection::new(vec![EntityRecord::with_id("1")]),
        EntityCollection::new(vec![EntityRecord::with_id("1")]),
    ))
});

/// Immutable set of entity collections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    lines: EntityCollection,
    #[serde(default)]
    stations: EntityCollection,
}

impl Catalog {
    pub fn new(lines: EntityCollection, stations: EntityCollection) -> Self {
        Self { lines, stations }
    }

    /// Returns the process-wide built-in catalog
    pub fn builtin() -> Arc<Catalog> {
        Arc::clone(&BUILTIN)
    }

    /// Parses a catalog from its JSON representation
    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        let catalog: Catalog = serde_json::from_str(json)
            .map_err(|e| DomainError::catalog(format!("Invalid catalog JSON: {}", e)))?;

        catalog.report_anomalies();
        Ok(catalog)
    }

    /// Reads and parses a catalog file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            DomainError::catalog(format!("Failed to read '{}': {}", path.display(), e))
        })?;

        let catalog = Self::from_json_str(&json)?;

        info!(
            path = %path.display(),
            lines = catalog.lines.len(),
            stations = catalog.stations.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn collection(&self, kind: EntityKind) -> &EntityCollection {
        match kind {
            EntityKind::Line => &self.lines,
            EntityKind::Station => &self.stations,
        }
    }

    fn report_anomalies(&self) {
        for kind in EntityKind::ALL {
            let collection = self.collection(kind);

            let missing = collection.missing_id_count();
            if missing > 0 {
                warn!(%kind, count = missing, "Records without an id can never be resolved");
            }

            for id in collection.duplicate_ids() {
                warn!(%kind, id, "Duplicate id, lookups return the first record");
            }
        }
    }
}
