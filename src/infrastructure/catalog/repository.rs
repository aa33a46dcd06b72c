//! In-memory entity repository backed by a catalog

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::Catalog;
use crate::domain::{DomainError, EntityKind, EntityRecord, EntityRepository};

/// Repository over an immutable catalog
///
/// Reads take no locks; every clone shares the same catalog.
#[derive(Debug, Clone)]
pub struct InMemoryEntityRepository {
    catalog: Arc<Catalog>,
}

impl Default for InMemoryEntityRepository {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl InMemoryEntityRepository {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl EntityRepository for InMemoryEntityRepository {
    async fn find_by_id(
        &self,
        kind: EntityKind,
        id: &str,
    ) -> Result<Option<EntityRecord>, DomainError> {
        let found = self.catalog.collection(kind).find_by_id(id).cloned();

        debug!(%kind, id, found = found.is_some(), "Resolved entity by id");
        Ok(found)
    }

    async fn find_by_ids(
        &self,
        kind: EntityKind,
        ids: &[String],
    ) -> Result<Vec<EntityRecord>, DomainError> {
        let collection = self.catalog.collection(kind);
        let found: Vec<_> = ids
            .iter()
            .filter_map(|id| collection.find_by_id(id).cloned())
            .collect();

        debug!(%kind, requested = ids.len(), found = found.len(), "Resolved entities by ids");
        Ok(found)
    }

    async fn list(&self, kind: EntityKind) -> Result<Vec<EntityRecord>, DomainError> {
        Ok(self.catalog.collection(kind).records().to_vec())
    }

    async fn count(&self, kind: EntityKind) -> Result<usize, DomainError> {
        Ok(self.catalog.collection(kind).len())
    }
}
