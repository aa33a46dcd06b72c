//! Entity repository trait

use async_trait::async_trait;

use super::{EntityKind, EntityRecord};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Read-only access to the entity collections
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EntityRepository: Send + Sync {
    /// Finds the first entity of `kind` whose id equals `id`
    async fn find_by_id(
        &self,
        kind: EntityKind,
        id: &str,
    ) -> Result<Option<EntityRecord>, DomainError>;

    /// Finds the first entity of `kind` for each id, in request order.
    ///
    /// Ids without a match are skipped; a repeated id yields its entity again.
    async fn find_by_ids(
        &self,
        kind: EntityKind,
        ids: &[String],
    ) -> Result<Vec<EntityRecord>, DomainError> {
        let mut found = Vec::with_capacity(ids.len());

        for id in ids {
            if let Some(record) = self.find_by_id(kind, id).await? {
                found.push(record);
            }
        }
        Ok(found)
    }

    /// Lists every entity of `kind` in collection order
    async fn list(&self, kind: EntityKind) -> Result<Vec<EntityRecord>, DomainError>;

    /// Returns the number of entities of `kind`
    async fn count(&self, kind: EntityKind) -> Result<usize, DomainError> {
        Ok(self.list(kind).await?.len())
    }
}
