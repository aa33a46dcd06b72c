//! Entity fetchers - single entity by id, entities by ids and whole collections

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    DataFetcher, DomainError, EntityKind, EntityRepository, FetchEnvironment, FieldValue, ID_FIELD,
};

/// Argument naming the identifiers of a batch lookup
pub const IDS_ARGUMENT: &str = "ids";

/// Resolves `<kind>(id: ID)` to the first matching entity or `null`
///
/// A missing or `null` id matches nothing, so the field is `null` as well.
#[derive(Clone)]
pub struct EntityByIdFetcher {
    kind: EntityKind,
    repository: Arc<dyn EntityRepository>,
}

impl EntityByIdFetcher {
    pub fn new(kind: EntityKind, repository: Arc<dyn EntityRepository>) -> Self {
        Self { kind, repository }
    }
}

#[async_trait]
impl DataFetcher for EntityByIdFetcher {
    async fn fetch(&self, env: &FetchEnvironment) -> Result<FieldValue, DomainError> {
        let Some(id) = env.arguments().id(ID_FIELD)? else {
            return Ok(FieldValue::Null);
        };
        let record = self.repository.find_by_id(self.kind, &id).await?;

        Ok(FieldValue::from(record))
    }
}

/// Resolves `<kinds>ByIds(ids: [ID])` to the first match of each id, in request order
#[derive(Clone)]
pub struct EntitiesByIdsFetcher {
    kind: EntityKind,
    repository: Arc<dyn EntityRepository>,
}

impl EntitiesByIdsFetcher {
    pub fn new(kind: EntityKind, repository: Arc<dyn EntityRepository>) -> Self {
        Self { kind, repository }
    }
}

#[async_trait]
impl DataFetcher for EntitiesByIdsFetcher {
    async fn fetch(&self, env: &FetchEnvironment) -> Result<FieldValue, DomainError> {
        let ids = env.arguments().id_list(IDS_ARGUMENT)?;
        if ids.is_empty() {
            return Ok(FieldValue::List(Vec::new()));
        }

        let records = self.repository.find_by_ids(self.kind, &ids).await?;
        Ok(FieldValue::from(records))
    }
}

/// Resolves `<kinds>` to every entity of the kind, in collection order
#[derive(Clone)]
pub struct EntityListFetcher {
    kind: EntityKind,
    repository: Arc<dyn EntityRepository>,
}

impl EntityListFetcher {
    pub fn new(kind: EntityKind, repository: Arc<dyn EntityRepository>) -> Self {
        Self { kind, repository }
    }
}

#[async_trait]
impl DataFetcher for EntityListFetcher {
    async fn fetch(&self, _env: &FetchEnvironment) -> Result<FieldValue, DomainError> {
        let records = self.repository.list(self.kind).await?;
        Ok(FieldValue::from(records))
    }
}
