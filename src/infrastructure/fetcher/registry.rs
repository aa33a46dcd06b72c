//! Field name to data fetcher registry

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use super::{EntitiesByIdsFetcher, EntityByIdFetcher, EntityListFetcher};
use crate::domain::{
    DataFetcher, DomainError, EntityKind, EntityRepository, FetchEnvironment, FieldArguments,
    FieldResponse, FieldValue,
};

/// Data fetchers keyed by the field they resolve
#[derive(Clone, Default)]
pub struct DataFetchers {
    fetchers: HashMap<String, Arc<dyn DataFetcher>>,
}

impl std::fmt::Debug for DataFetchers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataFetchers")
            .field("fields", &self.field_names())
            .finish()
    }
}

impl DataFetchers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `line`, `lines`, `linesByIds` and their station counterparts over `repository`
    pub fn standard(repository: Arc<dyn EntityRepository>) -> Self {
        EntityKind::ALL
            .into_iter()
            .fold(Self::new(), |fetchers, kind| {
                fetchers
                    .with_fetcher(
                        kind.singular(),
                        EntityByIdFetcher::new(kind, Arc::clone(&repository)),
                    )
                    .with_fetcher(
                        kind.by_ids(),
                        EntitiesByIdsFetcher::new(kind, Arc::clone(&repository)),
                    )
                    .with_fetcher(
                        kind.plural(),
                        EntityListFetcher::new(kind, Arc::clone(&repository)),
                    )
            })
    }

    pub fn with_fetcher(
        mut self,
        field_name: impl Into<String>,
        fetcher: impl DataFetcher + 'static,
    ) -> Self {
        self.register(field_name, Arc::new(fetcher));
        self
    }

    /// Registers a fetcher, replacing any previous one for the field
    pub fn register(&mut self, field_name: impl Into<String>, fetcher: Arc<dyn DataFetcher>) {
        self.fetchers.insert(field_name.into(), fetcher);
    }

    pub fn get(&self, field_name: &str) -> Option<&Arc<dyn DataFetcher>> {
        self.fetchers.get(field_name)
    }

    /// Registered field names, sorted
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.fetchers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Runs the fetcher registered for `field_name`
    pub async fn fetch(
        &self,
        field_name: &str,
        arguments: FieldArguments,
    ) -> Result<FieldValue, DomainError> {
        let fetcher = self
            .get(field_name)
            .ok_or_else(|| DomainError::unknown_field(field_name))?;

        fetcher
            .fetch(&FetchEnvironment::new(field_name, arguments))
            .await
    }

    /// Runs a field and shapes the outcome as a response
    pub async fn execute(&self, field_name: &str, arguments: FieldArguments) -> FieldResponse {
        let result = self.fetch(field_name, arguments).await;

        match &result {
            Ok(value) => debug!(field = field_name, null = value.is_null(), "Field resolved"),
            Err(e) if e.is_argument_error() => {
                debug!(field = field_name, error = %e, "Field rejected its arguments")
            }
            Err(e) => warn!(field = field_name, error = %e, "Field resolution failed"),
        }

        FieldResponse::from_result(field_name, result)
    }
}
