//! Station API
//!
//! Read-only lookups of transit lines and stations for GraphQL field
//! resolution:
//! - Immutable, process-wide entity collections (built-in or loaded from JSON)
//! - First-match lookup by identifier, with absence reported as `null`
//! - Data fetchers for the `line`, `lines` and `linesByIds` fields and their
//!   station counterparts

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use domain::DomainError;
use infrastructure::catalog::{Catalog, InMemoryEntityRepository};
use infrastructure::fetcher::DataFetchers;

/// Creates the entity repository from configuration
pub fn create_repository(config: &AppConfig) -> Result<InMemoryEntityRepository, DomainError> {
    let catalog = match &config.catalog.path {
        Some(path) => Arc::new(Catalog::from_file(path)?),
        None => {
            tracing::info!("Using built-in catalog");
            Catalog::builtin()
        }
    };

    Ok(InMemoryEntityRepository::new(catalog))
}

/// Creates the standard data fetchers from configuration
pub fn create_data_fetchers(config: &AppConfig) -> Result<DataFetchers, DomainError> {
    let repository = create_repository(config)?;
    Ok(DataFetchers::standard(Arc::new(repository)))
}
