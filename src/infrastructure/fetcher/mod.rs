//! Data fetchers over the entity repository

mod entity;
mod registry;

pub use entity::{EntitiesByIdsFetcher, EntityByIdFetcher, EntityListFetcher, IDS_ARGUMENT};
pub use registry::DataFetchers;
