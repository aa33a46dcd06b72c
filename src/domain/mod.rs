//! Domain layer - Entities, lookup and field resolution contracts

pub mod entity;
pub mod error;
pub mod fetcher;

pub use entity::{
    resolve_by_id, EntityCollection, EntityKind, EntityRecord, EntityRepository, ID_FIELD,
};
pub use error::DomainError;
pub use fetcher::{
    DataFetcher, FetchEnvironment, FieldArguments, FieldResponse, FieldValue, ResponseError,
};
