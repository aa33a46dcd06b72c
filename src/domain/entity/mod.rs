//! Entity domain - Records, collections and lookup by identifier

mod collection;
mod record;
mod repository;
mod resolver;

pub use collection::EntityCollection;
pub use record::{EntityKind, EntityRecord, ID_FIELD};
pub use repository::EntityRepository;
pub use resolver::resolve_by_id;

#[cfg(test)]
pub use repository::MockEntityRepository;
