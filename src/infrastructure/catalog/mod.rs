//! Catalog infrastructure - Built-in and file-backed entity data

mod catalog;
mod repository;

pub use catalog::Catalog;
pub use repository::InMemoryEntityRepository;
