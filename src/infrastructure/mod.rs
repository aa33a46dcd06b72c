//! Infrastructure layer - Catalog storage, data fetchers and logging

pub mod catalog;
pub mod fetcher;
pub mod logging;
