//! Fetcher domain - Field arguments, data fetchers and field responses

mod arguments;
mod fetcher;
mod response;

pub use arguments::FieldArguments;
pub use fetcher::{DataFetcher, FetchEnvironment, FieldValue};
pub use response::{FieldResponse, ResponseError};

#[cfg(test)]
pub use fetcher::MockDataFetcher;
