//! Data fetcher trait and its inputs/outputs

use async_trait::async_trait;
use serde::Serialize;

use super::FieldArguments;
use crate::domain::entity::EntityRecord;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Everything a fetcher receives for one field invocation
#[derive(Debug, Clone, PartialEq)]
pub struct FetchEnvironment {
    field_name: String,
    arguments: FieldArguments,
}

impl FetchEnvironment {
    pub fn new(field_name: impl Into<String>, arguments: FieldArguments) -> Self {
        Self {
            field_name: field_name.into(),
            arguments,
        }
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn arguments(&self) -> &FieldArguments {
        &self.arguments
    }
}

/// Value produced for a field
///
/// `Null` is the absence signal; it is a successful result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Record(EntityRecord),
    List(Vec<EntityRecord>),
    Null,
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_record(&self) -> Option<&EntityRecord> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl From<Option<EntityRecord>> for FieldValue {
    fn from(record: Option<EntityRecord>) -> Self {
        record.map_or(Self::Null, Self::Record)
    }
}

impl From<Vec<EntityRecord>> for FieldValue {
    fn from(records: Vec<EntityRecord>) -> Self {
        Self::List(records)
    }
}

/// Produces the value of a single field for the query engine
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DataFetcher: Send + Sync {
    async fn fetch(&self, env: &FetchEnvironment) -> Result<FieldValue, DomainError>;
}
