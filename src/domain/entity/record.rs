//! Entity record and entity kind

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Name of the field every resolvable record carries
pub const ID_FIELD: &str = "id";

/// A single entity (line, station) as a mapping of named string fields
///
/// Fields keep the order in which they were first inserted or read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityRecord {
    fields: IndexMap<String, String>,
}

impl EntityRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record holding only an `id` field
    pub fn with_id(id: impl Into<String>) -> Self {
        Self::new().with_field(ID_FIELD, id)
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Returns the record's identifier, if it has one
    pub fn id(&self) -> Option<&str> {
        self.get(ID_FIELD)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EntityRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Kind of entity held by a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Line,
    Station,
}

impl EntityKind {
    pub const ALL: [EntityKind; 2] = [EntityKind::Line, EntityKind::Station];

    /// Field name used to fetch a single entity by id
    pub fn singular(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Station => "station",
        }
    }

    /// Field name used to fetch several entities by a list of ids
    pub fn by_ids(&self) -> &'static str {
        match self {
            Self::Line => "linesByIds",
            Self::Station => "stationsByIds",
        }
    }

    /// Field name used to fetch the whole collection
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Line => "lines",
            Self::Station => "stations",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.singular())
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "line" | "lines" => Ok(Self::Line),
            "station" | "stations" => Ok(Self::Station),
            other => Err(DomainError::invalid_argument(
                "kind",
                format!("unknown entity kind '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_with_id() {
        let record = EntityRecord::with_id("1");
        assert_eq!(record.id(), Some("1"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_record_without_id() {
        let record = EntityRecord::new().with_field("name", "Yamanote");
        assert_eq!(record.id(), None);
        assert_eq!(record.get("name"), Some("Yamanote"));
    }

    #[test]
    fn test_record_serializes_as_flat_map() {
        let record = EntityRecord::with_id("11302").with_field("name", "Yamanote");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"id": "11302", "name": "Yamanote"}));
    }

    #[test]
    fn test_record_keeps_field_order() {
        let record: EntityRecord = serde_json::from_str(r#"{"name":"Y","id":"1"}"#).unwrap();
        assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"name":"Y","id":"1"}"#);

        let built = EntityRecord::new().with_field("name", "Y").with_field("id", "1");
        let names: Vec<_> = built.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["name", "id"]);
    }

    #[test]
    fn test_record_rejects_non_string_values() {
        let result: Result<EntityRecord, _> = serde_json::from_str(r#"{"id": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_from_iter() {
        let record: EntityRecord = [("id", "1"), ("name", "Tokyo")].into_iter().collect();
        assert_eq!(record.id(), Some("1"));
        assert_eq!(record.get("name"), Some("Tokyo"));
    }

    #[test]
    fn test_entity_kind_from_str() {
        assert_eq!("line".parse::<EntityKind>().unwrap(), EntityKind::Line);
        assert_eq!("Lines".parse::<EntityKind>().unwrap(), EntityKind::Line);
        assert_eq!("STATIONS".parse::<EntityKind>().unwrap(), EntityKind::Station);
        assert!("company".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_entity_kind_field_names() {
        assert_eq!(EntityKind::Line.singular(), "line");
        assert_eq!(EntityKind::Station.plural(), "stations");
        assert_eq!(EntityKind::Line.by_ids(), "linesByIds");
        assert_eq!(EntityKind::Station.to_string(), "station");
    }
}
