//! Immutable, shareable entity collection

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{resolve_by_id, EntityRecord};

/// Ordered sequence of records, fixed once built
///
/// Cloning shares the underlying slice, so a collection can be handed to any
/// number of concurrent readers without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityCollection {
    records: Arc<[EntityRecord]>,
}

impl Default for EntityCollection {
    fn default() -> Self {
        Self::empty()
    }
}

impl EntityCollection {
    pub fn new(records: Vec<EntityRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn find_by_id(&self, id: &str) -> Option<&EntityRecord> {
        resolve_by_id(&self.records, id)
    }

    pub fn records(&self) -> &[EntityRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EntityRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Identifiers that appear on more than one record, in first-seen order
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();

        for id in self.records.iter().filter_map(EntityRecord::id) {
            if !seen.insert(id) && !duplicates.contains(&id) {
                duplicates.push(id);
            }
        }
        duplicates
    }

    /// Number of records that cannot be resolved because they lack an `id`
    pub fn missing_id_count(&self) -> usize {
        self.records.iter().filter(|r| r.id().is_none()).count()
    }
}

impl From<Vec<EntityRecord>> for EntityCollection {
    fn from(records: Vec<EntityRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<EntityRecord> for EntityCollection {
    fn from_iter<I: IntoIterator<Item = EntityRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EntityCollection {
    type Item = &'a EntityRecord;
    type IntoIter = std::slice::Iter<'a, EntityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for EntityCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EntityCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<EntityRecord>::deserialize(deserializer).map(Self::new)
    }
}
