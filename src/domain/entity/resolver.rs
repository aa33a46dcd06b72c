//! Lookup of a single entity by identifier

use super::EntityRecord;

/// Returns the first record whose `id` field equals `id` exactly.
///
/// Records are scanned in sequence order, so when several records share an
/// identifier the earliest one wins. Records without an `id` never match.
pub fn resolve_by_id<'a>(records: &'a [EntityRecord], id: &str) -> Option<&'a EntityRecord> {
    records.iter().find(|record| record.id() == Some(id))
}
