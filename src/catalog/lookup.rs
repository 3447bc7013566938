//! Identifier lookups for the detail page.

use crate::upstream::{Artist, RelationRecord};

/// First artist with the given identifier.
pub fn find_artist(artists: &[Artist], id: i64) -> Option<&Artist> {
    artists.iter().find(|artist| artist.id == id)
}

/// Relation record for an artist.
///
/// An artist without a record gets an empty one carrying its identifier:
/// no known concerts is a valid state, not an error.
pub fn find_relation(records: &[RelationRecord], artist_id: i64) -> RelationRecord {
    match records.iter().find(|record| record.id == artist_id) {
        Some(record) => record.clone(),
        None => {
            tracing::debug!(artist_id, "No relation record for artist");
            RelationRecord {
                id: artist_id,
                ..RelationRecord::default()
            }
        }
    }
}
