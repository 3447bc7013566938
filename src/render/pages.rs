//! Data bound into page templates.

use serde::Serialize;

use crate::catalog::QueryParameters;
use crate::upstream::{Artist, RelationRecord};

/// Context of the artist list page.
#[derive(Debug, Serialize)]
pub struct ArtistsPage<'a> {
    pub artists: &'a [Artist],
    pub query: &'a str,
    pub year_min: i64,
    pub year_max: i64,
    pub members_min: i64,
}

impl<'a> ArtistsPage<'a> {
    /// Filtered artists plus the criteria that produced them.
    pub fn new(artists: &'a [Artist], query: &'a QueryParameters) -> Self {
        Self {
            artists,
            query: &query.text,
            year_min: query.year_min,
            year_max: query.year_max,
            members_min: query.members_min,
        }
    }
}

/// Context of the artist detail page.
#[derive(Debug, Serialize)]
pub struct ArtistPage<'a> {
    pub artist: &'a Artist,
    pub concerts: &'a RelationRecord,
}
