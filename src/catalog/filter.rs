//! Artist list filtering.

use crate::catalog::query::QueryParameters;
use crate::upstream::Artist;

/// Select the artists matching `query`, keeping their original order.
///
/// Text matches the name or any member name, case-insensitively. Numeric
/// bounds are inclusive and ignored when 0.
pub fn filter(artists: &[Artist], query: &QueryParameters) -> Vec<Artist> {
    artists
        .iter()
        .filter(|artist| matches(artist, query))
        .cloned()
        .collect()
}

fn matches(artist: &Artist, query: &QueryParameters) -> bool {
    matches_text(artist, &query.text)
        && (query.year_min == 0 || artist.creation_date >= query.year_min)
        && (query.year_max == 0 || artist.creation_date <= query.year_max)
        && (query.members_min == 0 || member_count(artist) >= query.members_min)
}

fn matches_text(artist: &Artist, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    // Query text may come from a caller that did not normalize it.
    let needle = text.to_lowercase();
    artist.name.to_lowercase().contains(&needle)
        || artist
            .members
            .iter()
            .any(|member| member.to_lowercase().contains(&needle))
}

fn member_count(artist: &Artist) -> i64 {
    i64::try_from(artist.member_count()).unwrap_or(i64::MAX)
}
