//! Records returned by the Groupie Trackers API.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The upstream resources this service reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Index,
    Artists,
    Relations,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Index => "index",
            Resource::Artists => "artists",
            Resource::Relations => "relations",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Index document served at the API root, listing sub-resource URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiIndex {
    pub artists: String,
    pub locations: String,
    pub dates: String,
    pub relation: String,
}

impl ApiIndex {
    /// Build the index from a base URL without asking the API for it.
    pub fn derived(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            artists: format!("{}/artists", base),
            locations: format!("{}/locations", base),
            dates: format!("{}/dates", base),
            relation: format!("{}/relation", base),
        }
    }
}

/// A performer or group.
///
/// The API also ships URLs for per-artist locations, dates and relations;
/// those are ignored, the relation index is fetched in one call instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub first_album: String,
    pub creation_date: i64,
}

impl Artist {
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

/// Concert locations of one artist, each with its ordered dates.
///
/// Locations iterate in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationRecord {
    pub id: i64,
    #[serde(default)]
    pub dates_locations: BTreeMap<String, Vec<String>>,
}

impl RelationRecord {
    /// True when no concert is known for the artist.
    pub fn is_empty(&self) -> bool {
        self.dates_locations.is_empty()
    }
}

/// Envelope of the `/relation` endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RelationIndex {
    pub index: Vec<RelationRecord>,
}
