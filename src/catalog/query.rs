//! Filter criteria parsed from a request.

use serde::Serialize;

/// Criteria for the artist list.
///
/// `text` is stored trimmed and lower-cased. Numeric bounds use 0 for
/// "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryParameters {
    pub text: String,
    pub year_min: i64,
    pub year_max: i64,
    pub members_min: i64,
}

impl QueryParameters {
    /// Build criteria from raw values. Anything that is not an integer becomes 0.
    pub fn new(text: &str, year_min: &str, year_max: &str, members_min: &str) -> Self {
        Self {
            text: text.trim().to_lowercase(),
            year_min: parse_bound(year_min),
            year_max: parse_bound(year_max),
            members_min: parse_bound(members_min),
        }
    }

    /// Build criteria from decoded query-string pairs.
    ///
    /// The first occurrence of a key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .unwrap_or("")
        };
        Self::new(get("q"), get("year_min"), get("year_max"), get("members_min"))
    }

    /// True when no criterion is set.
    pub fn is_unconstrained(&self) -> bool {
        self.text.is_empty() && self.year_min == 0 && self.year_max == 0 && self.members_min == 0
    }
}

fn parse_bound(raw: &str) -> i64 {
    raw.parse().unwrap_or(0)
}
