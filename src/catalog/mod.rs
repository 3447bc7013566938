//! Catalog operations over fetched artist data.
//!
//! # Data Flow
//! ```text
//! request query pairs
//!     → query.rs (QueryParameters, lenient numeric parsing)
//! Vec<Artist> + QueryParameters
//!     → filter.rs (ordered subsequence)
//! Vec<Artist> / Vec<RelationRecord> + id
//!     → lookup.rs (first match by identifier)
//! ```
//!
//! # Design Decisions
//! - Pure functions over borrowed slices: inputs are never mutated
//! - A numeric bound of 0 means "unset"

pub mod filter;
pub mod lookup;
pub mod query;

pub use filter::filter;
pub use lookup::{find_artist, find_relation};
pub use query::QueryParameters;
