//! Upstream API subsystem.
//!
//! # Data Flow
//! ```text
//! base URL
//!     → client.rs (GET index, discover sub-resource URLs)
//!     → client.rs (GET artists / relation, read body, decode JSON)
//!     → types.rs (Artist, RelationRecord, ApiIndex)
//!     → handed to catalog (filter, lookup) and render
//! ```
//!
//! # Design Decisions
//! - Every call is terminal on failure: no retries, no partial results
//! - Failures are split by stage (fetch, read, decode) and name the resource
//! - Records are plain data, owned by the request that fetched them

pub mod client;
pub mod types;

pub use client::{UpstreamClient, UpstreamError, UpstreamResult};
pub use types::{ApiIndex, Artist, RelationIndex, RelationRecord, Resource};
