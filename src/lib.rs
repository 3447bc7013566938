//! Groupie Tracker web front-end.
//!
//! Proxies the public Groupie Trackers API and renders server-side pages: a
//! filterable artist list and an artist detail view with concert locations.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server (router, request ID, tracing, metrics)
//!                          │
//!                          ▼
//!                     http::handlers ──────▶ upstream::client ──────▶ Groupie Trackers API
//!                          │                 (index → artists/relation)
//!                          ▼
//!                     catalog (filter, lookup)
//!                          │
//!                          ▼
//!     Client Response render (templates) ◀──
//!     ◀──────────────
//! ```
//!
//! Requests are independent: no state is shared between them beyond the
//! upstream connection pool and the template cache.

// Core subsystems
pub mod catalog;
pub mod http;
pub mod render;
pub mod upstream;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
