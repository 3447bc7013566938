//! Page rendering subsystem.
//!
//! # Data Flow
//! ```text
//! handler data (filtered list + echoed query, or artist + relation)
//!     → pages.rs (typed page models)
//!     → templates.rs (load named template from disk, render to String)
//!     → handler writes the finished document
//! ```
//!
//! # Design Decisions
//! - Templates are located lazily and cached by the environment
//! - Rendering completes into a buffer before a response is produced, so a
//!   failed render is a 500 and never a truncated page
//! - `.html` templates are auto-escaped

pub mod pages;
pub mod templates;

pub use pages::{ArtistPage, ArtistsPage};
pub use templates::{PageRenderer, RenderError};
