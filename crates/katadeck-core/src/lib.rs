//! Katadeck Core Library
//!
//! Challenge deck browsing: manifest loading, slug routing, markdown
//! rendering and theme preference persistence.
//!
//! ## Overview
//!
//! A deck is a content root (local directory or HTTP base URL) holding a
//! `challenges.json` manifest, per-challenge markdown files, and a default
//! document. The library fetches the manifest once, builds ordered
//! navigation data from it, resolves name-derived slugs back to entries, and
//! renders challenge markdown to HTML. A small redb-backed store persists
//! the dark/light theme preference across sessions.
//!
//! ## Quick Start
//!
//! ```ignore
//! use katadeck_core::{ChallengeLibrary, ContentSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let library = ChallengeLibrary::open(ContentSource::dir("./content")).await?;
//!
//!     for challenge in library.entries() {
//!         println!("{} -> #{}", challenge.name, challenge.slug());
//!     }
//!
//!     let html = library.content_for_slug("two-sum").await?;
//!     println!("{html}");
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod library;
pub mod manifest;
pub mod prefs;
pub mod render;
pub mod source;
pub mod types;

// Re-exports
pub use error::{DeckError, DeckResult};
pub use library::{ChallengeLibrary, DEFAULT_DOCUMENT, MANIFEST_PATH};
pub use manifest::Manifest;
pub use prefs::{PreferenceStore, THEME_KEY};
pub use render::markdown_to_html;
pub use source::ContentSource;
pub use types::{
    name_for_slug, slug_for, ChallengeDescriptor, Theme, MSG_CONTENT_ERROR, MSG_MANIFEST_ERROR,
    MSG_NOT_FOUND,
};
