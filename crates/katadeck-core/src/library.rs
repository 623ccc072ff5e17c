//! Challenge library: a content source plus its loaded manifest.

use crate::error::{DeckError, DeckResult};
use crate::manifest::Manifest;
use crate::render::markdown_to_html;
use crate::source::ContentSource;
use crate::types::ChallengeDescriptor;

/// Relative path of the manifest within a content root
pub const MANIFEST_PATH: &str = "challenges.json";

/// Relative path of the document shown when no challenge is selected
pub const DEFAULT_DOCUMENT: &str = "challenges/challenges.md";

/// The loaded challenge deck.
///
/// Owns the content source and the manifest. The manifest is fetched exactly
/// once in [`ChallengeLibrary::open`] and never mutated afterwards; routing
/// and rendering take the library by reference instead of sharing a
/// free-floating list.
#[derive(Debug, Clone)]
pub struct ChallengeLibrary {
    source: ContentSource,
    manifest: Manifest,
}

impl ChallengeLibrary {
    /// Fetch and parse the manifest, producing a ready-to-use library.
    ///
    /// Fails on any fetch or parse error; there is no retry and a failed
    /// open leaves no partial state behind.
    pub async fn open(source: ContentSource) -> DeckResult<Self> {
        let body = source.fetch_text(MANIFEST_PATH).await?;
        let manifest = Manifest::from_json(&body)?;
        tracing::info!(challenges = manifest.len(), "loaded challenge manifest");
        Ok(Self { source, manifest })
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Descriptors in manifest order
    pub fn entries(&self) -> &[ChallengeDescriptor] {
        self.manifest.entries()
    }

    /// First descriptor whose name matches the slug, if any
    pub fn resolve(&self, slug: &str) -> Option<&ChallengeDescriptor> {
        self.manifest.resolve(slug)
    }

    /// Fetch a content file without rendering.
    pub async fn raw(&self, file: &str) -> DeckResult<String> {
        self.source.fetch_text(file).await
    }

    /// Fetch a content file and render it to HTML.
    ///
    /// Repeat calls with the same file produce the same output; loading is
    /// a full replacement, never cumulative.
    pub async fn content(&self, file: &str) -> DeckResult<String> {
        let text = self.raw(file).await?;
        Ok(markdown_to_html(&text))
    }

    /// Resolve a slug and render the matching challenge.
    pub async fn content_for_slug(&self, slug: &str) -> DeckResult<String> {
        let file = match self.resolve(slug) {
            Some(challenge) => challenge.file.clone(),
            None => return Err(DeckError::NotFound(slug.to_string())),
        };
        self.content(&file).await
    }

    /// Render the fixed default document.
    pub async fn default_document(&self) -> DeckResult<String> {
        self.content(DEFAULT_DOCUMENT).await
    }
}
