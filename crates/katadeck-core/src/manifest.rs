//! Challenge manifest model.
//!
//! The manifest is an ordered list of challenge descriptors, parsed once per
//! session from `challenges.json` and immutable afterwards. Slug resolution
//! is a linear scan in manifest order; names are expected but not guaranteed
//! unique, and the first match wins.

use crate::error::DeckResult;
use crate::types::{name_for_slug, ChallengeDescriptor};

/// Ordered collection of challenge descriptors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ChallengeDescriptor>,
}

impl Manifest {
    pub fn new(entries: Vec<ChallengeDescriptor>) -> Self {
        Self { entries }
    }

    /// Parse a manifest body: a JSON array of `{name, file}` objects.
    ///
    /// No validation beyond the structural parse is performed.
    pub fn from_json(body: &str) -> DeckResult<Self> {
        let entries: Vec<ChallengeDescriptor> = serde_json::from_str(body)?;
        Ok(Self { entries })
    }

    /// Descriptors in manifest order
    pub fn entries(&self) -> &[ChallengeDescriptor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a slug back to a descriptor.
    ///
    /// Hyphens become spaces, then the first descriptor whose name matches
    /// case-insensitively wins. Returns `None` when nothing matches.
    pub fn resolve(&self, slug: &str) -> Option<&ChallengeDescriptor> {
        let wanted = name_for_slug(slug).to_lowercase();
        self.entries
            .iter()
            .find(|challenge| challenge.name.to_lowercase() == wanted)
    }
}
