//! Core types for Katadeck

use serde::{Deserialize, Serialize};

/// Message shown in the content region when the manifest cannot be fetched.
pub const MSG_MANIFEST_ERROR: &str = "Error fetching challenges. Please try again later.";

/// Message shown in the content region when a challenge file cannot be loaded.
pub const MSG_CONTENT_ERROR: &str = "Error loading challenge content. Please try again later.";

/// Message shown in the content region when a slug resolves to no challenge.
pub const MSG_NOT_FOUND: &str = "Challenge not found.";

/// Visual theme for the deck UI
///
/// The active theme is a single explicit value; every UI marker (body class,
/// navbar class, toggle icon, tooltip) is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Name persisted in the preference store ("light" or "dark")
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored theme name.
    ///
    /// Returns `None` for anything but the two literal names, which callers
    /// treat the same as "no preference recorded".
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The opposite theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Icon shown on the toggle control: sun while light, moon while dark.
    /// Exactly one of the two is ever present.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "sun",
            Theme::Dark => "moon",
        }
    }

    /// Tooltip naming the action a toggle activation would perform next
    pub fn toggle_tooltip(self) -> &'static str {
        match self {
            Theme::Light => "Switch to Dark Mode",
            Theme::Dark => "Switch to Light Mode",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single challenge as described by the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeDescriptor {
    /// Human-readable name, shown in navigation and matched by the resolver
    pub name: String,
    /// Path to the markdown content, relative to the content root
    pub file: String,
}

impl ChallengeDescriptor {
    pub fn new(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
        }
    }

    /// Link slug derived from the name
    pub fn slug(&self) -> String {
        slug_for(&self.name)
    }
}

/// Derive a link slug from a challenge name: lowercase the name and collapse
/// every whitespace run into a single hyphen. No trimming is applied, so
/// leading/trailing whitespace yields a leading/trailing hyphen.
pub fn slug_for(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for ch in name.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.push(ch);
            in_whitespace = false;
        }
    }
    slug
}

/// Reverse the slug transform: every hyphen becomes a space, approximating
/// the original display name for a case-insensitive manifest lookup.
pub fn name_for_slug(slug: &str) -> String {
    slug.replace('-', " ")
}
