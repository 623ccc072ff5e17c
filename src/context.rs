//! Library and theme context for Katadeck.
//!
//! Provides the loaded challenge library, the load phase and the active
//! theme to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let library = use_library();
//! let theme = use_theme();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use katadeck_core::{ChallengeLibrary, PreferenceStore, Theme};
use tokio::sync::RwLock;

/// Shared library type for context.
///
/// `None` while loading or after a failed load; once set, the library is
/// never mutated again. Routing and rendering read it through this handle
/// instead of sharing a free-floating challenge list.
pub type SharedLibrary = Arc<RwLock<Option<ChallengeLibrary>>>;

/// Where the one-time manifest load currently stands
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LibraryPhase {
    Loading,
    Ready,
    Failed,
}

/// Hook to access the challenge library from context.
pub fn use_library() -> Signal<SharedLibrary> {
    use_context::<Signal<SharedLibrary>>()
}

/// Hook to observe the manifest load phase.
///
/// Returns a reactive signal that updates when the load completes or fails.
pub fn use_library_phase() -> Signal<LibraryPhase> {
    use_context::<Signal<LibraryPhase>>()
}

/// Hook to access the active theme.
///
/// Every dark/light marker in the UI derives from this one value.
pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

/// Hook to access the preference store (`None` if it failed to open).
pub fn use_preferences() -> Signal<Option<PreferenceStore>> {
    use_context::<Signal<Option<PreferenceStore>>>()
}
