use std::sync::Arc;

use dioxus::prelude::*;
use katadeck_core::{ChallengeLibrary, PreferenceStore, Theme};
use tokio::sync::RwLock;

use crate::context::{LibraryPhase, SharedLibrary};
use crate::pages::{Challenge, Home};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Default document (deck overview)
/// - `/:slug` - A challenge, addressed by the slug of its name
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:slug")]
    Challenge { slug: String },
}

/// Root application component.
///
/// Provides global styles, theme state, the challenge library and routing.
#[component]
pub fn App() -> Element {
    // Preference store; theme persistence is best-effort
    let prefs: Signal<Option<PreferenceStore>> = use_signal(|| {
        let path = crate::get_data_dir().join("prefs.redb");
        match PreferenceStore::open(&path) {
            Ok(store) => Some(store),
            Err(e) => {
                tracing::warn!("Failed to open preference store: {}", e);
                None
            }
        }
    });

    // Restore the persisted theme; absence or a read failure means light
    let theme: Signal<Theme> = use_signal(move || {
        prefs
            .peek()
            .as_ref()
            .and_then(|store| store.theme().unwrap_or(None))
            .unwrap_or_default()
    });

    // Library state: loaded once on mount, immutable afterwards
    let library: Signal<SharedLibrary> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut phase: Signal<LibraryPhase> = use_signal(|| LibraryPhase::Loading);

    use_context_provider(|| library);
    use_context_provider(|| phase);
    use_context_provider(|| theme);
    use_context_provider(|| prefs);

    // Fetch the manifest on mount
    use_effect(move || {
        spawn(async move {
            match ChallengeLibrary::open(crate::content_source()).await {
                Ok(lib) => {
                    let shared = library();
                    let mut guard = shared.write().await;
                    *guard = Some(lib);
                    drop(guard);
                    phase.set(LibraryPhase::Ready);
                }
                Err(e) => {
                    tracing::error!("Failed to load challenge manifest: {}", e);
                    phase.set(LibraryPhase::Failed);
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
