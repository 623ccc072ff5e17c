//! Navigation Header Component
//!
//! Horizontal navbar with the deck title, one link per challenge in
//! manifest order, and the theme toggle on the right.

use dioxus::prelude::*;
use katadeck_core::ChallengeDescriptor;

use crate::app::Route;
use crate::components::ThemeToggle;
use crate::context::{use_library, use_library_phase, use_theme, LibraryPhase};

/// Navigation header component
///
/// The challenge list stays empty until the manifest load succeeds; a
/// failed load leaves it empty for the whole session.
#[component]
pub fn NavHeader() -> Element {
    let library = use_library();
    let phase = use_library_phase();
    let theme = use_theme();

    let mut entries: Signal<Vec<ChallengeDescriptor>> = use_signal(Vec::new);

    // Pull navigation entries once the library is ready
    use_effect(move || {
        if phase() == LibraryPhase::Ready {
            spawn(async move {
                let shared = library();
                let guard = shared.read().await;
                if let Some(ref lib) = *guard {
                    entries.set(lib.entries().to_vec());
                }
            });
        }
    });

    let dark = theme().is_dark();

    rsx! {
        header { class: if dark { "navbar dark-mode" } else { "navbar" },
            div { class: "navbar-inner",
                h1 { class: "app-title", "Katadeck" }

                nav { class: "challenge-nav",
                    ul { class: "challenge-list",
                        for challenge in entries() {
                            li {
                                Link {
                                    to: Route::Challenge { slug: challenge.slug() },
                                    class: if dark { "nav-link dark-mode" } else { "nav-link" },
                                    "{challenge.name}"
                                }
                            }
                        }
                    }
                }

                ThemeToggle {}
            }
        }
    }
}
