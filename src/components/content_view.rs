//! Content Region
//!
//! Fetches a markdown resource, renders it and fully replaces the region's
//! contents. Every failure is absorbed here and reported only as one of the
//! fixed messages; nothing propagates to callers.

use dioxus::prelude::*;
use katadeck_core::{DeckError, MSG_CONTENT_ERROR, MSG_MANIFEST_ERROR, MSG_NOT_FOUND};

use crate::context::{use_library, use_library_phase, LibraryPhase};

/// What the content region should display
#[derive(Clone, PartialEq)]
pub enum ContentRequest {
    /// The fixed default document
    Default,
    /// The challenge matching a slug
    Slug(String),
}

/// Content region component.
///
/// Re-fetches whenever the request changes or the library becomes ready. A
/// newer request does not cancel an in-flight fetch; the last response to
/// arrive wins the region. Loading is idempotent, so redundant invocations
/// for the same request are harmless.
#[component]
pub fn ContentView(request: ReadOnlySignal<ContentRequest>) -> Element {
    let library = use_library();
    let phase = use_library_phase();

    let mut html: Signal<Option<String>> = use_signal(|| None);
    let mut message: Signal<Option<&'static str>> = use_signal(|| None);

    use_effect(move || {
        let request = request();
        if phase() != LibraryPhase::Ready {
            return;
        }
        spawn(async move {
            let shared = library();
            let guard = shared.read().await;
            let Some(ref lib) = *guard else {
                return;
            };

            let result = match &request {
                ContentRequest::Default => lib.default_document().await,
                ContentRequest::Slug(slug) => lib.content_for_slug(slug).await,
            };

            match result {
                Ok(rendered) => {
                    message.set(None);
                    html.set(Some(rendered));
                }
                Err(DeckError::NotFound(slug)) => {
                    tracing::warn!(%slug, "no challenge matches slug");
                    message.set(Some(MSG_NOT_FOUND));
                }
                Err(e) => {
                    tracing::error!("Failed to load challenge content: {}", e);
                    message.set(Some(MSG_CONTENT_ERROR));
                }
            }
        });
    });

    rsx! {
        main { class: "content-area",
            if phase() == LibraryPhase::Failed {
                p { class: "content-message", "{MSG_MANIFEST_ERROR}" }
            } else if let Some(msg) = message() {
                p { class: "content-message", "{msg}" }
            } else if let Some(rendered) = html() {
                article {
                    class: "challenge-content",
                    dangerous_inner_html: "{rendered}",
                }
            } else {
                div { class: "loading-state",
                    p { class: "loading-message", "Loading..." }
                }
            }
        }
    }
}
