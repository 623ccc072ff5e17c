//! Challenge page - `/:slug` routes.
//!
//! Deep links, reloads and back/forward navigation all land here; the slug
//! is resolved against the manifest by the content region, which shows the
//! fixed not-found message for unknown slugs.

use dioxus::prelude::*;

use crate::components::{ContentRequest, ContentView, NavHeader};
use crate::context::use_theme;

#[component]
pub fn Challenge(slug: String) -> Element {
    let theme = use_theme();

    rsx! {
        div { class: if theme().is_dark() { "app-body dark-mode" } else { "app-body" },
            NavHeader {}
            ContentView { request: ContentRequest::Slug(slug) }
        }
    }
}
