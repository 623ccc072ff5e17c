//! Home page - the deck overview.
//!
//! Shown for the empty route. Loads the fixed default document directly;
//! the slug resolver is not consulted here.

use dioxus::prelude::*;

use crate::components::{ContentRequest, ContentView, NavHeader};
use crate::context::use_theme;

#[component]
pub fn Home() -> Element {
    let theme = use_theme();

    rsx! {
        div { class: if theme().is_dark() { "app-body dark-mode" } else { "app-body" },
            NavHeader {}
            ContentView { request: ContentRequest::Default }
        }
    }
}
