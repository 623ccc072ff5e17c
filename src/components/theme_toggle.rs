//! Theme Toggle Component
//!
//! Sun/moon button that flips the active theme and persists the choice.

use dioxus::prelude::*;
use katadeck_core::Theme;

use crate::context::{use_preferences, use_theme};

/// Theme toggle button.
///
/// Exactly one of the sun/moon icons is present at a time (sun while light,
/// moon while dark) and the tooltip names the action the next activation
/// performs. Each activation writes the new theme name to the preference
/// store; a failed write is logged and the visual toggle still applies.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let prefs = use_preferences();

    let on_toggle = move |_| {
        let next = theme().toggled();
        theme.set(next);
        if let Some(ref store) = *prefs.peek() {
            if let Err(e) = store.set_theme(next) {
                tracing::warn!("Failed to persist theme preference: {}", e);
            }
        }
    };

    let current = theme();

    rsx! {
        button {
            r#type: "button",
            class: if current.is_dark() { "mode-toggle dark-mode" } else { "mode-toggle" },
            title: "{current.toggle_tooltip()}",
            "aria-label": "{current.toggle_tooltip()}",
            onclick: on_toggle,
            {render_theme_icon(current)}
        }
    }
}

/// Render the Lucide icon matching the active theme
fn render_theme_icon(theme: Theme) -> Element {
    match theme {
        Theme::Light => rsx! {
            // Lucide sun icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle { cx: "12", cy: "12", r: "4" }
                path { d: "M12 2v2" }
                path { d: "M12 20v2" }
                path { d: "m4.93 4.93 1.41 1.41" }
                path { d: "m17.66 17.66 1.41 1.41" }
                path { d: "M2 12h2" }
                path { d: "M20 12h2" }
                path { d: "m6.34 17.66-1.41 1.41" }
                path { d: "m19.07 4.93-1.41 1.41" }
            }
        },
        Theme::Dark => rsx! {
            // Lucide moon icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
            }
        },
    }
}
