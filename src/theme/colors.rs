//! Color constants for the Katadeck palette.
//!
//! Paper-and-ink reading aesthetic; the dark palette mirrors each light
//! value one-for-one.

#![allow(dead_code)]

// === LIGHT (default) ===
pub const PAPER: &str = "#fafaf7";
pub const PAPER_RAISED: &str = "#ffffff";
pub const PAPER_BORDER: &str = "#e4e2dc";
pub const INK: &str = "#1f2328";
pub const INK_SECONDARY: &str = "rgba(31, 35, 40, 0.7)";
pub const INK_MUTED: &str = "rgba(31, 35, 40, 0.5)";

// === DARK ===
pub const NIGHT: &str = "#14161a";
pub const NIGHT_RAISED: &str = "#1c1f24";
pub const NIGHT_BORDER: &str = "#2a2e34";
pub const CHALK: &str = "#e8e6e3";
pub const CHALK_SECONDARY: &str = "rgba(232, 230, 227, 0.7)";
pub const CHALK_MUTED: &str = "rgba(232, 230, 227, 0.5)";

// === ACCENT ===
pub const ACCENT: &str = "#2f6fde";
pub const ACCENT_DARK: &str = "#7aa5f0";
pub const CODE_BG: &str = "#f0efe9";
pub const CODE_BG_DARK: &str = "#23262c";
