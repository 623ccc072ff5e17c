//! Markdown rendering.

use pulldown_cmark::{html, Options, Parser};

/// Convert markdown text to an HTML fragment.
///
/// Tables and strikethrough are enabled on top of CommonMark. The converter
/// is a pure function; malformed markdown degrades to literal text rather
/// than failing.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
