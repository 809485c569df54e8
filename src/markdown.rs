//! Note Preview Rendering
//!
//! pulldown-cmark with raw HTML passed through, so injected task blocks
//! come out as live checkboxes.

use pulldown_cmark::{html::push_html, Options, Parser};

/// Render the note to HTML for the preview pane
pub fn render_document(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
}
