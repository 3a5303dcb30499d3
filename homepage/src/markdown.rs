//! Markdown to HTML conversion for content blocks.

use leptos::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Convert CommonMark text (links, emphasis, fenced code) into HTML.
///
/// Input is trusted site content; raw HTML passes through.
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH);
    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Block of rendered markdown.
#[component]
pub fn MarkdownBlock(#[prop(into)] text: String) -> impl IntoView {
    view! { <div class="markdown" inner_html=render_markdown(&text)></div> }
}
