//! Rendering of AI replies into safe HTML.
//!
//! Model output arrives either as markdown or as plain text with embedded
//! newlines; both paths end in the same sanitizer before the result is
//! injected into the DOM.

use std::collections::{HashMap, HashSet};

#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);
    options.insert(pulldown_cmark::Options::ENABLE_TASKLISTS);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "code", "pre", "blockquote", "ul",
        "ol", "li", "a", "table", "thead", "tbody", "tr", "th", "td", "del", "h1", "h2", "h3",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

#[must_use]
pub fn looks_like_markdown(input: &str) -> bool {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return false;
    }

    if trimmed.contains("```") || trimmed.contains("**") || trimmed.contains("](") {
        return true;
    }

    for line in trimmed.lines() {
        let line = line.trim_start();
        if line.starts_with("# ")
            || line.starts_with("## ")
            || line.starts_with("- ")
            || line.starts_with("* ")
            || line.starts_with("> ")
        {
            return true;
        }
    }

    false
}

/// Render an AI reply for `dangerous_inner_html`: markdown when it looks
/// like markdown, otherwise escaped text with newlines preserved.
#[must_use]
pub fn render_ai_text(input: &str) -> String {
    if looks_like_markdown(input) {
        return markdown_to_html(input);
    }

    let escaped = escape_text(input);
    let body = escaped.trim().replace('\n', "<br>");
    sanitize_html(&format!("<p>{body}</p>"))
}

fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_renders_lists() {
        let html = markdown_to_html("- one\n- two");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn sanitizer_strips_scripts() {
        let html = sanitize_html("<p>ok</p><script>alert(1)</script>");
        assert!(html.contains("<p>ok</p>"));
        assert!(!html.contains("script"));
    }

    #[test]
    fn plain_text_keeps_line_breaks() {
        let html = render_ai_text("同义词：\n1. instance - 实例");
        assert!(html.contains("<br>"));
        assert!(html.contains("instance"));
    }

    #[test]
    fn plain_text_is_escaped() {
        let html = render_ai_text("a < b > c");
        assert!(html.contains("&lt;"));
        assert!(!html.contains("<b "));
    }

    #[test]
    fn canned_reply_is_not_mistaken_for_markdown() {
        assert!(!looks_like_markdown("1. pain - 痛苦\n2. painful - 痛苦的"));
        assert!(looks_like_markdown("**加粗**"));
    }
}
