//! Span markup
//!
//! A tiny HTML subset used to describe styled documents as text: the
//! welcome message, the `initial_markup` config key, and input to the
//! headless `encode` command.
//!
//! Supported constructs:
//!
//! - `<span class="ansi-N">...</span>` where `N` is a supported SGR code
//! - `<br>` (also `<br/>`) and literal newlines as line breaks
//! - `&nbsp;`, `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&#39;`

use crate::error::{Error, Result};
use crate::models::{Document, Node, StyleTag};
use once_cell::sync::Lazy;
use regex::Regex;

/// Message shown in a fresh editor
pub const WELCOME_MARKUP: &str = concat!(
    r#"Welcome to <span class="ansi-33">Rebane</span>'s "#,
    r#"<span class="ansi-45"><span class="ansi-37">Discord</span></span> "#,
    r#"<span class="ansi-31">C</span><span class="ansi-32">o</span>"#,
    r#"<span class="ansi-33">l</span><span class="ansi-34">o</span>"#,
    r#"<span class="ansi-35">r</span><span class="ansi-36">e</span>"#,
    r#"<span class="ansi-37">d</span> Text Generator!"#,
);

static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<span class="ansi-(\d+)">|</span>|<br\s*/?>|&(nbsp|amp|lt|gt|quot|#39);|\n|[<&]"#)
        .expect("markup token pattern is valid")
});

struct OpenSpan {
    tag: StyleTag,
    position: usize,
    parent: Vec<Node>,
}

/// Parse markup into a document
pub fn parse(markup: &str) -> Result<Document> {
    let mut stack: Vec<OpenSpan> = Vec::new();
    let mut current: Vec<Node> = Vec::new();
    let mut text = String::new();
    let mut last_end = 0;

    for caps in TOKEN_REGEX.captures_iter(markup) {
        let Some(token) = caps.get(0) else { continue };
        text.push_str(&markup[last_end..token.start()]);
        last_end = token.end();

        if let Some(entity) = caps.get(2) {
            text.push(match entity.as_str() {
                "nbsp" => '\u{a0}',
                "amp" => '&',
                "lt" => '<',
                "gt" => '>',
                "quot" => '"',
                _ => '\'',
            });
            continue;
        }

        flush_text(&mut current, &mut text);
        let token_str = token.as_str();

        if let Some(code) = caps.get(1) {
            let tag = code
                .as_str()
                .parse::<u16>()
                .map_err(|e| markup_error(code.start(), e.to_string()))
                .and_then(|code_value| {
                    StyleTag::from_code(code_value)
                        .map_err(|e| markup_error(code.start(), e.to_string()))
                })?;
            stack.push(OpenSpan {
                tag,
                position: token.start(),
                parent: std::mem::take(&mut current),
            });
        } else if token_str == "</span>" {
            let open = stack
                .pop()
                .ok_or_else(|| markup_error(token.start(), "closing tag without open span"))?;
            let children = std::mem::replace(&mut current, open.parent);
            current.push(Node::span(open.tag, children));
        } else if token_str == "\n" || token_str.starts_with("<br") {
            current.push(Node::LineBreak);
        } else {
            return Err(markup_error(
                token.start(),
                format!("unsupported markup starting with '{token_str}'"),
            ));
        }
    }

    text.push_str(&markup[last_end..]);
    flush_text(&mut current, &mut text);

    if let Some(open) = stack.pop() {
        return Err(markup_error(open.position, "span is never closed"));
    }

    Ok(Document::from_nodes(current))
}

/// Render a document back into markup
pub fn render(document: &Document) -> String {
    let mut out = String::new();
    render_nodes(&mut out, document.nodes());
    out
}

fn render_nodes(out: &mut String, nodes: &[Node]) {
    for node in nodes {
        match node {
            Node::Text(text) => {
                for c in text.chars() {
                    match c {
                        '&' => out.push_str("&amp;"),
                        '<' => out.push_str("&lt;"),
                        '>' => out.push_str("&gt;"),
                        '\u{a0}' => out.push_str("&nbsp;"),
                        other => out.push(other),
                    }
                }
            }
            Node::LineBreak => out.push_str("<br>"),
            Node::Span(span) => {
                out.push_str(&format!(r#"<span class="{}">"#, span.tag.class_name()));
                render_nodes(out, &span.children);
                out.push_str("</span>");
            }
        }
    }
}

/// The default welcome document
pub fn welcome_document() -> Document {
    parse(WELCOME_MARKUP).unwrap_or_default()
}

fn flush_text(nodes: &mut Vec<Node>, text: &mut String) {
    if !text.is_empty() {
        nodes.push(Node::Text(std::mem::take(text)));
    }
}

fn markup_error(position: usize, reason: impl Into<String>) -> Error {
    Error::Markup {
        position,
        reason: reason.into(),
    }
}
