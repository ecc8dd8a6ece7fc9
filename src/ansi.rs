//! ANSI escape code encoding
//!
//! This module turns styled documents into the fenced-ANSI convention
//! understood by chat clients with partial ANSI support:
//!
//! ````text
//! ```ansi
//! Hello ESC[31mWorldESC[0m
//! ```
//! ````
//!
//! Every styled region is opened with `ESC[<codes>m` and closed with a full
//! reset `ESC[0m`. Nested spans are encoded one escape/reset pair per level
//! and are never merged, so an inner reset also ends the outer styles in a
//! standard terminal. The target client renders this exact byte sequence, so
//! it is kept as is.

use crate::models::{Document, Node, StyledRun};

/// Escape character that starts every SGR sequence
pub const ESC: char = '\x1b';

/// Sequence closing every styled region
pub const RESET_SEQUENCE: &str = "\x1b[0m";

/// Language tag of the output code fence
pub const DEFAULT_FENCE_LANGUAGE: &str = "ansi";

/// Placeholder the editor uses for spaces it must not collapse
pub const NBSP: char = '\u{a0}';

/// Build an SGR sequence for the given codes (`ESC[1;31m`)
pub fn sgr(codes: &[u8]) -> String {
    let joined = codes
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(";");
    format!("{ESC}[{joined}m")
}

/// Encoder from styled content to fenced ANSI text
#[derive(Debug, Clone)]
pub struct AnsiEncoder {
    fence_language: String,
}

impl AnsiEncoder {
    /// Create an encoder producing ```` ```ansi ```` fences
    pub fn new() -> Self {
        Self::with_fence_language(DEFAULT_FENCE_LANGUAGE)
    }

    /// Create an encoder with a custom fence language tag
    pub fn with_fence_language(language: impl Into<String>) -> Self {
        Self {
            fence_language: language.into(),
        }
    }

    pub fn fence_language(&self) -> &str {
        &self.fence_language
    }

    /// Encode a document tree, one escape/reset pair per span
    pub fn encode_document(&self, document: &Document) -> String {
        self.fence(&encode_nodes(document.nodes()))
    }

    /// Encode flat styled runs, one combined escape per styled run
    pub fn encode_runs(&self, runs: &[StyledRun]) -> String {
        self.fence(&encode_runs_body(runs))
    }

    /// Wrap an already encoded body in the code fence
    pub fn fence(&self, body: &str) -> String {
        format!("```{}\n{}\n```", self.fence_language, body)
    }
}

impl Default for AnsiEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a node list without the surrounding fence
pub fn encode_nodes(nodes: &[Node]) -> String {
    let mut out = String::new();
    push_nodes(&mut out, nodes);
    out
}

fn push_nodes(out: &mut String, nodes: &[Node]) {
    for node in nodes {
        match node {
            Node::Text(text) => push_text(out, text),
            Node::LineBreak => out.push('\n'),
            Node::Span(span) => {
                out.push_str(&sgr(&[span.tag.code()]));
                push_nodes(out, &span.children);
                out.push_str(RESET_SEQUENCE);
            }
        }
    }
}

/// Encode runs without the surrounding fence
pub fn encode_runs_body(runs: &[StyledRun]) -> String {
    let mut out = String::new();
    for run in runs {
        if run.style.is_plain() {
            push_text(&mut out, &run.text);
        } else {
            out.push_str(&sgr(&run.style.codes()));
            push_text(&mut out, &run.text);
            out.push_str(RESET_SEQUENCE);
        }
    }
    out
}

fn push_text(out: &mut String, text: &str) {
    out.extend(text.chars().map(|c| if c == NBSP { ' ' } else { c }));
}
