//! Document Model
//!
//! The editable message as an explicit tree of styled spans. Each span
//! carries exactly one [`StyleTag`]; spans nest freely and are never merged,
//! so the tree preserves exactly how styles were applied.
//!
//! Positions are character offsets into the plain text, where a line break
//! counts as a single `'\n'` character.
//!
//! Every `Document` is kept normalized: no empty text nodes, no empty spans,
//! and no two adjacent text nodes in the same container.

use super::style_tag::StyleTag;
use super::styled_run::{coalesce_runs, StyleSet, StyledRun};
use crate::error::{Error, Result};
use std::ops::Range;

/// A single node of the document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Plain text, never containing `'\n'`
    Text(String),
    /// Hard line break
    LineBreak,
    /// Styled span wrapping further nodes
    Span(Span),
}

/// A styled span: one tag applied to its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub tag: StyleTag,
    pub children: Vec<Node>,
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn span(tag: StyleTag, children: Vec<Node>) -> Self {
        Node::Span(Span { tag, children })
    }

    /// Length of the node's plain text in characters
    pub fn char_len(&self) -> usize {
        match self {
            Node::Text(text) => text.chars().count(),
            Node::LineBreak => 1,
            Node::Span(span) => nodes_char_len(&span.children),
        }
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::LineBreak => out.push('\n'),
            Node::Span(span) => span.children.iter().for_each(|n| n.push_plain_text(out)),
        }
    }
}

/// Total character length of a node list
pub fn nodes_char_len(nodes: &[Node]) -> usize {
    nodes.iter().map(Node::char_len).sum()
}

/// Split a string at a character offset
pub fn split_at_char(text: &str, at: usize) -> (&str, &str) {
    let byte = text
        .char_indices()
        .nth(at)
        .map_or(text.len(), |(index, _)| index);
    text.split_at(byte)
}

/// Convert plain text into text and line break nodes
pub fn text_to_nodes(text: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            nodes.push(Node::LineBreak);
        }
        if !line.is_empty() {
            nodes.push(Node::text(line));
        }
    }
    nodes
}

/// Normalize a node list in place
///
/// Drops empty text and empty spans, merges adjacent text nodes, and splits
/// any embedded `'\n'` into line breaks.
pub fn normalize_nodes(nodes: Vec<Node>) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Node::Text(text) if text.contains('\n') => {
                for piece in text_to_nodes(&text) {
                    push_normalized(&mut out, piece);
                }
            }
            Node::Span(Span { tag, children }) => {
                let children = normalize_nodes(children);
                if !children.is_empty() {
                    out.push(Node::Span(Span { tag, children }));
                }
            }
            other => push_normalized(&mut out, other),
        }
    }
    out
}

fn push_normalized(out: &mut Vec<Node>, node: Node) {
    match node {
        Node::Text(text) if text.is_empty() => {}
        Node::Text(text) => match out.last_mut() {
            Some(Node::Text(last)) => last.push_str(&text),
            _ => out.push(Node::Text(text)),
        },
        other => out.push(other),
    }
}

/// The editable styled document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from nodes, normalizing them
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self {
            nodes: normalize_nodes(nodes),
        }
    }

    /// Unstyled document holding `text`
    pub fn plain(text: &str) -> Self {
        Self {
            nodes: text_to_nodes(text),
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Length of the plain text in characters
    pub fn char_len(&self) -> usize {
        nodes_char_len(&self.nodes)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether any span is present
    pub fn is_styled(&self) -> bool {
        self.nodes.iter().any(|node| matches!(node, Node::Span(_)))
    }

    /// Plain text with line breaks as `'\n'`
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.nodes.iter().for_each(|node| node.push_plain_text(&mut out));
        out
    }

    /// Flatten the tree into styled runs
    ///
    /// Nested tags accumulate from the outside in, with the innermost color
    /// of each kind winning. Adjacent runs with equal styles are merged, so
    /// the concatenated run text always equals [`Document::plain_text`].
    pub fn runs(&self) -> Vec<StyledRun> {
        let mut runs = Vec::new();
        collect_runs(&self.nodes, StyleSet::plain(), &mut runs);
        coalesce_runs(runs)
    }

    /// Same text with every span removed
    pub fn flattened(&self) -> Self {
        Self::plain(&self.plain_text())
    }

    /// Replace a character range with `text`
    ///
    /// Inserted text joins the leaf holding the character just before
    /// `range.start`, so typing at the end of a span extends that span.
    /// Spans whose text is entirely removed disappear. On error the document
    /// is left untouched.
    pub fn splice(&mut self, range: Range<usize>, text: &str) -> Result<()> {
        let len = self.char_len();
        if range.start > range.end || range.end > len {
            return Err(Error::SelectionOutOfBounds {
                start: range.start,
                end: range.end,
                len,
            });
        }

        let mut nodes = std::mem::take(&mut self.nodes);
        let inserted = text_to_nodes(text);
        let shift = nodes_char_len(&inserted);
        if !inserted.is_empty() {
            insert_nodes_at(&mut nodes, range.start, inserted);
        }
        if range.start < range.end {
            delete_range(&mut nodes, range.start + shift, range.end + shift);
        }
        self.nodes = normalize_nodes(nodes);
        Ok(())
    }
}

fn collect_runs(nodes: &[Node], style: StyleSet, runs: &mut Vec<StyledRun>) {
    for node in nodes {
        match node {
            Node::Text(text) => runs.push(StyledRun::new(text.clone(), style)),
            Node::LineBreak => runs.push(StyledRun::new("\n", style)),
            Node::Span(span) => collect_runs(&span.children, style.with(span.tag), runs),
        }
    }
}

/// Insert nodes right after character `pos - 1`
fn insert_nodes_at(nodes: &mut Vec<Node>, pos: usize, new_nodes: Vec<Node>) {
    if pos == 0 {
        nodes.splice(0..0, new_nodes);
        return;
    }

    let mut offset = 0;
    for i in 0..nodes.len() {
        let len = nodes[i].char_len();
        if offset < pos && pos <= offset + len {
            match &mut nodes[i] {
                Node::Text(text) => {
                    let (before, after) = split_at_char(text, pos - offset);
                    let mut replacement = Vec::with_capacity(new_nodes.len() + 2);
                    replacement.push(Node::text(before));
                    replacement.extend(new_nodes);
                    replacement.push(Node::text(after));
                    nodes.splice(i..=i, replacement);
                }
                Node::LineBreak => {
                    nodes.splice(i + 1..i + 1, new_nodes);
                }
                Node::Span(span) => insert_nodes_at(&mut span.children, pos - offset, new_nodes),
            }
            return;
        }
        offset += len;
    }
    nodes.extend(new_nodes);
}

/// Remove characters in `start..end` from a node list
fn delete_range(nodes: &mut Vec<Node>, start: usize, end: usize) {
    let mut offset = 0;
    let mut kept = Vec::with_capacity(nodes.len());
    for node in std::mem::take(nodes) {
        let len = node.char_len();
        let (node_start, node_end) = (offset, offset + len);
        offset = node_end;

        if node_end <= start || node_start >= end {
            kept.push(node);
            continue;
        }

        match node {
            Node::Text(text) => {
                let from = start.saturating_sub(node_start);
                let to = end.min(node_end) - node_start;
                let (head, rest) = split_at_char(&text, from);
                let (_, tail) = split_at_char(rest, to - from);
                kept.push(Node::text(format!("{head}{tail}")));
            }
            Node::LineBreak => {}
            Node::Span(mut span) => {
                delete_range(
                    &mut span.children,
                    start.saturating_sub(node_start),
                    end.min(node_end) - node_start,
                );
                kept.push(Node::Span(span));
            }
        }
    }
    *nodes = kept;
}
