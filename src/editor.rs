//! Style application
//!
//! Applying a style wraps exactly the selected characters in a new span,
//! the same way a browser's "surround contents" does: existing spans are
//! never split or re-flowed, text nodes are split at the selection edges,
//! and a selection that cuts through a span boundary is rejected.
//!
//! [`apply_style`] is a pure function over the document tree. [`Editor`]
//! owns the current document and guarantees that a failed operation leaves
//! it untouched.

use crate::error::{Error, Result};
use crate::models::document::{split_at_char, Node, Span};
use crate::models::{Document, StyleTag};
use std::ops::Range;
use tracing::{debug, warn};

/// A text selection as character offsets
///
/// The anchor is where the selection started and the cursor where it ends;
/// the cursor may sit before the anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub cursor: usize,
}

impl Selection {
    pub fn new(anchor: usize, cursor: usize) -> Self {
        Self { anchor, cursor }
    }

    /// Collapsed selection (a caret)
    pub fn caret(at: usize) -> Self {
        Self::new(at, at)
    }

    /// Normalized half-open range
    pub fn range(&self) -> Range<usize> {
        self.anchor.min(self.cursor)..self.anchor.max(self.cursor)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.cursor
    }
}

impl From<Range<usize>> for Selection {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Apply `tag` to the selected range, producing a new document
///
/// `StyleTag::Reset` ignores the selection and strips all styling.
///
/// # Errors
///
/// - [`Error::EmptySelection`] if the selection covers no characters
/// - [`Error::SelectionOutOfBounds`] if it extends past the document
/// - [`Error::PartialSpan`] if one edge falls inside a span the other edge
///   is outside of
pub fn apply_style(document: &Document, selection: Selection, tag: StyleTag) -> Result<Document> {
    if tag == StyleTag::Reset {
        return Ok(document.flattened());
    }

    let range = selection.range();
    if range.is_empty() {
        return Err(Error::EmptySelection);
    }
    let len = document.char_len();
    if range.end > len {
        return Err(Error::SelectionOutOfBounds {
            start: range.start,
            end: range.end,
            len,
        });
    }

    let nodes = surround(document.nodes(), range.start, range.end, tag, 0)?;
    Ok(Document::from_nodes(nodes))
}

/// Wrap `start..end` (relative to `nodes`) in a new span
fn surround(
    nodes: &[Node],
    start: usize,
    end: usize,
    tag: StyleTag,
    base: usize,
) -> Result<Vec<Node>> {
    // Descend when the range sits inside one child span. An exact cover
    // descends too, so the new span lands around the innermost children.
    let mut offset = 0;
    for (index, node) in nodes.iter().enumerate() {
        let len = node.char_len();
        if let Node::Span(span) = node {
            let (node_start, node_end) = (offset, offset + len);
            if node_start <= start && end <= node_end {
                let children = surround(
                    &span.children,
                    start - node_start,
                    end - node_start,
                    tag,
                    base + node_start,
                )?;
                let mut rebuilt = nodes.to_vec();
                rebuilt[index] = Node::Span(Span {
                    tag: span.tag,
                    children,
                });
                return Ok(rebuilt);
            }
        }
        offset += len;
    }

    let mut before = Vec::new();
    let mut inside = Vec::new();
    let mut after = Vec::new();

    let mut offset = 0;
    for node in nodes {
        let len = node.char_len();
        let (node_start, node_end) = (offset, offset + len);
        offset = node_end;

        if node_end <= start {
            before.push(node.clone());
        } else if node_start >= end {
            after.push(node.clone());
        } else if start <= node_start && node_end <= end {
            inside.push(node.clone());
        } else {
            match node {
                Node::Text(text) => {
                    let (head, rest) = split_at_char(text, start.saturating_sub(node_start));
                    let (middle, tail) = split_at_char(rest, end.min(node_end) - node_start.max(start));
                    before.push(Node::text(head));
                    inside.push(Node::text(middle));
                    after.push(Node::text(tail));
                }
                _ => {
                    let cut = if node_start < start { start } else { end };
                    return Err(Error::PartialSpan { offset: base + cut });
                }
            }
        }
    }

    before.push(Node::span(tag, inside));
    before.extend(after);
    Ok(before)
}

/// Owner of the document being edited
#[derive(Debug, Clone, Default)]
pub struct Editor {
    document: Document,
}

impl Editor {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Apply a style to the current document
    ///
    /// On failure the document is unchanged and the error is returned.
    pub fn apply(&mut self, selection: Selection, tag: StyleTag) -> Result<()> {
        match apply_style(&self.document, selection, tag) {
            Ok(document) => {
                debug!("Applied {} to {:?}", tag, selection.range());
                self.document = document;
                Ok(())
            }
            Err(e) => {
                warn!("Could not apply {} to {:?}: {}", tag, selection.range(), e);
                Err(e)
            }
        }
    }

    /// Strip all styling
    pub fn reset(&mut self) {
        self.document = self.document.flattened();
        debug!("Reset all styling");
    }

    /// Replace a character range with typed text
    pub fn splice(&mut self, range: Range<usize>, text: &str) -> Result<()> {
        self.document.splice(range, text)
    }

    /// Bring the document in line with an edited plain-text buffer
    ///
    /// Finds the single changed region between the current plain text and
    /// `edited` and splices it, so styling outside that region survives.
    /// Returns whether anything changed.
    pub fn sync_text(&mut self, edited: &str) -> Result<bool> {
        self.sync_text_at(edited, None)
    }

    /// Like [`Editor::sync_text`], with the caret position after the edit
    ///
    /// The changed region is taken to end at `caret`, which settles which
    /// copy of a repeated character was typed: typing `W` before `World`
    /// inserts before the word rather than after its first letter.
    pub fn sync_text_at(&mut self, edited: &str, caret: Option<usize>) -> Result<bool> {
        let current: Vec<char> = self.document.plain_text().chars().collect();
        let edited_chars: Vec<char> = edited.chars().collect();
        if current == edited_chars {
            return Ok(false);
        }

        let (prefix, suffix) = changed_region(&current, &edited_chars, caret);
        let inserted: String = edited_chars[prefix..edited_chars.len() - suffix]
            .iter()
            .collect();
        self.splice(prefix..current.len() - suffix, &inserted)?;
        Ok(true)
    }
}

/// Lengths of the common prefix and suffix around the changed region
fn changed_region(current: &[char], edited: &[char], caret: Option<usize>) -> (usize, usize) {
    let shortest = current.len().min(edited.len());
    let common_prefix = |limit: usize| {
        current
            .iter()
            .zip(edited)
            .take(limit)
            .take_while(|(a, b)| a == b)
            .count()
    };
    let common_suffix = |limit: usize| {
        current
            .iter()
            .rev()
            .zip(edited.iter().rev())
            .take(limit)
            .take_while(|(a, b)| a == b)
            .count()
    };

    match caret {
        Some(caret) => {
            let suffix = common_suffix(shortest.min(edited.len() - caret.min(edited.len())));
            (common_prefix(shortest - suffix), suffix)
        }
        None => {
            let prefix = common_prefix(shortest);
            (prefix, common_suffix(shortest - prefix))
        }
    }
}
