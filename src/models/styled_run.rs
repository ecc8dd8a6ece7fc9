//! Styled Run Model
//!
//! A flat view of a document: contiguous text segments, each sharing one
//! combination of active styles. Runs are derived on demand and never stored.

use super::style_tag::{AnsiColor, StyleTag};

/// Combination of styles active over a run of text
///
/// Holds at most one foreground and one background color; applying a second
/// color of the same kind replaces the first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StyleSet {
    pub bold: bool,
    pub underline: bool,
    pub foreground: Option<AnsiColor>,
    pub background: Option<AnsiColor>,
}

impl StyleSet {
    /// Style set with nothing active
    pub fn plain() -> Self {
        Self::default()
    }

    /// Return a copy with `tag` layered on top
    pub fn with(mut self, tag: StyleTag) -> Self {
        match tag {
            StyleTag::Reset => self = Self::default(),
            StyleTag::Bold => self.bold = true,
            StyleTag::Underline => self.underline = true,
            StyleTag::Foreground(color) => self.foreground = Some(color),
            StyleTag::Background(color) => self.background = Some(color),
        }
        self
    }

    /// Build a set from tags applied outermost first
    pub fn from_tags<I: IntoIterator<Item = StyleTag>>(tags: I) -> Self {
        tags.into_iter().fold(Self::default(), Self::with)
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// Active tags in emission order: bold, underline, foreground, background
    pub fn tags(&self) -> Vec<StyleTag> {
        let mut tags = Vec::with_capacity(4);
        if self.bold {
            tags.push(StyleTag::Bold);
        }
        if self.underline {
            tags.push(StyleTag::Underline);
        }
        if let Some(color) = self.foreground {
            tags.push(StyleTag::Foreground(color));
        }
        if let Some(color) = self.background {
            tags.push(StyleTag::Background(color));
        }
        tags
    }

    /// SGR codes of the active tags, in emission order
    pub fn codes(&self) -> Vec<u8> {
        self.tags().into_iter().map(StyleTag::code).collect()
    }
}

/// A contiguous span of text sharing one style combination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub style: StyleSet,
}

impl StyledRun {
    pub fn new(text: impl Into<String>, style: StyleSet) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Unstyled run
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, StyleSet::plain())
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Merge adjacent runs that share the same style, dropping empty runs
pub fn coalesce_runs(runs: Vec<StyledRun>) -> Vec<StyledRun> {
    let mut merged: Vec<StyledRun> = Vec::with_capacity(runs.len());
    for run in runs.into_iter().filter(|run| !run.text.is_empty()) {
        match merged.last_mut() {
            Some(last) if last.style == run.style => last.text.push_str(&run.text),
            _ => merged.push(run),
        }
    }
    merged
}
