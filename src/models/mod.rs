//! Core data models for chromatext
//!
//! This module contains the data structures the editor works with:
//! the style tags, the styled-span document tree, and the flat
//! styled runs derived from it.

pub mod document;
pub mod style_tag;
pub mod styled_run;

// Re-exports for convenience
pub use document::{Document, Node, Span};
pub use style_tag::{AnsiColor, Rgb, StyleTag};
pub use styled_run::{StyleSet, StyledRun};
