//! Color and style picker
//!
//! The fixed set of picker actions, grouped the way they are laid out
//! (styles, foreground, background), and the only state the picker keeps:
//! which action the pointer is over.

use crate::models::{AnsiColor, Rgb, StyleTag};

/// A row of picker buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerGroup {
    /// Reset, bold and underline
    Styles,
    /// Foreground colors 30-37
    Foreground,
    /// Background colors 40-47
    Background,
}

impl PickerGroup {
    pub const ALL: [PickerGroup; 3] = [
        PickerGroup::Styles,
        PickerGroup::Foreground,
        PickerGroup::Background,
    ];

    /// Row heading, if the row has one
    pub fn heading(self) -> Option<&'static str> {
        match self {
            PickerGroup::Styles => None,
            PickerGroup::Foreground => Some("FG"),
            PickerGroup::Background => Some("BG"),
        }
    }

    /// Actions in this row, in display order
    pub fn actions(self) -> Vec<PickerAction> {
        match self {
            PickerGroup::Styles => vec![
                PickerAction::new(StyleTag::Reset),
                PickerAction::new(StyleTag::Bold),
                PickerAction::new(StyleTag::Underline),
            ],
            PickerGroup::Foreground => AnsiColor::ALL
                .iter()
                .map(|&color| PickerAction::new(StyleTag::Foreground(color)))
                .collect(),
            PickerGroup::Background => AnsiColor::ALL
                .iter()
                .map(|&color| PickerAction::new(StyleTag::Background(color)))
                .collect(),
        }
    }
}

/// A single selectable picker button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerAction {
    pub tag: StyleTag,
}

impl PickerAction {
    pub fn new(tag: StyleTag) -> Self {
        Self { tag }
    }

    /// Button caption; color buttons are blank swatches
    pub fn caption(&self) -> &'static str {
        match self.tag {
            StyleTag::Reset => "Reset All",
            StyleTag::Bold => "Bold",
            StyleTag::Underline => "Line",
            _ => "",
        }
    }

    pub fn swatch(&self) -> Rgb {
        self.tag.swatch()
    }

    pub fn tooltip(&self) -> Option<&'static str> {
        self.tag.label()
    }
}

/// Every picker action across all groups
pub fn all_actions() -> Vec<PickerAction> {
    PickerGroup::ALL
        .iter()
        .flat_map(|group| group.actions())
        .collect()
}

/// Hover state of the picker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickerState {
    hovered: Option<StyleTag>,
}

impl PickerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered an action
    pub fn hover(&mut self, tag: StyleTag) {
        self.hovered = Some(tag);
    }

    /// Pointer left the picker
    pub fn unhover(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<StyleTag> {
        self.hovered
    }

    /// Label to surface for the hovered action
    ///
    /// Only color codes have one; hovering bold, underline or reset shows
    /// nothing.
    pub fn tooltip(&self) -> Option<&'static str> {
        self.hovered
            .filter(|tag| tag.is_color())
            .and_then(StyleTag::label)
    }
}
