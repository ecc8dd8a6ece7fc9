//! Style Tag Model
//!
//! The closed set of SGR codes the target chat client understands: reset,
//! bold, underline, and the eight standard foreground and background colors.
//! Each tag also carries the swatch color and hover label shown by the picker.

use crate::error::{Error, Result};
use std::fmt;

/// One of the eight standard ANSI colors, in SGR order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnsiColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl AnsiColor {
    /// All colors in SGR order
    pub const ALL: [AnsiColor; 8] = [
        AnsiColor::Black,
        AnsiColor::Red,
        AnsiColor::Green,
        AnsiColor::Yellow,
        AnsiColor::Blue,
        AnsiColor::Magenta,
        AnsiColor::Cyan,
        AnsiColor::White,
    ];

    /// Offset added to the 30/40 base code
    pub fn index(self) -> u8 {
        self as u8
    }

    fn from_index(index: u16) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }
}

/// 8-bit RGB color used for picker swatches and editor previews
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Format as lowercase `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Swatch for tags without a color of their own
pub const NEUTRAL_SWATCH: Rgb = Rgb::new(0x4f, 0x54, 0x5c);

const FOREGROUND_SWATCHES: [Rgb; 8] = [
    Rgb::new(0x4f, 0x54, 0x5c),
    Rgb::new(0xdc, 0x32, 0x2f),
    Rgb::new(0x85, 0x99, 0x00),
    Rgb::new(0xb5, 0x89, 0x00),
    Rgb::new(0x26, 0x8b, 0xd2),
    Rgb::new(0xd3, 0x36, 0x82),
    Rgb::new(0x2a, 0xa1, 0x98),
    Rgb::new(0xff, 0xff, 0xff),
];

const BACKGROUND_SWATCHES: [Rgb; 8] = [
    Rgb::new(0x00, 0x2b, 0x36),
    Rgb::new(0xcb, 0x4b, 0x16),
    Rgb::new(0x58, 0x6e, 0x75),
    Rgb::new(0x65, 0x7b, 0x83),
    Rgb::new(0x83, 0x94, 0x96),
    Rgb::new(0x6c, 0x71, 0xc4),
    Rgb::new(0x93, 0xa1, 0xa1),
    Rgb::new(0xfd, 0xf6, 0xe3),
];

const FOREGROUND_LABELS: [&str; 8] = [
    "Dark Gray (33%)",
    "Red",
    "Yellowish Green",
    "Gold",
    "Light Blue",
    "Pink",
    "Teal",
    "White",
];

const BACKGROUND_LABELS: [&str; 8] = [
    "Blueish Black",
    "Rust Brown",
    "Gray (40%)",
    "Gray (45%)",
    "Light Gray (55%)",
    "Blurple",
    "Light Gray (60%)",
    "Cream White",
];

/// A single SGR style the editor can apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    Reset,
    Bold,
    Underline,
    Foreground(AnsiColor),
    Background(AnsiColor),
}

impl StyleTag {
    /// Every tag, ordered by SGR code
    pub const ALL: [StyleTag; 19] = [
        StyleTag::Reset,
        StyleTag::Bold,
        StyleTag::Underline,
        StyleTag::Foreground(AnsiColor::Black),
        StyleTag::Foreground(AnsiColor::Red),
        StyleTag::Foreground(AnsiColor::Green),
        StyleTag::Foreground(AnsiColor::Yellow),
        StyleTag::Foreground(AnsiColor::Blue),
        StyleTag::Foreground(AnsiColor::Magenta),
        StyleTag::Foreground(AnsiColor::Cyan),
        StyleTag::Foreground(AnsiColor::White),
        StyleTag::Background(AnsiColor::Black),
        StyleTag::Background(AnsiColor::Red),
        StyleTag::Background(AnsiColor::Green),
        StyleTag::Background(AnsiColor::Yellow),
        StyleTag::Background(AnsiColor::Blue),
        StyleTag::Background(AnsiColor::Magenta),
        StyleTag::Background(AnsiColor::Cyan),
        StyleTag::Background(AnsiColor::White),
    ];

    /// Numeric SGR code
    pub fn code(self) -> u8 {
        match self {
            StyleTag::Reset => 0,
            StyleTag::Bold => 1,
            StyleTag::Underline => 4,
            StyleTag::Foreground(color) => 30 + color.index(),
            StyleTag::Background(color) => 40 + color.index(),
        }
    }

    /// Look up a tag by its SGR code
    pub fn from_code(code: u16) -> Result<Self> {
        let tag = match code {
            0 => Some(StyleTag::Reset),
            1 => Some(StyleTag::Bold),
            4 => Some(StyleTag::Underline),
            30..=37 => AnsiColor::from_index(code - 30).map(StyleTag::Foreground),
            40..=47 => AnsiColor::from_index(code - 40).map(StyleTag::Background),
            _ => None,
        };
        tag.ok_or(Error::UnknownStyleCode(code))
    }

    /// Whether this tag selects a color (codes above the style/reset range)
    pub fn is_color(self) -> bool {
        self.code() > 4
    }

    /// Display color of the picker button
    pub fn swatch(self) -> Rgb {
        match self {
            StyleTag::Foreground(color) => FOREGROUND_SWATCHES[usize::from(color.index())],
            StyleTag::Background(color) => BACKGROUND_SWATCHES[usize::from(color.index())],
            _ => NEUTRAL_SWATCH,
        }
    }

    /// Human-readable color name, only defined for color tags
    pub fn label(self) -> Option<&'static str> {
        match self {
            StyleTag::Foreground(color) => Some(FOREGROUND_LABELS[usize::from(color.index())]),
            StyleTag::Background(color) => Some(BACKGROUND_LABELS[usize::from(color.index())]),
            _ => None,
        }
    }

    /// CSS class used by span markup (`ansi-31`)
    pub fn class_name(self) -> String {
        format!("ansi-{}", self.code())
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleTag::Reset => write!(f, "reset"),
            StyleTag::Bold => write!(f, "bold"),
            StyleTag::Underline => write!(f, "underline"),
            StyleTag::Foreground(_) => write!(f, "fg {}", self.code()),
            StyleTag::Background(_) => write!(f, "bg {}", self.code()),
        }
    }
}
