//! Error types and Result aliases for chromatext

use std::path::PathBuf;

/// Result type alias for chromatext operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for chromatext
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // === Style application errors ===
    /// Selection covers no characters
    #[error("Selection is empty")]
    EmptySelection,

    /// Selection extends past the end of the document
    #[error("Selection {start}..{end} is outside the document (length {len})")]
    SelectionOutOfBounds { start: usize, end: usize, len: usize },

    /// Selection boundary falls inside a span the other boundary is outside of
    #[error("Selection partially covers a styled span at offset {offset}")]
    PartialSpan { offset: usize },

    /// Numeric code is not one of the supported SGR codes
    #[error("Unknown style code: {0}")]
    UnknownStyleCode(u16),

    // === Markup errors ===
    /// Markup could not be parsed
    #[error("Invalid markup at byte {position}: {reason}")]
    Markup { position: usize, reason: String },

    // === Clipboard errors ===
    /// Platform clipboard rejected the write
    #[error("Clipboard write failed: {reason}")]
    Clipboard { reason: String },

    // === Configuration errors ===
    /// Failed to load configuration file
    #[error("Failed to load config from '{}': {reason}", path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Configuration file not found
    #[error("Configuration file not found")]
    ConfigNotFound,

    /// Configuration validation failed
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    /// Failed to serialize configuration
    #[error("Failed to serialize config as {format}: {reason}")]
    ConfigSerializationFailed { format: String, reason: String },

    /// Failed to parse configuration
    #[error("Failed to parse {format} config: {reason}")]
    ConfigParseFailed { format: String, reason: String },

    // === I/O errors ===
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error came from applying a style to the document.
    ///
    /// These are expected during normal editing and never fatal.
    pub fn is_style_application(&self) -> bool {
        matches!(
            self,
            Error::EmptySelection | Error::SelectionOutOfBounds { .. } | Error::PartialSpan { .. }
        )
    }
}
