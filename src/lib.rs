//! chromatext - colored Discord text generator
//!
//! This library provides the core of chromatext: a small rich-text document
//! model whose styled spans are encoded as ANSI escape sequences inside an
//! ` ```ansi ` code block, ready to paste into a Discord message.
//!
//! ## Features
//!
//! - **Style spans:** Bold, underline and 8+8 ANSI foreground/background colors
//! - **Surround selection:** Wrap a selected range in a style span
//! - **ANSI encoding:** Nested spans become nested `ESC[..m` / `ESC[0m` pairs
//! - **Markup:** `<span class="ansi-N">` documents for the initial text
//! - **Copy status:** Transient "Copied!" / "Failed to copy!" feedback
//! - **Configuration:** TOML or JSON configuration files
//!
//! ## Module Organization
//!
//! ### Core Functionality
//!
//! - [`models`] - Style tags, documents and styled runs
//! - [`ansi`] - Fenced ANSI encoder
//! - [`editor`] - Selections and style application
//! - [`markup`] - Span markup parsing and rendering
//! - [`mod@error`] - Error types and Result aliases
//!
//! ### Application State
//!
//! - [`picker`] - Picker actions and hover state
//! - [`state`] - Copy status and its revert deadline
//! - [`clipboard`] - Clipboard sinks and the copy flow
//! - [`config`] - Configuration loading and validation
//!
//! ### UI Components
//!
//! - [`ui`] - egui widgets (editor, picker rows, copy button)
//! - [`app`] - The eframe application
//!
//! ## Quick Start
//!
//! ```no_run
//! use chromatext::{markup, AnsiEncoder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let document = markup::parse(r#"Hello <span class="ansi-31">World</span>"#)?;
//! let encoded = AnsiEncoder::new().encode_document(&document);
//! assert_eq!(encoded, "```ansi\nHello \x1b[31mWorld\x1b[0m\n```");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! Everything runs on the egui UI thread. The document is an owned tree that
//! style application replaces wholesale; the copy status is a reducer with a
//! single revert deadline that the frame loop ticks.

pub mod ansi;
pub mod app;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod error;
pub mod markup;
pub mod models;
pub mod picker;
pub mod state;

// UI modules
pub mod ui;

// Re-exports for core functionality
pub use ansi::AnsiEncoder;
pub use app::ChromaTextApp;
pub use config::Config;
pub use editor::{apply_style, Editor, Selection};
pub use error::{Error, Result};
pub use models::{AnsiColor, Document, Node, StyleSet, StyleTag, StyledRun};
pub use state::{CopyEvent, CopyStatus, CopyStatusStore};

// Convenience re-exports for common types
pub use clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard};
pub use config::loader::ConfigLoader;

use tracing::{info, warn};

// Version information
/// The current version of chromatext from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Load configuration from the default locations
///
/// Falls back to [`Config::default`] when no usable file exists, so this
/// only fails if the defaults themselves are invalid.
///
/// # Examples
///
/// ```no_run
/// let config = chromatext::init().expect("defaults are valid");
/// println!("Fence language: {}", config.copy.fence_language);
/// ```
pub fn init() -> Result<Config> {
    info!("🚀 Initializing {} v{}", NAME, VERSION);

    let config = match ConfigLoader::load() {
        Ok(config) => {
            info!("✅ Configuration loaded");
            config
        }
        Err(e) => {
            warn!("Failed to load configuration: {}. Using defaults", e);
            let config = Config::default();
            config.validate()?;
            config
        }
    };

    Ok(config)
}

/// Load configuration from an explicit file
///
/// Unlike [`init`], a missing or invalid file is an error.
pub fn init_with_config(config_path: &std::path::Path) -> Result<Config> {
    info!(
        "🚀 Initializing {} v{} with config: {}",
        NAME,
        VERSION,
        config_path.display()
    );

    let config = ConfigLoader::load_from_path(config_path)?;
    info!(
        "✅ Custom configuration loaded from: {}",
        config_path.display()
    );
    Ok(config)
}

/// Human-readable explanation of a startup failure
pub fn handle_startup_error(error: &Error) -> String {
    match error {
        Error::ConfigLoadFailed { path, reason } => {
            format!(
                "Configuration Error: Failed to load config from '{}': {}\n\nTry:\n• Check the path\n• Ensure file permissions are correct",
                path.display(),
                reason
            )
        }
        Error::ConfigParseFailed { format, reason } => {
            format!(
                "Configuration Error: Failed to parse {} config: {}\n\nTry:\n• Ensure the file is valid {}",
                format, reason, format
            )
        }
        Error::ConfigValidationFailed { field, reason } => {
            format!(
                "Configuration Error: Validation failed for '{}': {}",
                field, reason
            )
        }
        Error::Markup { position, reason } => {
            format!(
                "Markup Error: {} at byte {}\n\nTry:\n• Close every <span> you open\n• Escape '<' and '&' as &lt; and &amp;",
                reason, position
            )
        }
        Error::Clipboard { reason } => {
            format!(
                "Clipboard Error: {}\n\nTry:\n• Run inside a graphical session\n• Print the output instead of copying it",
                reason
            )
        }
        Error::Io(err) => {
            format!("I/O Error: {}\n\nTry:\n• Check file permissions", err)
        }
        _ => format!("Unexpected Error: {}", error),
    }
}
