//! Configuration management for chromatext
//!
//! Window and font settings, the document the editor starts with, and
//! everything about copying: fence language, status duration and the copy
//! button captions. Files are TOML or JSON; see [`loader`] for where they
//! are looked up.

pub mod loader;

use crate::ansi::DEFAULT_FENCE_LANGUAGE;
use crate::error::{Error, Result};
use crate::markup;
use crate::models::Document;
use crate::state::{CopyLabels, DEFAULT_STATUS_DURATION};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure for chromatext
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window configuration
    pub ui: UiConfig,

    /// Editor configuration
    pub editor: EditorConfig,

    /// Copy behavior configuration
    pub copy: CopyConfig,
}

/// Window-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Initial window width in points
    pub window_width: f32,

    /// Initial window height in points
    pub window_height: f32,

    /// Editor font size in points
    pub font_size: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 700.0,
            window_height: 640.0,
            font_size: 14.0,
        }
    }
}

/// Editor configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Span markup to start with instead of the welcome message
    pub initial_markup: Option<String>,
}

impl EditorConfig {
    /// Document the editor opens with
    pub fn initial_document(&self) -> Result<Document> {
        match &self.initial_markup {
            Some(markup) => markup::parse(markup),
            None => Ok(markup::welcome_document()),
        }
    }
}

/// Copy behavior configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    /// Language tag of the code fence
    pub fence_language: String,

    /// How long "Copied!" / "Failed to copy!" stay visible
    pub status_duration_ms: u64,

    /// Caption while idle
    pub idle_label: String,

    /// Caption after a successful copy
    pub success_label: String,

    /// Caption after a failed copy
    pub failure_label: String,
}

impl Default for CopyConfig {
    fn default() -> Self {
        let labels = CopyLabels::default();
        Self {
            fence_language: DEFAULT_FENCE_LANGUAGE.to_string(),
            status_duration_ms: DEFAULT_STATUS_DURATION.as_millis() as u64,
            idle_label: labels.idle,
            success_label: labels.success,
            failure_label: labels.failure,
        }
    }
}

impl CopyConfig {
    pub fn status_duration(&self) -> Duration {
        Duration::from_millis(self.status_duration_ms)
    }

    pub fn labels(&self) -> CopyLabels {
        CopyLabels {
            idle: self.idle_label.clone(),
            success: self.success_label.clone(),
            failure: self.failure_label.clone(),
        }
    }
}

impl Config {
    /// Check value ranges and that the initial markup parses
    pub fn validate(&self) -> Result<()> {
        if !(6.0..=72.0).contains(&self.ui.font_size) {
            return Err(invalid("ui.font_size", "Font size must be between 6 and 72"));
        }

        if self.ui.window_width < 320.0 || self.ui.window_height < 240.0 {
            return Err(invalid(
                "ui.window_width",
                "Window must be at least 320x240",
            ));
        }

        if self.copy.fence_language.trim().is_empty()
            || self.copy.fence_language.contains(char::is_whitespace)
        {
            return Err(invalid(
                "copy.fence_language",
                "Fence language must be a single non-empty word",
            ));
        }

        if !(100..=60_000).contains(&self.copy.status_duration_ms) {
            return Err(invalid(
                "copy.status_duration_ms",
                "Status duration must be between 100 and 60000 ms",
            ));
        }

        for (field, label) in [
            ("copy.idle_label", &self.copy.idle_label),
            ("copy.success_label", &self.copy.success_label),
            ("copy.failure_label", &self.copy.failure_label),
        ] {
            if label.trim().is_empty() {
                return Err(invalid(field, "Label cannot be empty"));
            }
        }

        if let Some(markup) = &self.editor.initial_markup {
            markup::parse(markup).map_err(|e| invalid("editor.initial_markup", e.to_string()))?;
        }

        Ok(())
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> Error {
    Error::ConfigValidationFailed {
        field: field.to_string(),
        reason: reason.into(),
    }
}
