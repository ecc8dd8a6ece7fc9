//! Color utilities for UI rendering
//!
//! Converts swatch colors to egui colors and maps style combinations to
//! the text formats used for the in-editor preview.

use crate::models::{Rgb, StyleSet, StyleTag};
use eframe::egui;

/// Extension trait to convert swatch colors to egui::Color32
pub trait ToEguiColor {
    /// Convert to egui::Color32
    fn to_egui(&self) -> egui::Color32;
}

impl ToEguiColor for Rgb {
    fn to_egui(&self) -> egui::Color32 {
        egui::Color32::from_rgb(self.r, self.g, self.b)
    }
}

/// Fixed colors of the application chrome
#[derive(Debug, Clone)]
pub struct UiColors {
    pub window_background: egui::Color32,
    pub editor_background: egui::Color32,
    pub editor_border: egui::Color32,
    pub text: egui::Color32,
    pub heading_accent: egui::Color32,
    pub button_idle: egui::Color32,
    pub button_success: egui::Color32,
    pub button_error: egui::Color32,
}

impl Default for UiColors {
    fn default() -> Self {
        Self {
            window_background: egui::Color32::from_rgb(0x36, 0x39, 0x3f),
            editor_background: egui::Color32::from_rgb(0x2f, 0x31, 0x36),
            editor_border: egui::Color32::from_rgb(0x20, 0x22, 0x25),
            text: egui::Color32::from_rgb(0xb9, 0xbb, 0xbe),
            heading_accent: egui::Color32::from_rgb(0x58, 0x65, 0xf2),
            button_idle: egui::Color32::from_rgb(0x4f, 0x54, 0x5c),
            button_success: egui::Color32::from_rgb(0x3b, 0xa5, 0x5d),
            button_error: egui::Color32::from_rgb(0xd8, 0x3c, 0x3e),
        }
    }
}

impl UiColors {
    /// Text format previewing `style` in the editor
    ///
    /// egui has no bold weight in the default fonts, so bold text is drawn
    /// brighter instead.
    pub fn text_format(&self, style: &StyleSet, font_id: egui::FontId) -> egui::TextFormat {
        let mut color = style
            .foreground
            .map(|c| StyleTag::Foreground(c).swatch().to_egui())
            .unwrap_or(self.text);
        if style.bold {
            color = brighten(color, 1.3);
        }

        let background = style
            .background
            .map(|c| StyleTag::Background(c).swatch().to_egui())
            .unwrap_or(egui::Color32::TRANSPARENT);

        let underline = if style.underline {
            egui::Stroke::new(1.0, color)
        } else {
            egui::Stroke::NONE
        };

        egui::TextFormat {
            font_id,
            color,
            background,
            underline,
            ..Default::default()
        }
    }

    /// Copy button fill for the current status
    pub fn copy_button_fill(&self, is_idle: bool, is_error: bool) -> egui::Color32 {
        if is_error {
            self.button_error
        } else if is_idle {
            self.button_idle
        } else {
            self.button_success
        }
    }
}

fn brighten(color: egui::Color32, factor: f32) -> egui::Color32 {
    let scale = |channel: u8| (channel as f32 * factor).min(255.0) as u8;
    egui::Color32::from_rgb(scale(color.r()), scale(color.g()), scale(color.b()))
}
