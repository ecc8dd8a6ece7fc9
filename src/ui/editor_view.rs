//! Editable text area with styled preview
//!
//! The text itself is edited through an `egui::TextEdit` over the document's
//! plain text. Styling is drawn by a custom layouter built from the
//! document's runs, and edits are diffed back into the document so spans
//! around untouched text survive.

use crate::editor::{Editor, Selection};
use crate::models::StyledRun;
use crate::ui::colors::UiColors;
use eframe::egui;
use tracing::warn;

/// Editor widget state carried between frames
#[derive(Debug, Clone)]
pub struct EditorView {
    /// Last selection reported by the text edit
    selection: Selection,
    font_size: f32,
    desired_rows: usize,
}

impl EditorView {
    pub fn new(font_size: f32) -> Self {
        Self {
            selection: Selection::caret(0),
            font_size,
            desired_rows: 12,
        }
    }

    /// Selection the picker buttons apply to
    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::caret(self.selection.cursor);
    }

    pub fn font_id(&self) -> egui::FontId {
        egui::FontId::monospace(self.font_size)
    }

    /// Draw the editor and fold any typing back into `editor`
    pub fn show(&mut self, ui: &mut egui::Ui, editor: &mut Editor, colors: &UiColors) -> egui::Response {
        let mut buffer = editor.document().plain_text();
        let runs = editor.document().runs();
        let font_id = self.font_id();

        let mut layouter = |ui: &egui::Ui, text: &dyn egui::TextBuffer, wrap_width: f32| {
            let mut job = styled_layout_job(text.as_str(), &runs, colors, font_id.clone());
            job.wrap.max_width = wrap_width;
            ui.painter().layout_job(job)
        };

        let output = egui::Frame::NONE
            .fill(colors.editor_background)
            .stroke(egui::Stroke::new(1.0, colors.editor_border))
            .inner_margin(egui::Margin::same(8))
            .corner_radius(5.0)
            .show(ui, |ui| {
                egui::TextEdit::multiline(&mut buffer)
                    .font(font_id.clone())
                    .frame(egui::Frame::NONE)
                    .desired_width(f32::INFINITY)
                    .desired_rows(self.desired_rows)
                    .layouter(&mut layouter)
                    .show(ui)
            })
            .inner;

        if output.response.changed() {
            let caret = output.cursor_range.map(|range| range.primary.index);
            if let Err(e) = editor.sync_text_at(&buffer, caret) {
                warn!("Failed to apply edit: {}", e);
            }
        }

        if let Some(range) = output.cursor_range {
            self.selection = Selection::new(range.secondary.index, range.primary.index);
        }

        output.response.response
    }
}

/// Build the layout for `text`, coloring it run by run
///
/// `text` may be one frame ahead of `runs` while the user types; characters
/// past the end of the runs are laid out unstyled.
pub fn styled_layout_job(
    text: &str,
    runs: &[StyledRun],
    colors: &UiColors,
    font_id: egui::FontId,
) -> egui::epaint::text::LayoutJob {
    let mut job = egui::epaint::text::LayoutJob::default();
    let mut rest = text;

    for run in runs {
        if rest.is_empty() {
            break;
        }
        let split = rest
            .char_indices()
            .nth(run.char_len())
            .map(|(byte, _)| byte)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(split);
        job.append(chunk, 0.0, colors.text_format(&run.style, font_id.clone()));
        rest = tail;
    }

    if !rest.is_empty() {
        job.append(rest, 0.0, colors.text_format(&Default::default(), font_id));
    }

    job
}
