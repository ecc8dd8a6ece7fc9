//! Main chromatext application
//!
//! Owns the document editor, picker hover state, copy status and clipboard,
//! and lays them out in a single central panel.

use crate::ansi::AnsiEncoder;
use crate::clipboard::{copy_document, ClipboardSink, SystemClipboard};
use crate::config::Config;
use crate::editor::Editor;
use crate::error::Result;
use crate::models::StyleTag;
use crate::picker::PickerState;
use crate::state::{CopyLabels, CopyStatusStore};
use crate::ui::{CopyButton, EditorView, PickerView, UiColors};
use eframe::egui;
use std::time::Instant;
use tracing::debug;

/// Main application state
pub struct ChromaTextApp {
    /// Document being edited
    editor: Editor,
    /// Editor widget state (selection)
    editor_view: EditorView,
    /// Which picker button is hovered
    picker: PickerState,
    /// Copy button status and its revert deadline
    copy_status: CopyStatusStore,
    /// Copy button captions
    labels: CopyLabels,
    encoder: AnsiEncoder,
    clipboard: Box<dyn ClipboardSink>,
    colors: UiColors,
}

impl ChromaTextApp {
    /// Create the app for eframe, using the system clipboard
    pub fn new(cc: &eframe::CreationContext<'_>, config: &Config) -> Result<Self> {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self::with_clipboard(config, Box::new(SystemClipboard::new()))
    }

    /// Create the app with an explicit clipboard
    pub fn with_clipboard(config: &Config, clipboard: Box<dyn ClipboardSink>) -> Result<Self> {
        let document = config.editor.initial_document()?;
        debug!("Initial document has {} characters", document.char_len());

        Ok(Self {
            editor: Editor::new(document),
            editor_view: EditorView::new(config.ui.font_size),
            picker: PickerState::new(),
            copy_status: CopyStatusStore::new(config.copy.status_duration()),
            labels: config.copy.labels(),
            encoder: AnsiEncoder::with_fence_language(config.copy.fence_language.clone()),
            clipboard,
            colors: UiColors::default(),
        })
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn copy_status(&self) -> &CopyStatusStore {
        &self.copy_status
    }

    pub fn labels(&self) -> &CopyLabels {
        &self.labels
    }

    /// Handle a picker click
    ///
    /// Style failures leave the document untouched and are only logged.
    pub fn handle_picker_action(&mut self, tag: StyleTag) {
        if tag == StyleTag::Reset {
            self.editor.reset();
            return;
        }

        let selection = self.editor_view.selection();
        if self.editor.apply(selection, tag).is_ok() {
            self.editor_view.clear_selection();
        }
    }

    /// Encode the document and put it on the clipboard
    ///
    /// The outcome is recorded in the copy status; it is also returned so
    /// callers can tell whether the clipboard was written.
    pub fn copy_to_clipboard(&mut self, now: Instant) -> bool {
        match copy_document(
            self.editor.document(),
            &self.encoder,
            self.clipboard.as_mut(),
            &mut self.copy_status,
            now,
        ) {
            Ok(encoded) => {
                debug!("Copied {} bytes of ANSI text", encoded.len());
                true
            }
            Err(e) => {
                debug!("Copy failed: {}", e);
                false
            }
        }
    }

    fn render(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.heading(
                egui::RichText::new("Discord Colored Text Generator")
                    .color(self.colors.heading_accent)
                    .size(26.0),
            );
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(
                    "Write your text, select parts of it and assign colors to them, \
                     then copy it using the button below and send it in a Discord message.",
                )
                .color(self.colors.text),
            );
            ui.add_space(12.0);
        });

        if let Some(tag) = PickerView::show(ui, &mut self.picker, &self.colors) {
            debug!("Picker action: {}", tag);
            self.handle_picker_action(tag);
        }

        ui.add_space(10.0);
        self.editor_view.show(ui, &mut self.editor, &self.colors);
        ui.add_space(10.0);

        ui.vertical_centered(|ui| {
            if CopyButton::show(ui, &self.copy_status, &self.labels, &self.colors) {
                self.copy_to_clipboard(Instant::now());
            }
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("This is an unofficial tool, it is not made or endorsed by Discord.")
                    .color(self.colors.text)
                    .small(),
            );
        });
    }
}

impl eframe::App for ChromaTextApp {
    fn logic(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        if self.copy_status.tick(now) {
            debug!("Copy status reverted to idle");
        }

        if let Some(remaining) = self.copy_status.remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }

    fn ui(&mut self, ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(self.colors.window_background)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show_inside(ui, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.render(ui));
            });
    }
}
