//! Copy button with transient status caption

use crate::state::{CopyLabels, CopyStatusStore};
use crate::ui::colors::UiColors;
use eframe::egui;

pub struct CopyButton;

impl CopyButton {
    /// Draw the button; returns true when it was clicked
    pub fn show(
        ui: &mut egui::Ui,
        store: &CopyStatusStore,
        labels: &CopyLabels,
        colors: &UiColors,
    ) -> bool {
        let status = store.status();
        let fill = colors.copy_button_fill(status.is_idle(), status.is_error());
        let caption = egui::RichText::new(store.label(labels))
            .color(egui::Color32::WHITE)
            .size(15.0);

        let response = ui.add(
            egui::Button::new(caption)
                .fill(fill)
                .min_size(egui::vec2(260.0, 36.0)),
        );

        response.clicked()
    }
}
