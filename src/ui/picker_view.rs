//! Picker button rows

use crate::models::StyleTag;
use crate::picker::{PickerAction, PickerGroup, PickerState};
use crate::ui::colors::{ToEguiColor, UiColors};
use eframe::egui;

const BUTTON_SIZE: f32 = 32.0;
const HEADING_WIDTH: f32 = 28.0;

/// Draws the style, foreground and background rows
pub struct PickerView;

impl PickerView {
    /// Draw all picker rows, returning the action clicked this frame
    ///
    /// Hover is tracked in `state`; the tooltip comes from it, so only color
    /// swatches show one.
    pub fn show(ui: &mut egui::Ui, state: &mut PickerState, colors: &UiColors) -> Option<StyleTag> {
        let mut clicked = None;
        let mut hovered = None;

        for group in PickerGroup::ALL {
            ui.horizontal(|ui| {
                match group.heading() {
                    Some(heading) => {
                        ui.add_sized(
                            [HEADING_WIDTH, BUTTON_SIZE],
                            egui::Label::new(egui::RichText::new(heading).strong().color(colors.text)),
                        );
                    }
                    None => {
                        ui.add_space(HEADING_WIDTH + ui.spacing().item_spacing.x);
                    }
                }

                for action in group.actions() {
                    let mut response = ui.add(Self::button(&action, colors));
                    if response.hovered() {
                        hovered = Some(action.tag);
                    }
                    if state.hovered() == Some(action.tag) {
                        if let Some(tooltip) = state.tooltip() {
                            response = response.on_hover_text(tooltip);
                        }
                    }
                    if response.clicked() {
                        clicked = Some(action.tag);
                    }
                }
            });
        }

        match hovered {
            Some(tag) => state.hover(tag),
            None => state.unhover(),
        }

        clicked
    }

    fn button<'a>(action: &PickerAction, colors: &UiColors) -> egui::Button<'a> {
        let mut text = egui::RichText::new(action.caption()).color(egui::Color32::WHITE);
        match action.tag {
            StyleTag::Bold => text = text.strong(),
            StyleTag::Underline => text = text.underline(),
            _ => {}
        }

        let fill = match action.tag {
            StyleTag::Reset | StyleTag::Bold | StyleTag::Underline => colors.button_idle,
            tag => tag.swatch().to_egui(),
        };

        egui::Button::new(text)
            .fill(fill)
            .min_size(egui::vec2(BUTTON_SIZE, BUTTON_SIZE))
    }
}
