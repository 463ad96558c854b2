use eframe::egui::{self, Color32};
use ruler_core::Argb;

use crate::paint::{argb, color32};

pub struct ColorDialogState {
    pub selection: Color32,
}

impl ColorDialogState {
    pub fn new(current: Argb) -> Self {
        Self {
            selection: color32(current),
        }
    }
}

pub enum ColorDialogAction {
    /// Use the picked colour (already forced opaque)
    Confirm(Argb),
    /// Use a random colour
    Random,
    Cancel,
}

pub fn show_color_dialog(
    ctx: &egui::Context,
    state: &mut ColorDialogState,
) -> Option<ColorDialogAction> {
    let mut action = None;
    let mut open = true;

    egui::Window::new("🎨 Accent Colour")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::color_picker::color_picker_color32(
                ui,
                &mut state.selection,
                egui::color_picker::Alpha::Opaque,
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("✔ Choose").clicked() {
                    action = Some(ColorDialogAction::Confirm(argb(state.selection).opaque()));
                }
                if ui.button("🎲 Random").clicked() {
                    action = Some(ColorDialogAction::Random);
                }
                if ui.button("Cancel").clicked() {
                    action = Some(ColorDialogAction::Cancel);
                }
            });
        });

    if !open && action.is_none() {
        action = Some(ColorDialogAction::Cancel);
    }
    action
}
