use eframe::egui;
use ruler_core::{RulerState, Settings, UnitSystem};

use crate::logger::AppLogger;
use crate::views::ruler::DEFAULT_LOGICAL_DPI;

/// What the user asked for from the control panel this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    ToggleUnits,
    TogglePointer,
    PickColor,
    Calibrate(Option<f32>),
}

pub fn show_controls(
    ui: &mut egui::Ui,
    state: &RulerState,
    settings: &Settings,
    logger: &AppLogger,
) -> Vec<ControlAction> {
    let mut actions = Vec::new();

    ui.heading("Ruler");
    ui.separator();
    ui.add_space(10.0);

    let units_label = match state.unit_system {
        UnitSystem::Imperial => "📏 Switch to cm",
        UnitSystem::Metric => "📏 Switch to inches",
    };
    if ui.button(units_label).clicked() {
        actions.push(ControlAction::ToggleUnits);
    }

    let pointer_label = if state.pointer_visible {
        "👆 Hide pointer"
    } else {
        "👆 Show pointer"
    };
    if ui.button(pointer_label).clicked() {
        actions.push(ControlAction::TogglePointer);
    }

    if ui.button("🎨 Accent colour…").clicked() {
        actions.push(ControlAction::PickColor);
    }

    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);

    egui::CollapsingHeader::new("📐 Calibration")
        .default_open(false)
        .show(ui, |ui| {
            ui.label("Hold a real ruler to the screen and adjust until the inch marks line up.");

            let mut dpi = settings.dots_per_inch.unwrap_or(DEFAULT_LOGICAL_DPI);
            let changed = ui
                .add(
                    egui::DragValue::new(&mut dpi)
                        .range(30.0..=600.0)
                        .speed(0.5)
                        .suffix(" dpi"),
                )
                .changed();
            if changed {
                actions.push(ControlAction::Calibrate(Some(dpi)));
            }
            if settings.dots_per_inch.is_some() && ui.button("Reset").clicked() {
                actions.push(ControlAction::Calibrate(None));
            }
        });

    egui::CollapsingHeader::new("📜 Log")
        .default_open(false)
        .show(ui, |ui| {
            if ui.button("Clear").clicked() {
                logger.clear();
            }
            egui::ScrollArea::vertical()
                .max_height(200.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for entry in logger.get_entries() {
                        ui.monospace(entry.display_line());
                    }
                });
        });

    actions
}
