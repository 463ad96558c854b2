use eframe::egui;
use ruler_core::{Appearance, RenderStyle, RulerState, Settings, ViewportMetrics};

use crate::paint::paint_frame;

/// Logical dots per inch assumed when the settings carry no calibration
pub const DEFAULT_LOGICAL_DPI: f32 = 96.0;

/// Metrics for the area the ruler occupies this frame
pub fn measure_viewport(rect: egui::Rect, settings: &Settings) -> Option<ViewportMetrics> {
    let dpi = settings.dots_per_inch.unwrap_or(DEFAULT_LOGICAL_DPI);
    match ViewportMetrics::new(rect.height(), dpi, rect.width()) {
        Ok(metrics) => Some(metrics),
        Err(e) => {
            log::debug!("Cannot measure viewport: {e}");
            None
        }
    }
}

/// Distance of a screen position below the top of the ruler, in viewport pixels
pub fn pointer_offset(rect: egui::Rect, pos: egui::Pos2) -> f32 {
    pos.y - rect.top()
}

/// Draw the ruler into the remaining space and let the user drag the pointer
pub fn show_ruler(
    ui: &mut egui::Ui,
    state: &mut RulerState,
    appearance: &Appearance,
    style: &RenderStyle,
    settings: &Settings,
) {
    let (response, painter) =
        ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
    let rect = response.rect;

    if response.dragged() || response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            state.drag_pointer(pointer_offset(rect, pos));
        }
    }

    // Drawn after the drag so the pointer tracks the cursor in the same frame
    let metrics = measure_viewport(rect, settings);
    let frame = ruler_core::render_frame(metrics.as_ref(), state, appearance, style);
    paint_frame(&painter, rect.min, &frame);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(width: f32, height: f32) -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(10.0, 20.0), egui::vec2(width, height))
    }

    #[test]
    fn test_uncalibrated_uses_logical_dpi() {
        let metrics = measure_viewport(rect(300.0, 960.0), &Settings::default()).unwrap();
        assert_eq!(metrics.dots_per_inch, DEFAULT_LOGICAL_DPI);
        assert_eq!(metrics.height_inches(), 10.0);
        assert_eq!(metrics.width_px, 300.0);
    }

    #[test]
    fn test_calibration_overrides_dpi() {
        let settings = Settings {
            dots_per_inch: Some(120.0),
            ..Settings::default()
        };
        let metrics = measure_viewport(rect(300.0, 960.0), &settings).unwrap();
        assert_eq!(metrics.height_inches(), 8.0);
    }

    #[test]
    fn test_pointer_offset_is_relative_to_ruler_top() {
        let rect = rect(300.0, 960.0);
        assert_eq!(pointer_offset(rect, egui::Pos2::new(50.0, 20.0)), 0.0);
        assert_eq!(pointer_offset(rect, egui::Pos2::new(50.0, 270.0)), 250.0);

        let mut state = RulerState::default();
        assert!(state.drag_pointer(pointer_offset(rect, egui::Pos2::new(50.0, 270.0))));
        assert_eq!(state.pointer_position_px, 250.0);
    }

    #[test]
    fn test_bad_calibration_skips_measurement() {
        let settings = Settings {
            dots_per_inch: Some(0.0),
            ..Settings::default()
        };
        assert!(measure_viewport(rect(300.0, 960.0), &settings).is_none());
    }
}
