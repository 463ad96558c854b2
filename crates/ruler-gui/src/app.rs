use eframe::egui;
use ruler_core::{
    Animated, Appearance, Argb, RenderStyle, RulerState, Settings, UnitSystem, target_alpha,
};
use std::path::PathBuf;

use crate::logger::AppLogger;
use crate::paint::color32;
use crate::views::{
    ColorDialogAction, ColorDialogState, ControlAction, show_color_dialog, show_controls,
    show_ruler,
};

/// Phone-density paint sizes shrunk for desktop logical pixels
const DESKTOP_STYLE_SCALE: f32 = 0.3;

pub struct RulerApp {
    state: RulerState,
    settings: Settings,
    settings_path: PathBuf,

    // Values shown on screen, possibly mid-transition
    pointer_alpha: Animated<u8>,
    accent: Animated<Argb>,

    color_dialog: Option<ColorDialogState>,
    style: RenderStyle,
    logger: AppLogger,
}

impl RulerApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        settings_path: PathBuf,
        units_override: Option<UnitSystem>,
        logger: AppLogger,
    ) -> Self {
        let settings = Settings::load_or_default(&settings_path);
        let state = settings.to_state(units_override);
        let appearance = Appearance::from_state(&state);

        log::info!(
            "Ruler ready ({})",
            if state.unit_system.is_metric() {
                "metric"
            } else {
                "imperial"
            }
        );

        Self {
            state,
            settings,
            settings_path,
            pointer_alpha: Animated::new(appearance.pointer_alpha),
            accent: Animated::new(appearance.accent_color),
            color_dialog: None,
            style: RenderStyle::default().scaled(DESKTOP_STYLE_SCALE),
            logger,
        }
    }

    fn save_settings(&mut self) {
        self.settings.update_from_state(&self.state);
        match self.settings.save(&self.settings_path) {
            Ok(()) => log::debug!("Saved settings to {}", self.settings_path.display()),
            Err(e) => log::error!("Failed to save settings: {e}"),
        }
    }

    fn toggle_units(&mut self) {
        self.state.toggle_units();
        log::info!("Units: {}", self.state.unit_system.symbol());
        self.save_settings();
    }

    fn toggle_pointer(&mut self, now: f64) {
        // Fade towards the opposite of what is on screen right now
        let target = target_alpha(self.pointer_alpha.value(now));
        self.state.pointer_visible = target > 0;
        self.pointer_alpha.animate_to(target, now);
        self.save_settings();
    }

    fn apply_accent(&mut self, color: Argb, now: f64) {
        self.state.pick_accent(color);
        self.accent.animate_to(self.state.accent_color, now);
        log::info!("Accent colour {}", self.state.accent_color);
        self.save_settings();
    }

    fn calibrate(&mut self, dots_per_inch: Option<f32>) {
        self.settings.dots_per_inch = dots_per_inch;
        match dots_per_inch {
            Some(dpi) => log::info!("Calibrated to {dpi:.1} dpi"),
            None => log::info!("Calibration reset"),
        }
        self.save_settings();
    }

    fn handle_control(&mut self, action: ControlAction, now: f64) {
        match action {
            ControlAction::ToggleUnits => self.toggle_units(),
            ControlAction::TogglePointer => self.toggle_pointer(now),
            ControlAction::PickColor => {
                self.color_dialog = Some(ColorDialogState::new(self.state.accent_color));
            }
            ControlAction::Calibrate(dpi) => self.calibrate(dpi),
        }
    }

    fn handle_color_dialog(&mut self, action: ColorDialogAction, now: f64) {
        self.color_dialog = None;
        match action {
            ColorDialogAction::Confirm(color) => self.apply_accent(color, now),
            ColorDialogAction::Random => self.apply_accent(Argb::random_opaque(), now),
            ColorDialogAction::Cancel => {}
        }
    }
}

impl eframe::App for RulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        let appearance = Appearance {
            accent_color: self.accent.value(now),
            pointer_alpha: self.pointer_alpha.value(now),
        };

        // The control panel background follows the accent, like the pointer
        let panel_frame =
            egui::Frame::side_top_panel(&ctx.style()).fill(color32(appearance.accent_color));

        let actions = egui::SidePanel::right("controls")
            .resizable(false)
            .min_width(200.0)
            .frame(panel_frame)
            .show(ctx, |ui| {
                let actions = show_controls(ui, &self.state, &self.settings, &self.logger);

                if let Some(message) = self.logger.latest_message() {
                    ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                        ui.label(message);
                    });
                }
                actions
            })
            .inner;

        for action in actions {
            self.handle_control(action, now);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                show_ruler(
                    ui,
                    &mut self.state,
                    &appearance,
                    &self.style,
                    &self.settings,
                );
            });

        let dialog_action = self
            .color_dialog
            .as_mut()
            .and_then(|dialog| show_color_dialog(ctx, dialog));
        if let Some(action) = dialog_action {
            self.handle_color_dialog(action, now);
        }

        if self.accent.is_animating() || self.pointer_alpha.is_animating() {
            ctx.request_repaint();
        }
    }
}
