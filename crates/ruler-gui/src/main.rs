#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use eframe::egui;
use log::LevelFilter;
use ruler_core::{Settings, UnitSystem};
use std::path::PathBuf;

mod app;
mod logger;
mod paint;
mod views;

#[derive(Parser)]
#[command(name = "ruler-gui", about = "On-screen ruler", version)]
struct Args {
    /// Start in centimeters, regardless of the saved preference
    #[arg(long, conflicts_with = "imperial")]
    metric: bool,

    /// Start in inches, regardless of the saved preference
    #[arg(long)]
    imperial: bool,

    /// Settings file (defaults to the per-user config location)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Record debug messages in the log panel
    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn units_override(&self) -> Option<UnitSystem> {
        match (self.metric, self.imperial) {
            (true, _) => Some(UnitSystem::Metric),
            (_, true) => Some(UnitSystem::Imperial),
            _ => None,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let logger = logger::AppLogger::new(500, level);
    if let Err(e) = logger.clone().init() {
        eprintln!("Logging unavailable: {e}");
    }

    let settings_path = args.settings.clone().unwrap_or_else(Settings::default_path);
    let units_override = args.units_override();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 900.0])
            .with_title("MeasureIt"),
        ..Default::default()
    };

    eframe::run_native(
        "MeasureIt",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::RulerApp::new(
                cc,
                settings_path,
                units_override,
                logger,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
