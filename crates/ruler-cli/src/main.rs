use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use ruler_core::{
    Appearance, Argb, RenderStyle, RulerState, Settings, UnitSystem, ViewportMetrics,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ruler", about = "On-screen ruler geometry CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the ticks drawn for a viewport
    Ticks {
        #[command(flatten)]
        viewport: ViewportArgs,

        /// Graduate in centimeters instead of inches
        #[arg(long)]
        metric: bool,
    },

    /// Render a full frame as JSON or SVG
    Render {
        #[command(flatten)]
        viewport: ViewportArgs,

        /// Graduate in centimeters instead of inches
        #[arg(long)]
        metric: bool,

        /// Pointer distance from the top in pixels
        #[arg(long, default_value = "100")]
        pointer_px: f32,

        /// Leave the pointer out of the frame
        #[arg(long)]
        hide_pointer: bool,

        /// Accent colour as #RRGGBB or #AARRGGBB
        #[arg(long, default_value = "#FF4081")]
        accent: String,

        /// Scale factor for strokes and labels
        #[arg(long, default_value = "1.0")]
        scale: f32,

        /// Output format
        #[arg(long, default_value = "svg", value_enum)]
        format: FormatArg,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the pointer read-out for a position
    Pointer {
        /// Pointer distance from the top in pixels
        #[arg(long)]
        position_px: f32,

        /// Vertical pixel density
        #[arg(long)]
        dpi: f32,

        /// Read out in centimeters
        #[arg(long)]
        metric: bool,
    },

    /// Show or edit persisted settings
    Settings {
        /// Settings file (defaults to the per-user config location)
        #[arg(long)]
        file: Option<PathBuf>,

        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Args)]
struct ViewportArgs {
    /// Viewport height in pixels
    #[arg(long)]
    height_px: f32,

    /// Vertical pixel density
    #[arg(long)]
    dpi: f32,

    /// Viewport width in pixels
    #[arg(long, default_value = "1080")]
    width_px: f32,
}

impl ViewportArgs {
    fn metrics(&self) -> Result<ViewportMetrics> {
        Ok(ViewportMetrics::new(self.height_px, self.dpi, self.width_px)?)
    }
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the current settings
    Show,
    /// Change one setting, e.g. `set accent_color "#00FF00"`
    Set { key: String, value: String },
    /// Restore the defaults
    Reset,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Svg,
}

fn units(metric: bool) -> UnitSystem {
    UnitSystem::from_metric_flag(metric)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Ticks { viewport, metric } => {
            let metrics = viewport.metrics()?;
            let units = units(metric);
            let ticks = ruler_core::ticks(&metrics, units);

            println!(
                "{} ticks over {:.3} in ({})",
                ticks.len(),
                metrics.height_inches(),
                units.symbol()
            );
            for tick in ticks {
                println!(
                    "{:>8.4} {}  y={:<9.2} len={:<8.2} {:?}{}",
                    tick.position,
                    units.symbol(),
                    tick.offset_px,
                    tick.line_length_px,
                    tick.rank,
                    tick.label.map(|l| format!("  [{l}]")).unwrap_or_default()
                );
            }
        }

        Commands::Render {
            viewport,
            metric,
            pointer_px,
            hide_pointer,
            accent,
            scale,
            format,
            output,
        } => {
            if !scale.is_finite() || scale <= 0.0 {
                bail!("scale must be positive, got {scale}");
            }
            let metrics = viewport.metrics()?;
            let accent: Argb = accent.parse()?;
            let state = RulerState {
                unit_system: units(metric),
                pointer_position_px: pointer_px,
                pointer_visible: !hide_pointer,
                accent_color: accent,
            };
            let style = RenderStyle::default().scaled(scale);
            let frame = ruler_core::render_frame(
                Some(&metrics),
                &state,
                &Appearance::from_state(&state),
                &style,
            );

            let rendered = match format {
                FormatArg::Json => frame.to_json()?,
                FormatArg::Svg => ruler_core::svg::frame_to_svg(&frame),
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!(
                        "Rendered {} primitives → {}",
                        frame.primitives.len(),
                        path.display()
                    );
                }
                None => print!("{rendered}"),
            }
        }

        Commands::Pointer {
            position_px,
            dpi,
            metric,
        } => {
            if !dpi.is_finite() || dpi <= 0.0 {
                bail!("dpi must be positive, got {dpi}");
            }
            let units = units(metric);
            let reading = ruler_core::pointer_reading(position_px, dpi, units);
            println!(
                "{} {}",
                ruler_core::format_reading(reading),
                units.symbol()
            );
        }

        Commands::Settings { file, action } => {
            let path = file.unwrap_or_else(Settings::default_path);

            match action {
                SettingsAction::Show => {
                    let settings = Settings::load_or_default(&path);
                    println!("Settings ({}):", path.display());
                    println!("  is_metric: {}", settings.is_metric);
                    println!("  show_pointer: {}", settings.show_pointer);
                    println!("  accent_color: {}", settings.accent_color);
                    match settings.dots_per_inch {
                        Some(dpi) => println!("  dots_per_inch: {dpi}"),
                        None => println!("  dots_per_inch: (not calibrated)"),
                    }
                }
                SettingsAction::Set { key, value } => {
                    let mut settings = Settings::load_if_exists(&path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    settings.set(&key, &value)?;
                    settings.save(&path)?;
                    println!("{key} = {value} → {}", path.display());
                }
                SettingsAction::Reset => {
                    Settings::default().save(&path)?;
                    println!("Reset settings → {}", path.display());
                }
            }
        }
    }

    Ok(())
}
