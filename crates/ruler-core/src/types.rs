use crate::color::Argb;
use crate::constants::{
    CM_PER_INCH, DEFAULT_POINTER_POSITION_PX, IMPERIAL_STEP_INCHES, MAX_TICKS, METRIC_STEP_MM,
    MM_PER_CM,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RulerError {
    #[error("Invalid viewport metrics: {0}")]
    InvalidMetrics(String),
    #[error("Invalid colour: {0}")]
    InvalidColor(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings error: {0}")]
    Settings(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
}

pub type Result<T> = std::result::Result<T, RulerError>;

/// Measurement system the ruler is graduated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitSystem {
    /// Inches, ticks every 1/16"
    #[default]
    Imperial,
    /// Centimeters, ticks every millimeter
    Metric,
}

impl UnitSystem {
    pub fn toggled(self) -> Self {
        match self {
            UnitSystem::Imperial => UnitSystem::Metric,
            UnitSystem::Metric => UnitSystem::Imperial,
        }
    }

    pub fn is_metric(self) -> bool {
        self == UnitSystem::Metric
    }

    pub fn from_metric_flag(is_metric: bool) -> Self {
        if is_metric {
            UnitSystem::Metric
        } else {
            UnitSystem::Imperial
        }
    }

    /// Short unit name for the labelling unit ("in" or "cm")
    pub fn symbol(self) -> &'static str {
        match self {
            UnitSystem::Imperial => "in",
            UnitSystem::Metric => "cm",
        }
    }
}

/// Subdivision level of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    Whole,
    Half,
    Quarter,
    Sixteenth,
}

impl Rank {
    /// Divisor applied to the viewport width to get the stroke length
    pub fn width_divisor(self) -> f32 {
        match self {
            Rank::Whole => 2.0,
            Rank::Half => 4.0,
            Rank::Quarter => 8.0,
            Rank::Sixteenth => 16.0,
        }
    }
}

/// Display metrics supplied by the host for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportMetrics {
    /// Height of the drawing surface in pixels
    pub height_px: f32,
    /// Vertical pixel density
    pub dots_per_inch: f32,
    /// Width of the drawing surface in pixels
    pub width_px: f32,
}

impl ViewportMetrics {
    pub fn new(height_px: f32, dots_per_inch: f32, width_px: f32) -> Result<Self> {
        if !height_px.is_finite() || height_px < 0.0 {
            return Err(RulerError::InvalidMetrics(format!(
                "height must be a non-negative number, got {height_px}"
            )));
        }
        if !width_px.is_finite() || width_px < 0.0 {
            return Err(RulerError::InvalidMetrics(format!(
                "width must be a non-negative number, got {width_px}"
            )));
        }
        if !dots_per_inch.is_finite() || dots_per_inch <= 0.0 {
            return Err(RulerError::InvalidMetrics(format!(
                "dots per inch must be positive, got {dots_per_inch}"
            )));
        }

        // Metric graduations are the denser of the two, but check both
        let inches = height_px as f64 / dots_per_inch as f64;
        let imperial_steps = inches / IMPERIAL_STEP_INCHES as f64;
        let metric_steps = inches * CM_PER_INCH * MM_PER_CM as f64 / METRIC_STEP_MM as f64;
        if imperial_steps.max(metric_steps) > MAX_TICKS as f64 {
            return Err(RulerError::InvalidMetrics(format!(
                "{height_px} px at {dots_per_inch} dpi needs more than {MAX_TICKS} ticks"
            )));
        }

        Ok(Self {
            height_px,
            dots_per_inch,
            width_px,
        })
    }

    /// Viewport height in inches
    pub fn height_inches(&self) -> f32 {
        self.height_px / self.dots_per_inch
    }
}

/// A single ruler graduation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick {
    /// Position in the labelling unit (inches, or centimeters in metric mode)
    pub position: f32,
    /// Distance from the top of the viewport in pixels
    pub offset_px: f32,
    pub rank: Rank,
    pub line_length_px: f32,
    /// Present only on whole-unit ticks
    pub label: Option<String>,
}

/// Ruler state owned by the hosting screen
///
/// Mutated only in response to user gestures: the unit and pointer toggles,
/// dragging the pointer, and picking an accent colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerState {
    pub unit_system: UnitSystem,
    /// Pointer distance from the top of the viewport in pixels
    pub pointer_position_px: f32,
    pub pointer_visible: bool,
    pub accent_color: Argb,
}

impl Default for RulerState {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Imperial,
            pointer_position_px: DEFAULT_POINTER_POSITION_PX,
            pointer_visible: true,
            accent_color: Argb::DEFAULT_ACCENT,
        }
    }
}

impl RulerState {
    pub fn toggle_units(&mut self) {
        self.unit_system = self.unit_system.toggled();
    }

    pub fn toggle_pointer(&mut self) {
        self.pointer_visible = !self.pointer_visible;
    }

    /// Move the pointer to `y` pixels from the top.
    ///
    /// Drags are ignored while the pointer is hidden; returns whether the
    /// gesture was consumed.
    pub fn drag_pointer(&mut self, y: f32) -> bool {
        if !self.pointer_visible {
            return false;
        }
        self.pointer_position_px = y;
        true
    }

    /// Store a picked colour. Picked colours are always opaque.
    pub fn pick_accent(&mut self, color: Argb) {
        self.accent_color = color.opaque();
    }
}
