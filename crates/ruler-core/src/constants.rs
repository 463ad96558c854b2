//! Shared constants for the ruler
//!
//! Paint sizes are expressed in device pixels for a phone-density screen;
//! desktop hosts scale them through `RenderStyle::scaled`.

use std::time::Duration;

// =============================================================================
// Unit Conversion
// =============================================================================

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Millimeters per centimeter
pub const MM_PER_CM: f32 = 10.0;

/// Convert a length in inches to centimeters
#[inline]
pub fn inches_to_cm(inches: f32) -> f32 {
    (inches as f64 * CM_PER_INCH) as f32
}

/// Convert a length in centimeters to inches
#[inline]
pub fn cm_to_inches(cm: f32) -> f32 {
    (cm as f64 / CM_PER_INCH) as f32
}

// =============================================================================
// Graduations
// =============================================================================

/// Distance between imperial ticks (inches). Exactly representable.
pub const IMPERIAL_STEP_INCHES: f32 = 0.0625;

/// Distance between metric ticks (millimeters)
pub const METRIC_STEP_MM: f32 = 1.0;

/// Upper bound on the ticks one ruler may emit. Step indices up to 2^24 are
/// exact in `f32`, so every tick position below this is distinct.
pub const MAX_TICKS: u32 = 1 << 24;

/// Every tick is pushed down by this many pixels so the first one is fully visible
pub const LEADING_OFFSET_PX: f32 = 5.0;

// =============================================================================
// Paint
// =============================================================================

/// Stroke width for ticks and the pointer line (pixels)
pub const DEFAULT_STROKE_WIDTH: f32 = 10.0;

/// Text size for tick labels and the pointer read-out (pixels)
pub const LABEL_TEXT_SIZE: f32 = 56.0;

/// Gap between the pointer circle and the right edge of the viewport (pixels)
pub const MARGIN_OFFSET: f32 = 25.0;

/// Tick labels sit this far back from the tick end and below the tick (pixels)
pub const TICK_LABEL_OFFSET: f32 = 50.0;

/// Horizontal shift of the read-out text inside the pointer circle
pub const POINTER_LABEL_SHIFT_X: f32 = 40.0;

/// Vertical shift of the read-out text inside the pointer circle
pub const POINTER_LABEL_SHIFT_Y: f32 = 20.0;

/// Read-outs longer than this many characters are nudged up to stay centered
pub const POINTER_LABEL_SHORT_LEN: usize = 3;

/// Where the pointer starts before the user drags it (pixels from top)
pub const DEFAULT_POINTER_POSITION_PX: f32 = 100.0;

// =============================================================================
// Animation
// =============================================================================

/// Duration of the pointer fade and accent colour transitions
pub const ANIMATION_DURATION: Duration = Duration::from_millis(200);

/// Pointer alpha when fully shown
pub const ALPHA_OPAQUE: u8 = 255;

/// Pointer alpha when hidden
pub const ALPHA_HIDDEN: u8 = 0;
