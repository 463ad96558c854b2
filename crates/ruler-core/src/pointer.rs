//! Measurement pointer overlay
//!
//! The pointer is a horizontal line ending in a filled circle near the right
//! edge of the viewport. The circle carries a read-out of the pointer's
//! distance from the top of the ruler.

use crate::constants::{
    CM_PER_INCH, MARGIN_OFFSET, POINTER_LABEL_SHIFT_X, POINTER_LABEL_SHIFT_Y,
    POINTER_LABEL_SHORT_LEN,
};
use crate::types::UnitSystem;

/// Distance of the pointer from the top, in the labelling unit
pub fn pointer_reading(position_px: f32, dots_per_inch: f32, unit_system: UnitSystem) -> f32 {
    match unit_system {
        UnitSystem::Imperial => position_px / dots_per_inch,
        UnitSystem::Metric => ((position_px as f64 * CM_PER_INCH) / dots_per_inch as f64) as f32,
    }
}

/// Read-out text, rounded to the tenth
pub fn format_reading(reading: f32) -> String {
    format!("{:.1}", reading)
}

/// Resolved positions of the pointer parts for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerGeometry {
    /// Pointer distance from the top (pixels)
    pub y: f32,
    /// Where the horizontal line stops, left of the circle
    pub line_end_x: f32,
    pub circle_x: f32,
    pub circle_radius: f32,
    /// Multiplier applied to the fixed margin and read-out shifts
    pub scale: f32,
}

impl PointerGeometry {
    pub fn new(viewport_width: f32, y: f32, scale: f32) -> Self {
        let circle_radius = viewport_width / 8.0;
        let margin = MARGIN_OFFSET * scale;
        Self {
            y,
            line_end_x: viewport_width - circle_radius * 2.0 - margin,
            circle_x: viewport_width - circle_radius - margin,
            circle_radius,
            scale,
        }
    }

    /// Rotation pivot for the read-out. Longer read-outs move up so they stay
    /// centered in the circle once rotated.
    pub fn label_pivot(&self, label: &str) -> (f32, f32) {
        if label.chars().count() > POINTER_LABEL_SHORT_LEN {
            (self.circle_x, self.y - POINTER_LABEL_SHIFT_Y * self.scale)
        } else {
            (self.circle_x, self.y)
        }
    }

    /// Unrotated text origin for the read-out
    pub fn label_position(&self, label: &str) -> (f32, f32) {
        let (x, y) = self.label_pivot(label);
        (
            x - POINTER_LABEL_SHIFT_X * self.scale,
            y + POINTER_LABEL_SHIFT_Y * self.scale,
        )
    }
}
