//! Frame rendering
//!
//! Turns viewport metrics and ruler state into an ordered list of drawing
//! primitives. The host paints them in order; nothing here touches a
//! toolkit.

use crate::color::Argb;
use crate::constants::{
    ALPHA_HIDDEN, ALPHA_OPAQUE, DEFAULT_STROKE_WIDTH, LABEL_TEXT_SIZE, TICK_LABEL_OFFSET,
};
use crate::pointer::{PointerGeometry, format_reading, pointer_reading};
use crate::ticks::ticks;
use crate::types::{Rank, RulerState, Tick, ViewportMetrics};

/// A point in viewport pixels, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rotate this point clockwise (screen coordinates) about `pivot`
    pub fn rotated_about(self, pivot: Point, degrees: f32) -> Point {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Point::new(pivot.x + dx * cos - dy * sin, pivot.y + dx * sin + dy * cos)
    }
}

/// One drawing instruction
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Primitive {
    Line {
        from: Point,
        to: Point,
        width: f32,
        color: Argb,
    },
    /// Filled circle
    Circle {
        center: Point,
        radius: f32,
        color: Argb,
    },
    /// Text whose baseline starts at `position`, rotated by `rotation_degrees`
    /// clockwise about `pivot`
    Text {
        text: String,
        position: Point,
        size: f32,
        rotation_degrees: f32,
        pivot: Point,
        color: Argb,
        bold: bool,
    },
}

/// Everything drawn for one redraw
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub width_px: f32,
    pub height_px: f32,
    pub primitives: Vec<Primitive>,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Text of every label in draw order
    pub fn labels(&self) -> Vec<&str> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Serialize the frame as pretty JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            crate::RulerError::Serialize(format!("Failed to serialize frame: {}", e))
        })
    }
}

/// Paint constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub stroke_width: f32,
    pub label_text_size: f32,
    pub tick_label_offset: f32,
    /// Multiplier for the pointer margin and read-out shifts
    pub pointer_scale: f32,
    /// Colour of ticks that are not whole units, and of tick labels
    pub ink: Argb,
    /// Colour of the pointer read-out
    pub pointer_label: Argb,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            label_text_size: LABEL_TEXT_SIZE,
            tick_label_offset: TICK_LABEL_OFFSET,
            pointer_scale: 1.0,
            ink: Argb::BLACK,
            pointer_label: Argb::WHITE,
        }
    }
}

impl RenderStyle {
    /// Multiply every length by `factor`
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            stroke_width: self.stroke_width * factor,
            label_text_size: self.label_text_size * factor,
            tick_label_offset: self.tick_label_offset * factor,
            pointer_scale: self.pointer_scale * factor,
            ..self
        }
    }
}

/// Values that may be mid-transition when a frame is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub accent_color: Argb,
    pub pointer_alpha: u8,
}

impl Appearance {
    /// Appearance of a state with no transition running
    pub fn from_state(state: &RulerState) -> Self {
        Self {
            accent_color: state.accent_color,
            pointer_alpha: if state.pointer_visible {
                ALPHA_OPAQUE
            } else {
                ALPHA_HIDDEN
            },
        }
    }
}

/// Render one frame.
///
/// Without metrics the frame is skipped and comes back empty; the host will
/// normally have metrics again on the next redraw.
pub fn render_frame(
    metrics: Option<&ViewportMetrics>,
    state: &RulerState,
    appearance: &Appearance,
    style: &RenderStyle,
) -> Frame {
    let Some(metrics) = metrics else {
        log::debug!("Viewport metrics unavailable, skipping measurements");
        return Frame::default();
    };

    let mut frame = Frame {
        width_px: metrics.width_px,
        height_px: metrics.height_px,
        primitives: Vec::new(),
    };

    for tick in ticks(metrics, state.unit_system) {
        push_tick(&mut frame.primitives, &tick, appearance.accent_color, style);
    }

    if appearance.pointer_alpha > 0 {
        push_pointer(&mut frame.primitives, metrics, state, appearance, style);
    }

    frame
}

/// Render a state at rest, with no transition running
pub fn render_state(
    metrics: Option<&ViewportMetrics>,
    state: &RulerState,
    style: &RenderStyle,
) -> Frame {
    render_frame(metrics, state, &Appearance::from_state(state), style)
}

fn push_tick(out: &mut Vec<Primitive>, tick: &Tick, accent: Argb, style: &RenderStyle) {
    let color = if tick.rank == Rank::Whole {
        accent
    } else {
        style.ink
    };

    out.push(Primitive::Line {
        from: Point::new(0.0, tick.offset_px),
        to: Point::new(tick.line_length_px, tick.offset_px),
        width: style.stroke_width,
        color,
    });

    if let Some(label) = &tick.label {
        let anchor = Point::new(
            tick.line_length_px - style.tick_label_offset,
            tick.offset_px + style.tick_label_offset,
        );
        out.push(Primitive::Text {
            text: label.clone(),
            position: anchor,
            size: style.label_text_size,
            rotation_degrees: 90.0,
            pivot: anchor,
            color: style.ink,
            bold: true,
        });
    }
}

fn push_pointer(
    out: &mut Vec<Primitive>,
    metrics: &ViewportMetrics,
    state: &RulerState,
    appearance: &Appearance,
    style: &RenderStyle,
) {
    let geometry = PointerGeometry::new(
        metrics.width_px,
        state.pointer_position_px,
        style.pointer_scale,
    );
    let color = appearance.accent_color.with_alpha(appearance.pointer_alpha);

    out.push(Primitive::Line {
        from: Point::new(0.0, geometry.y),
        to: Point::new(geometry.line_end_x, geometry.y),
        width: style.stroke_width,
        color,
    });
    out.push(Primitive::Circle {
        center: Point::new(geometry.circle_x, geometry.y),
        radius: geometry.circle_radius,
        color,
    });

    let reading = pointer_reading(
        state.pointer_position_px,
        metrics.dots_per_inch,
        state.unit_system,
    );
    let label = format_reading(reading);
    let (pivot_x, pivot_y) = geometry.label_pivot(&label);
    let (x, y) = geometry.label_position(&label);

    out.push(Primitive::Text {
        text: label,
        position: Point::new(x, y),
        size: style.label_text_size,
        rotation_degrees: 90.0,
        pivot: Point::new(pivot_x, pivot_y),
        color: style.pointer_label.with_alpha(appearance.pointer_alpha),
        bold: true,
    });
}
