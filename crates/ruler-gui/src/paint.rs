//! Paints `ruler_core` frames with an egui painter

use eframe::egui::{self, Color32, FontId, Pos2, Stroke, epaint::TextShape};
use ruler_core::{Argb, Frame, Point, Primitive};

pub fn color32(color: Argb) -> Color32 {
    let [r, g, b, a] = color.to_rgba();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

pub fn argb(color: Color32) -> Argb {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Argb::from_channels(a, r, g, b)
}

/// Extra horizontal smear for bold text, as a fraction of the text size
const FAKE_BOLD_FRACTION: f32 = 1.0 / 24.0;

/// Shifts along the text direction at which a label is painted. egui ships no
/// bold face, so bold labels are painted twice with the second copy nudged
/// right.
fn text_passes(size: f32, bold: bool) -> Vec<f32> {
    if bold {
        vec![0.0, size * FAKE_BOLD_FRACTION]
    } else {
        vec![0.0]
    }
}

fn to_screen(origin: Pos2, point: Point) -> Pos2 {
    Pos2::new(origin.x + point.x, origin.y + point.y)
}

/// Paint every primitive in order, with frame coordinates relative to `origin`
pub fn paint_frame(painter: &egui::Painter, origin: Pos2, frame: &Frame) {
    for primitive in &frame.primitives {
        match primitive {
            Primitive::Line {
                from,
                to,
                width,
                color,
            } => {
                painter.line_segment(
                    [to_screen(origin, *from), to_screen(origin, *to)],
                    Stroke::new(*width, color32(*color)),
                );
            }
            Primitive::Circle {
                center,
                radius,
                color,
            } => {
                painter.circle_filled(to_screen(origin, *center), *radius, color32(*color));
            }
            Primitive::Text {
                text,
                position,
                size,
                rotation_degrees,
                pivot,
                color,
                bold,
            } => {
                let color = color32(*color);
                let galley = painter.layout_no_wrap(text.clone(), FontId::proportional(*size), color);

                // Frame positions are baselines; egui places the galley by its
                // top-left corner and rotates about that corner
                for shift in text_passes(*size, *bold) {
                    let top_left = Point::new(position.x + shift, position.y - galley.size().y)
                        .rotated_about(*pivot, *rotation_degrees);

                    painter.add(
                        TextShape::new(to_screen(origin, top_left), galley.clone(), color)
                            .with_angle(rotation_degrees.to_radians()),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion_round_trip() {
        for color in [Argb::DEFAULT_ACCENT, Argb::BLACK, Argb(0xFF12_3456)] {
            assert_eq!(argb(color32(color)), color);
        }
    }

    #[test]
    fn test_bold_text_is_painted_twice() {
        assert_eq!(text_passes(48.0, false), vec![0.0]);
        assert_eq!(text_passes(48.0, true), vec![0.0, 2.0]);
    }
}
