//! SVG export for rendered frames
//!
//! Writes a standalone document, one element per primitive, in draw order.

use crate::color::Argb;
use crate::render::{Frame, Primitive};
use std::fmt::Write;

/// Font used for labels
const FONT_FAMILY: &str = "sans-serif";

/// Serialize a frame as an SVG document
pub fn frame_to_svg(frame: &Frame) -> String {
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = frame.width_px,
        h = frame.height_px
    );
    let _ = writeln!(
        svg,
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        Argb::WHITE.to_rgb_hex()
    );

    for primitive in &frame.primitives {
        svg.push_str(&primitive_to_svg(primitive));
    }

    svg.push_str("</svg>\n");
    svg
}

fn primitive_to_svg(primitive: &Primitive) -> String {
    match primitive {
        Primitive::Line {
            from,
            to,
            width,
            color,
        } => format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-opacity=\"{}\" stroke-width=\"{}\"/>\n",
            from.x,
            from.y,
            to.x,
            to.y,
            color.to_rgb_hex(),
            opacity(*color),
            width
        ),
        Primitive::Circle {
            center,
            radius,
            color,
        } => format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" fill-opacity=\"{}\"/>\n",
            center.x,
            center.y,
            radius,
            color.to_rgb_hex(),
            opacity(*color)
        ),
        Primitive::Text {
            text,
            position,
            size,
            rotation_degrees,
            pivot,
            color,
            bold,
        } => format!(
            "<text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\"{} fill=\"{}\" fill-opacity=\"{}\" transform=\"rotate({} {} {})\">{}</text>\n",
            position.x,
            position.y,
            FONT_FAMILY,
            size,
            if *bold { " font-weight=\"bold\"" } else { "" },
            color.to_rgb_hex(),
            opacity(*color),
            rotation_degrees,
            pivot.x,
            pivot.y,
            escape(text)
        ),
    }
}

fn opacity(color: Argb) -> f32 {
    // Two decimals are plenty for an 8-bit channel
    (color.alpha() as f32 / 255.0 * 100.0).round() / 100.0
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Point;

    #[test]
    fn test_empty_frame() {
        let svg = frame_to_svg(&Frame::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(!svg.contains("<line"));
    }

    #[test]
    fn test_line_and_text() {
        let frame = Frame {
            width_px: 100.0,
            height_px: 50.0,
            primitives: vec![
                Primitive::Line {
                    from: Point::new(0.0, 5.0),
                    to: Point::new(50.0, 5.0),
                    width: 10.0,
                    color: Argb(0x80FF_0000),
                },
                Primitive::Text {
                    text: "1".into(),
                    position: Point::new(0.0, 55.0),
                    size: 56.0,
                    rotation_degrees: 90.0,
                    pivot: Point::new(0.0, 55.0),
                    color: Argb::BLACK,
                    bold: true,
                },
            ],
        };

        let svg = frame_to_svg(&frame);
        assert!(svg.contains(
            r##"<line x1="0" y1="5" x2="50" y2="5" stroke="#ff0000" stroke-opacity="0.5" stroke-width="10"/>"##
        ));
        assert!(svg.contains(r#"transform="rotate(90 0 55)">1</text>"#));
        assert!(svg.contains(r#"font-weight="bold""#));
    }
}
