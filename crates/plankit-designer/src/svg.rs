//! SVG rendering surface.
//!
//! The reference implementation of the host's "draw line, draw
//! rectangle, draw text" contract: serializes a scene into a
//! standalone SVG document string. Used for previews and as the
//! surface under test; production hosts may supply their own.

use crate::scene::{Color, Scene, SceneItem, Stroke, TextAnchor};

fn color_hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut attrs = format!(
        r#"stroke="{}" stroke-width="{}""#,
        color_hex(stroke.color),
        stroke.width_px
    );
    if stroke.color.a < 255 {
        attrs.push_str(&format!(
            r#" stroke-opacity="{:.3}""#,
            stroke.color.a as f64 / 255.0
        ));
    }
    if let Some(dash) = stroke.dash {
        attrs.push_str(&format!(
            r#" stroke-dasharray="{} {}""#,
            dash.on_px, dash.off_px
        ));
    }
    attrs
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Serializes a scene into an SVG document of the given pixel size.
pub fn scene_to_svg(scene: &Scene, width_px: f64, height_px: f64) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width_px,
        h = height_px
    );
    svg.push('\n');

    for item in scene.items() {
        match item {
            SceneItem::Line(line) => {
                svg.push_str(&format!(
                    r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {} />"#,
                    line.from.0,
                    line.from.1,
                    line.to.0,
                    line.to.1,
                    stroke_attrs(&line.stroke)
                ));
                svg.push('\n');
            }
            SceneItem::Rect(rect) => {
                let fill = match rect.fill {
                    Some(color) => color_hex(color),
                    None => "none".to_string(),
                };
                svg.push_str(&format!(
                    r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" {} />"#,
                    rect.origin.0,
                    rect.origin.1,
                    rect.width_px,
                    rect.height_px,
                    fill,
                    stroke_attrs(&rect.stroke)
                ));
                svg.push('\n');
            }
            SceneItem::Text(text) => {
                let anchor = match text.anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                let mut transform = String::new();
                if text.rotation_deg.abs() > 1e-6 {
                    transform = format!(
                        r#" transform="rotate({:.2} {:.2} {:.2})""#,
                        text.rotation_deg, text.position.0, text.position.1
                    );
                }
                svg.push_str(&format!(
                    r#"  <text x="{:.2}" y="{:.2}" font-size="{}" fill="{}" text-anchor="{}"{}>{}</text>"#,
                    text.position.0,
                    text.position.1,
                    text.size_px,
                    color_hex(text.color),
                    anchor,
                    transform,
                    escape_text(&text.content)
                ));
                svg.push('\n');
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}
