//! Dimension-line rendering.
//!
//! A dimension line is drawn parallel to its reference segment,
//! displaced along the segment's unit normal by a signed offset, with
//! a short connector tick at each end and a centered value label.
//! The sign of the offset picks the side; callers use that to keep
//! annotations outside the building footprint.

use plankit_core::constants;
use plankit_core::units;

use crate::geometry;
use crate::model::Point;
use crate::scene::{Color, Scene, Stroke, TextAnchor};

/// Gap between the offset line and its label, along the normal.
const LABEL_GAP_PX: f64 = 4.0;

/// Renders one dimension annotation into the scene.
///
/// `a` and `b` are the reference segment's endpoints in screen space;
/// `offset_px` displaces the dimension line along the unit normal
/// `(-dy, dx) / len` of that segment. A zero-length segment produces
/// no output.
pub fn render_dimension(
    scene: &mut Scene,
    a: (f64, f64),
    b: (f64, f64),
    value_cm: f64,
    offset_px: f64,
    color: Color,
) {
    let a = Point::new(a.0, a.1);
    let b = Point::new(b.0, b.1);

    let Some(normal) = geometry::unit_normal(a, b) else {
        return;
    };

    let a_off = geometry::offset_point(a, normal, offset_px);
    let b_off = geometry::offset_point(b, normal, offset_px);

    let stroke = Stroke::solid(color, 1.0);

    // Offset line, then the two connectors back to the reference
    // endpoints, extended by a short tick past the line.
    scene.push_line((a_off.x, a_off.y), (b_off.x, b_off.y), stroke);

    let tick = constants::DIMENSION_TICK_PX * offset_px.signum();
    let a_tick = geometry::offset_point(a_off, normal, tick);
    let b_tick = geometry::offset_point(b_off, normal, tick);
    scene.push_line((a.x, a.y), (a_tick.x, a_tick.y), stroke);
    scene.push_line((b.x, b.y), (b_tick.x, b_tick.y), stroke);

    let mid = geometry::midpoint(a_off, b_off);
    let label_pos = geometry::offset_point(mid, normal, LABEL_GAP_PX * offset_px.signum());
    let angle = geometry::readable_angle_deg(geometry::rotation_angle_deg(a, b));
    scene.push_text_rotated(
        (label_pos.x, label_pos.y),
        units::dimension_label(value_cm),
        constants::LABEL_SIZE_PX,
        color,
        angle,
        TextAnchor::Middle,
    );
}
