//! Geometry primitives shared by the layout and rendering code.
//!
//! These operate on plain coordinates and work the same in model space
//! (cm) and screen space (px). Degenerate segments never divide by
//! zero: the normal of a zero-length segment is `None` and callers
//! treat that as "emit nothing".

use crate::model::Point;

/// Tolerance for treating coordinates or lengths as equal.
pub const GEOM_EPS: f64 = 1e-9;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Midpoint of a segment.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Unit normal of the segment `a -> b`, computed as `(-dy, dx) / len`.
///
/// Returns `None` for a zero-length segment.
pub fn unit_normal(a: Point, b: Point) -> Option<(f64, f64)> {
    let len = distance(a, b);
    if len < GEOM_EPS {
        return None;
    }
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    Some((-dy / len, dx / len))
}

/// Unit direction of the segment `a -> b`.
///
/// Returns `None` for a zero-length segment.
pub fn unit_direction(a: Point, b: Point) -> Option<(f64, f64)> {
    let len = distance(a, b);
    if len < GEOM_EPS {
        return None;
    }
    Some(((b.x - a.x) / len, (b.y - a.y) / len))
}

/// Displaces a point along a direction by a signed distance.
pub fn offset_point(p: Point, direction: (f64, f64), offset: f64) -> Point {
    Point::new(p.x + direction.0 * offset, p.y + direction.1 * offset)
}

/// Angle of the segment `a -> b` in degrees, measured from the
/// positive x axis.
pub fn rotation_angle_deg(a: Point, b: Point) -> f64 {
    (b.y - a.y).atan2(b.x - a.x).to_degrees()
}

/// Normalizes a text rotation into `(-90, 90]` so labels along a
/// segment never render upside down.
pub fn readable_angle_deg(angle_deg: f64) -> f64 {
    let mut angle = angle_deg % 360.0;
    if angle > 180.0 {
        angle -= 360.0;
    } else if angle < -180.0 {
        angle += 360.0;
    }
    if angle > 90.0 {
        angle - 180.0
    } else if angle <= -90.0 {
        angle + 180.0
    } else {
        angle
    }
}
