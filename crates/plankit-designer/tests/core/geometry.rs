use plankit_designer::geometry::{
    distance, midpoint, offset_point, readable_angle_deg, rotation_angle_deg, unit_direction,
    unit_normal,
};
use plankit_designer::Point;

#[test]
fn test_distance_and_midpoint() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert!((distance(a, b) - 5.0).abs() < 1e-12);
    let mid = midpoint(a, b);
    assert!((mid.x - 1.5).abs() < 1e-12);
    assert!((mid.y - 2.0).abs() < 1e-12);
}

#[test]
fn test_unit_normal_formula() {
    // (-dy, dx) / len for a horizontal segment points along +y
    let normal = unit_normal(Point::new(0.0, 0.0), Point::new(10.0, 0.0)).unwrap();
    assert!((normal.0 - 0.0).abs() < 1e-12);
    assert!((normal.1 - 1.0).abs() < 1e-12);

    // and along -x for a vertical one
    let normal = unit_normal(Point::new(0.0, 0.0), Point::new(0.0, 10.0)).unwrap();
    assert!((normal.0 + 1.0).abs() < 1e-12);
    assert!((normal.1 - 0.0).abs() < 1e-12);
}

#[test]
fn test_zero_length_segment_has_no_normal() {
    let p = Point::new(5.0, 5.0);
    assert!(unit_normal(p, p).is_none());
    assert!(unit_direction(p, p).is_none());
}

#[test]
fn test_offset_point_moves_along_direction() {
    let p = offset_point(Point::new(1.0, 1.0), (0.0, 1.0), 24.0);
    assert!((p.x - 1.0).abs() < 1e-12);
    assert!((p.y - 25.0).abs() < 1e-12);

    let p = offset_point(Point::new(1.0, 1.0), (0.0, 1.0), -24.0);
    assert!((p.y + 23.0).abs() < 1e-12);
}

#[test]
fn test_rotation_angle() {
    assert!((rotation_angle_deg(Point::new(0.0, 0.0), Point::new(10.0, 0.0)) - 0.0).abs() < 1e-9);
    assert!((rotation_angle_deg(Point::new(0.0, 0.0), Point::new(0.0, 10.0)) - 90.0).abs() < 1e-9);
}

#[test]
fn test_readable_angle_never_upside_down() {
    assert!((readable_angle_deg(0.0) - 0.0).abs() < 1e-9);
    assert!((readable_angle_deg(90.0) - 90.0).abs() < 1e-9);
    assert!((readable_angle_deg(180.0) - 0.0).abs() < 1e-9);
    assert!((readable_angle_deg(135.0) + 45.0).abs() < 1e-9);
    assert!((readable_angle_deg(-90.0) - 90.0).abs() < 1e-9);
    assert!((readable_angle_deg(-135.0) - 45.0).abs() < 1e-9);
}
