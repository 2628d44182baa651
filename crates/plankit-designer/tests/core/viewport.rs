use plankit_core::constants;
use plankit_designer::viewport::Viewport;
use plankit_designer::Point;

#[test]
fn test_viewport_creation() {
    let vp = Viewport::new(1200.0, 800.0);
    assert_eq!(vp.zoom(), constants::DEFAULT_SCALE_PX_PER_CM);
    assert_eq!(vp.pan_x(), constants::CANVAS_MARGIN_PX);
    assert_eq!(vp.pan_y(), constants::CANVAS_MARGIN_PX);
}

#[test]
fn test_model_origin_maps_to_margin() {
    let vp = Viewport::new(1200.0, 800.0);
    let (px, py) = vp.world_to_pixel(0.0, 0.0);
    assert!((px - constants::CANVAS_MARGIN_PX).abs() < 0.01);
    assert!((py - constants::CANVAS_MARGIN_PX).abs() < 0.01);
}

#[test]
fn test_model_y_grows_down_screen() {
    let vp = Viewport::new(1200.0, 800.0);
    let (_, py0) = vp.world_to_pixel(0.0, 0.0);
    let (_, py100) = vp.world_to_pixel(0.0, 100.0);
    assert!(py100 > py0);
}

#[test]
fn test_pixel_to_world_with_zoom() {
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.set_pan(0.0, 0.0);
    vp.set_zoom(2.0);
    // At 2 px/cm, 200 pixels = 100 cm
    let world = vp.pixel_to_world(200.0, 400.0);
    assert!((world.x - 100.0).abs() < 0.01);
    assert!((world.y - 200.0).abs() < 0.01);
}

#[test]
fn test_roundtrip_conversion() {
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.set_zoom(2.5);
    vp.set_pan(75.0, 125.0);

    let original = Point::new(123.45, 456.78);
    let (px, py) = vp.world_to_pixel(original.x, original.y);
    let roundtrip = vp.pixel_to_world(px, py);

    assert!((roundtrip.x - original.x).abs() < 0.01);
    assert!((roundtrip.y - original.y).abs() < 0.01);
}

#[test]
fn test_zoom_constraints() {
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.set_zoom(0.05); // Too small
    assert!(vp.zoom() > 0.05);

    vp.set_zoom(60.0); // Too large
    assert!(vp.zoom() < 60.0);
}

#[test]
fn test_zoom_in_out() {
    let mut vp = Viewport::new(1200.0, 800.0);
    let initial = vp.zoom();
    vp.zoom_in();
    assert!(vp.zoom() > initial);

    vp.zoom_out();
    assert!((vp.zoom() - initial).abs() < 0.01);
}

#[test]
fn test_center_on_point() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_zoom(1.0);
    vp.center_on(100.0, 200.0);

    let world = vp.pixel_to_world(400.0, 300.0);
    assert!((world.x - 100.0).abs() < 0.01);
    assert!((world.y - 200.0).abs() < 0.01);
}

#[test]
fn test_fit_to_bounds_zoom() {
    let mut vp = Viewport::new(1200.0, 800.0);
    let padding = constants::VIEW_PADDING;
    vp.fit_to_bounds(0.0, 0.0, 100.0, 100.0, padding);

    let padding_factor = 1.0 - (padding * 2.0);
    let expected_zoom_x = (vp.canvas_width() * padding_factor) / 100.0;
    let expected_zoom_y = (vp.canvas_height() * padding_factor) / 100.0;
    let expected_zoom = expected_zoom_x
        .min(expected_zoom_y)
        .clamp(constants::MIN_ZOOM, constants::MAX_ZOOM);

    assert!(
        (vp.zoom() - expected_zoom).abs() < 1e-10,
        "zoom {} expected {}",
        vp.zoom(),
        expected_zoom
    );
}

#[test]
fn test_fit_to_bounds_centers_content() {
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.fit_to_bounds(0.0, 0.0, 100.0, 100.0, constants::VIEW_PADDING);

    let (px, py) = vp.world_to_pixel(50.0, 50.0);
    assert!((px - 600.0).abs() < 0.01);
    assert!((py - 400.0).abs() < 0.01);
}

#[test]
fn test_fit_to_degenerate_bounds_is_ignored() {
    let mut vp = Viewport::new(1200.0, 800.0);
    let before = vp.zoom();
    vp.fit_to_bounds(10.0, 10.0, 10.0, 50.0, constants::VIEW_PADDING);
    assert_eq!(vp.zoom(), before);
}

#[test]
fn test_zoom_to_point_keeps_screen_position() {
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.set_zoom(2.0);
    vp.set_pan(30.0, 60.0);

    let anchor = Point::new(150.0, 220.0);
    let before = vp.world_to_pixel(anchor.x, anchor.y);
    vp.zoom_to_point(&anchor, 3.0);
    let after = vp.world_to_pixel(anchor.x, anchor.y);

    assert_eq!(vp.zoom(), 3.0);
    assert!((before.0 - after.0).abs() < 1e-9);
    assert!((before.1 - after.1).abs() < 1e-9);
}

#[test]
fn test_zoom_to_point_rejects_out_of_bounds() {
    let mut vp = Viewport::new(1200.0, 800.0);
    let anchor = Point::new(10.0, 10.0);
    vp.zoom_to_point(&anchor, 1000.0);
    assert_eq!(vp.zoom(), constants::DEFAULT_SCALE_PX_PER_CM);
}

#[test]
fn test_zoom_in_at_and_out_at_keep_the_anchor() {
    let mut vp = Viewport::new(1200.0, 800.0);
    let anchor = Point::new(200.0, 150.0);

    let before = vp.world_to_pixel(anchor.x, anchor.y);
    vp.zoom_in_at(&anchor);
    assert!(vp.zoom() > constants::DEFAULT_SCALE_PX_PER_CM);
    let after = vp.world_to_pixel(anchor.x, anchor.y);
    assert!((before.0 - after.0).abs() < 1e-9);
    assert!((before.1 - after.1).abs() < 1e-9);

    vp.zoom_out_at(&anchor);
    let after = vp.world_to_pixel(anchor.x, anchor.y);
    assert!((before.0 - after.0).abs() < 1e-9);
    assert!((before.1 - after.1).abs() < 1e-9);
}

#[test]
fn test_set_canvas_size() {
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.set_canvas_size(640.0, 480.0);
    assert_eq!(vp.canvas_width(), 640.0);
    assert_eq!(vp.canvas_height(), 480.0);
}

#[test]
fn test_center_on_point_matches_center_on() {
    let mut a = Viewport::new(800.0, 600.0);
    let mut b = Viewport::new(800.0, 600.0);
    a.center_on(42.0, 24.0);
    b.center_on_point(&Point::new(42.0, 24.0));
    assert_eq!(a.pan_x(), b.pan_x());
    assert_eq!(a.pan_y(), b.pan_y());
}

#[test]
fn test_reset() {
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.set_zoom(2.5);
    vp.set_pan(100.0, 200.0);
    vp.reset();

    assert_eq!(vp.zoom(), constants::DEFAULT_SCALE_PX_PER_CM);
    assert_eq!(vp.pan_x(), constants::CANVAS_MARGIN_PX);
    assert_eq!(vp.pan_y(), constants::CANVAS_MARGIN_PX);
}
