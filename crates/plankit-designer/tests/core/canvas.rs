use plankit_core::constants;
use plankit_core::SessionConfig;
use plankit_designer::viewport::Viewport;
use plankit_designer::{
    Cota, CotaEndpoints, CotaKind, FloorProfile, Node, Orientation, Plan, PlanCanvas, Point,
    SecondaryAxis, Wall,
};

fn canvas() -> PlanCanvas {
    PlanCanvas::new(SessionConfig::default())
}

fn viewport() -> Viewport {
    // Margin-free viewport keeps expected pixel values readable.
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.set_pan(0.0, 0.0);
    vp
}

#[test]
fn test_primary_axes_form_the_bounding_rectangle() {
    let plan = Plan::new(1000.0, 800.0);
    let scene = canvas().render(&plan, &viewport());
    assert!(scene.len() > 4); // axes plus the implicit dimensions

    let sides: Vec<_> = scene.lines().take(4).collect();
    assert_eq!(sides.len(), 4);
    assert_eq!(sides[0].from, (0.0, 0.0));
    assert_eq!(sides[0].to, (1000.0, 0.0));
    assert_eq!(sides[1].to, (1000.0, 800.0));
    assert_eq!(sides[2].to, (0.0, 800.0));
    assert_eq!(sides[3].to, (0.0, 0.0));
    assert!(sides.iter().all(|l| l.stroke.dash.is_none()));
}

#[test]
fn test_secondary_axes_are_dashed_and_span_the_footprint() {
    let mut plan = Plan::new(1000.0, 800.0);
    plan.secondary_axes.push(SecondaryAxis {
        label: "B".to_string(),
        orientation: Orientation::Vertical,
        distance_cm: 300.0,
    });
    plan.secondary_axes.push(SecondaryAxis {
        label: "2".to_string(),
        orientation: Orientation::Horizontal,
        distance_cm: 250.0,
    });
    let scene = canvas().render(&plan, &viewport());

    let dashed: Vec<_> = scene.lines().filter(|l| l.stroke.dash.is_some()).collect();
    assert_eq!(dashed.len(), 2);
    assert_eq!(dashed[0].from, (300.0, 0.0));
    assert_eq!(dashed[0].to, (300.0, 800.0));
    assert_eq!(dashed[1].from, (0.0, 250.0));
    assert_eq!(dashed[1].to, (1000.0, 250.0));

    let labels: Vec<_> = scene.texts().map(|t| t.content.as_str()).collect();
    assert!(labels.contains(&"B"));
    assert!(labels.contains(&"2"));
}

#[test]
fn test_node_rectangle_is_clamped_inside_the_footprint() {
    let mut plan = Plan::new(1000.0, 800.0);
    // Horizontal default footprint is 60 x 30; this one would overhang
    // the far corner.
    plan.nodes.push(Node::at(990.0, 790.0));
    let layout = canvas().node_layout(&plan);

    let rect = layout[0].unwrap();
    assert_eq!(rect.width_cm, constants::DEFAULT_COLUMN_DEPTH_CM);
    assert_eq!(rect.depth_cm, constants::DEFAULT_COLUMN_WIDTH_CM);
    assert_eq!(rect.origin.x + rect.width_cm, 1000.0);
    assert_eq!(rect.origin.y + rect.depth_cm, 800.0);
}

#[test]
fn test_node_rectangle_clamps_at_the_origin() {
    let mut plan = Plan::new(1000.0, 800.0);
    plan.nodes.push(Node::at(-50.0, -10.0));
    let layout = canvas().node_layout(&plan);

    let rect = layout[0].unwrap();
    assert_eq!(rect.origin.x, 0.0);
    assert_eq!(rect.origin.y, 0.0);
}

#[test]
fn test_node_orientation_swaps_the_footprint() {
    let mut plan = Plan::new(1000.0, 800.0);
    plan.nodes.push(Node {
        position: Some(Point::new(100.0, 100.0)),
        orientation: Orientation::Vertical,
    });
    let layout = canvas().node_layout(&plan);

    let rect = layout[0].unwrap();
    assert_eq!(rect.width_cm, constants::DEFAULT_COLUMN_WIDTH_CM);
    assert_eq!(rect.depth_cm, constants::DEFAULT_COLUMN_DEPTH_CM);
}

#[test]
fn test_floor_profile_overrides_node_orientation() {
    let mut plan = Plan::new(1000.0, 800.0);
    plan.floors = vec![
        FloorProfile {
            level: 0,
            column_width_cm: 40.0,
            column_depth_cm: 40.0,
        },
        FloorProfile {
            level: 1,
            column_width_cm: 25.0,
            column_depth_cm: 50.0,
        },
    ];
    plan.selected_level = 1;
    plan.nodes.push(Node::at(100.0, 100.0));
    let layout = canvas().node_layout(&plan);

    let rect = layout[0].unwrap();
    assert_eq!(rect.width_cm, 25.0);
    assert_eq!(rect.depth_cm, 50.0);
}

#[test]
#[should_panic(expected = "no column profile for floor level")]
fn test_unknown_selected_level_is_a_caller_bug() {
    let mut plan = Plan::new(1000.0, 800.0);
    plan.floors = vec![
        FloorProfile {
            level: 0,
            column_width_cm: 40.0,
            column_depth_cm: 40.0,
        },
        FloorProfile {
            level: 1,
            column_width_cm: 25.0,
            column_depth_cm: 50.0,
        },
    ];
    plan.selected_level = 7;
    plan.nodes.push(Node::at(100.0, 100.0));
    canvas().node_layout(&plan);
}

#[test]
fn test_unplaced_nodes_are_filtered_and_labels_stay_sequential() {
    let mut plan = Plan::new(1000.0, 800.0);
    plan.nodes.push(Node {
        position: None,
        orientation: Orientation::Horizontal,
    });
    plan.nodes.push(Node::at(100.0, 100.0));
    plan.nodes.push(Node::at(400.0, 200.0));

    let scene = canvas().render(&plan, &viewport());
    assert_eq!(scene.rects().count(), 2);

    let labels: Vec<_> = scene.texts().map(|t| t.content.as_str()).collect();
    assert!(labels.contains(&"N1"));
    assert!(labels.contains(&"N2"));
    assert!(!labels.contains(&"N3"));
}

#[test]
fn test_implicit_overall_dimensions_are_rendered() {
    let plan = Plan::new(1000.0, 800.0);
    let scene = canvas().render(&plan, &viewport());

    let labels: Vec<_> = scene.texts().map(|t| t.content.as_str()).collect();
    assert!(labels.contains(&"1000 cm"));
    assert!(labels.contains(&"800 cm"));
}

#[test]
fn test_implicit_width_dimension_sits_outside_the_footprint() {
    let plan = Plan::new(1000.0, 800.0);
    let scene = canvas().render(&plan, &viewport());

    // The offset line for the overall width is the first line after
    // the four primary axes; outside means negative screen y here.
    let width_line = scene.lines().nth(4).unwrap();
    assert!(width_line.from.1 < 0.0);
    assert!((width_line.from.1 - width_line.to.1).abs() < 1e-9);
}

#[test]
fn test_user_cota_resolves_node_references() {
    let mut plan = Plan::new(1000.0, 800.0);
    plan.nodes.push(Node::at(100.0, 100.0));
    plan.nodes.push(Node::at(500.0, 100.0));
    plan.cotas.push(Cota {
        endpoints: CotaEndpoints::NodeRefs { a: 0, b: 1 },
        value_cm: 400.0,
        kind: CotaKind::Constrained,
        color: plankit_designer::Color::rgb(200, 40, 40),
    });

    let scene = canvas().render(&plan, &viewport());
    let labels: Vec<_> = scene.texts().map(|t| t.content.as_str()).collect();
    assert!(labels.contains(&"400 cm"));
}

#[test]
fn test_cota_with_dangling_reference_is_skipped() {
    let mut plan = Plan::new(1000.0, 800.0);
    plan.nodes.push(Node::at(100.0, 100.0));
    plan.cotas.push(Cota {
        endpoints: CotaEndpoints::NodeRefs { a: 0, b: 9 },
        value_cm: 123.0,
        kind: CotaKind::Free,
        color: plankit_designer::Color::BLACK,
    });

    let scene = canvas().render(&plan, &viewport());
    let labels: Vec<_> = scene.texts().map(|t| t.content.as_str()).collect();
    assert!(!labels.contains(&"123 cm"));
}

#[test]
fn test_walls_are_rendered_with_segment_labels() {
    let mut plan = Plan::new(1000.0, 800.0);
    plan.walls.push(Wall::solid(
        Point::new(0.0, 0.0),
        Point::new(1000.0, 0.0),
    ));
    let scene = canvas().render(&plan, &viewport());

    let labels: Vec<_> = scene.texts().map(|t| t.content.as_str()).collect();
    // Overall width and the solid wall share the same length label.
    assert!(labels.iter().filter(|l| **l == "1000 cm").count() >= 2);
}

#[test]
fn test_render_does_not_mutate_the_plan() {
    let mut plan = Plan::new(1000.0, 800.0);
    plan.nodes.push(Node::at(990.0, 790.0));
    let before = plan.clone();
    let _ = canvas().render(&plan, &viewport());
    assert_eq!(plan, before);
}
