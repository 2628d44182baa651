//! Plan canvas: composes the full diagram scene.
//!
//! A pure function of the plan, the session configuration, and the
//! externally owned viewport state. Emits draw instructions in this
//! order: primary axes, secondary/tertiary axes, nodes, dimension
//! annotations, walls. Nothing here mutates its inputs.

use plankit_core::constants;
use plankit_core::SessionConfig;

use crate::dimension;
use crate::geometry;
use crate::model::{Cota, CotaEndpoints, CotaKind, Node, Orientation, Plan, Point};
use crate::scene::{Color, Scene, Stroke, TextAnchor};
use crate::viewport::Viewport;
use crate::walls;

fn primary_axis_stroke() -> Stroke {
    Stroke::solid(Color::rgb(40, 40, 40), 1.5)
}

fn secondary_axis_stroke() -> Stroke {
    Stroke::dashed(Color::rgb(100, 100, 100), 1.0, 8.0, 6.0)
}

fn tertiary_axis_stroke() -> Stroke {
    Stroke::dashed(Color::rgb(150, 150, 150), 1.0, 4.0, 4.0)
}

fn node_stroke() -> Stroke {
    Stroke::solid(Color::rgb(40, 40, 40), 1.0)
}

fn node_fill() -> Color {
    Color::rgb(120, 120, 120)
}

fn implicit_cota_color() -> Color {
    Color::rgb(40, 40, 40)
}

const AXIS_LABEL_GAP_PX: f64 = 8.0;

/// A node's resolved, clamped rectangle in model space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeRect {
    /// Minimum corner, centimeters.
    pub origin: Point,
    pub width_cm: f64,
    pub depth_cm: f64,
}

impl NodeRect {
    /// Center of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.width_cm / 2.0,
            self.origin.y + self.depth_cm / 2.0,
        )
    }
}

/// Composes plan scenes for a rendering surface.
#[derive(Debug, Clone)]
pub struct PlanCanvas {
    config: SessionConfig,
}

impl PlanCanvas {
    /// Creates a canvas with the given session configuration.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config: config.validated(),
        }
    }

    /// The session configuration in use.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Renders the complete plan into a scene.
    pub fn render(&self, plan: &Plan, viewport: &Viewport) -> Scene {
        let mut scene = Scene::new();
        self.render_primary_axes(plan, viewport, &mut scene);
        self.render_secondary_axes(plan, viewport, &mut scene);
        self.render_tertiary_axes(plan, viewport, &mut scene);
        let layout = self.node_layout(plan);
        self.render_nodes(&layout, viewport, &mut scene);
        self.render_cotas(plan, &layout, viewport, &mut scene);
        for wall in &plan.walls {
            walls::render_wall(&mut scene, wall, viewport);
        }
        scene
    }

    /// The four sides of the building's bounding rectangle.
    fn render_primary_axes(&self, plan: &Plan, viewport: &Viewport, scene: &mut Scene) {
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(plan.width_cm, 0.0),
            Point::new(plan.width_cm, plan.length_cm),
            Point::new(0.0, plan.length_cm),
        ];
        for i in 0..4 {
            let from = viewport.world_point_to_pixel(&corners[i]);
            let to = viewport.world_point_to_pixel(&corners[(i + 1) % 4]);
            scene.push_line(from, to, primary_axis_stroke());
        }
    }

    /// Dashed interior reference axes, spanning the perpendicular
    /// primary axes at their declared distance from the origin.
    fn render_secondary_axes(&self, plan: &Plan, viewport: &Viewport, scene: &mut Scene) {
        for axis in &plan.secondary_axes {
            let (start, end) = match axis.orientation {
                Orientation::Vertical => (
                    Point::new(axis.distance_cm, 0.0),
                    Point::new(axis.distance_cm, plan.length_cm),
                ),
                Orientation::Horizontal => (
                    Point::new(0.0, axis.distance_cm),
                    Point::new(plan.width_cm, axis.distance_cm),
                ),
            };
            let from = viewport.world_point_to_pixel(&start);
            let to = viewport.world_point_to_pixel(&end);
            scene.push_line(from, to, secondary_axis_stroke());

            let label_pos = match axis.orientation {
                Orientation::Vertical => (from.0, from.1 - AXIS_LABEL_GAP_PX),
                Orientation::Horizontal => (from.0 - AXIS_LABEL_GAP_PX, from.1),
            };
            let anchor = match axis.orientation {
                Orientation::Vertical => TextAnchor::Middle,
                Orientation::Horizontal => TextAnchor::End,
            };
            scene.push_text_rotated(
                label_pos,
                axis.label.clone(),
                constants::LABEL_SIZE_PX,
                secondary_axis_stroke().color,
                0.0,
                anchor,
            );
        }
    }

    /// Free-form reference segments.
    fn render_tertiary_axes(&self, plan: &Plan, viewport: &Viewport, scene: &mut Scene) {
        for axis in &plan.tertiary_axes {
            let from = viewport.world_point_to_pixel(&axis.start);
            let to = viewport.world_point_to_pixel(&axis.end);
            scene.push_line(from, to, tertiary_axis_stroke());

            let from_pt = Point::new(from.0, from.1);
            let to_pt = Point::new(to.0, to.1);
            let mid = geometry::midpoint(from_pt, to_pt);
            let label_pos = match geometry::unit_normal(from_pt, to_pt) {
                Some(normal) => geometry::offset_point(mid, normal, -AXIS_LABEL_GAP_PX),
                None => mid,
            };
            scene.push_text(
                (label_pos.x, label_pos.y),
                axis.label.clone(),
                constants::LABEL_SIZE_PX,
                tertiary_axis_stroke().color,
            );
        }
    }

    /// Resolves every node to its clamped rectangle.
    ///
    /// The result is indexed like `plan.nodes`; entries without
    /// coordinates resolve to `None` and are skipped by the layout.
    pub fn node_layout(&self, plan: &Plan) -> Vec<Option<NodeRect>> {
        plan.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| match node.position {
                Some(position) => Some(self.place_node(plan, node, position)),
                None => {
                    tracing::warn!("Skipping node {} without coordinates", index);
                    None
                }
            })
            .collect()
    }

    /// Resolves a node's footprint and clamps its rectangle into the
    /// building's bounding rectangle.
    fn place_node(&self, plan: &Plan, node: &Node, position: Point) -> NodeRect {
        let (width_cm, depth_cm) = if plan.uses_floor_profiles() {
            let profile = plan.profile_for_level(plan.selected_level);
            (profile.column_width_cm, profile.column_depth_cm)
        } else {
            // The configured footprint is taller than wide; the
            // orientation flag points the long side.
            match node.orientation {
                Orientation::Vertical => (self.config.column_width_cm, self.config.column_depth_cm),
                Orientation::Horizontal => {
                    (self.config.column_depth_cm, self.config.column_width_cm)
                }
            }
        };

        let x = position.x.min(plan.width_cm - width_cm).max(0.0);
        let y = position.y.min(plan.length_cm - depth_cm).max(0.0);
        NodeRect {
            origin: Point::new(x, y),
            width_cm,
            depth_cm,
        }
    }

    /// Column rectangles with sequential "N1", "N2", ... labels.
    fn render_nodes(&self, layout: &[Option<NodeRect>], viewport: &Viewport, scene: &mut Scene) {
        let mut label = 0usize;
        for rect in layout.iter().flatten() {
            label += 1;
            let origin = viewport.world_point_to_pixel(&rect.origin);
            scene.push_rect(
                origin,
                rect.width_cm * viewport.zoom(),
                rect.depth_cm * viewport.zoom(),
                node_stroke(),
                Some(node_fill()),
            );
            let center = viewport.world_point_to_pixel(&rect.center());
            scene.push_text(
                center,
                format!("N{}", label),
                constants::NODE_LABEL_SIZE_PX,
                Color::WHITE,
            );
        }
    }

    /// The two implicit overall dimensions plus every user cota.
    fn render_cotas(
        &self,
        plan: &Plan,
        layout: &[Option<NodeRect>],
        viewport: &Viewport,
        scene: &mut Scene,
    ) {
        let offset = self.config.dimension_offset_px;

        // Overall width along the top edge. The segment's unit normal
        // points down-screen into the footprint, so a negative offset
        // keeps the annotation outside.
        let origin = viewport.world_to_pixel(0.0, 0.0);
        let top_right = viewport.world_to_pixel(plan.width_cm, 0.0);
        dimension::render_dimension(
            scene,
            origin,
            top_right,
            plan.width_cm,
            -offset,
            implicit_cota_color(),
        );

        // Overall length along the left edge; here the positive normal
        // already points away from the footprint.
        let bottom_left = viewport.world_to_pixel(0.0, plan.length_cm);
        dimension::render_dimension(
            scene,
            origin,
            bottom_left,
            plan.length_cm,
            offset,
            implicit_cota_color(),
        );

        for (index, cota) in plan.cotas.iter().enumerate() {
            let Some((a, b)) = self.resolve_cota_endpoints(cota, layout) else {
                tracing::warn!("Skipping cota {} with unresolved endpoints", index);
                continue;
            };
            let signed_offset = match cota.kind {
                CotaKind::Constrained => offset,
                CotaKind::Free => -offset,
            };
            dimension::render_dimension(
                scene,
                viewport.world_point_to_pixel(&a),
                viewport.world_point_to_pixel(&b),
                cota.value_cm,
                signed_offset,
                cota.color,
            );
        }
    }

    /// Node references resolve to the current clamped column centers;
    /// references to missing or unplaced nodes resolve to `None`.
    fn resolve_cota_endpoints(
        &self,
        cota: &Cota,
        layout: &[Option<NodeRect>],
    ) -> Option<(Point, Point)> {
        match cota.endpoints {
            CotaEndpoints::Points { a, b } => Some((a, b)),
            CotaEndpoints::NodeRefs { a, b } => {
                let rect_a = layout.get(a).copied().flatten()?;
                let rect_b = layout.get(b).copied().flatten()?;
                Some((rect_a.center(), rect_b.center()))
            }
        }
    }
}

impl Default for PlanCanvas {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
