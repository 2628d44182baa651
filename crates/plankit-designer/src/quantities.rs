//! Quantity take-off.
//!
//! Derives the geometry-based quantities the pricing submission layer
//! puts on the wire: wall run lengths split by section type, opening
//! counts and areas, column count, footprint measures. Pure
//! recomputation from the current plan; the wire payload itself is the
//! submission layer's concern.

use plankit_core::units::{format_area, format_length, LengthUnit};
use serde::Serialize;

use crate::model::{Plan, WallKind, WindowCount};
use crate::walls::{self, SegmentKind};

/// Geometry-derived quantities for one plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanQuantities {
    /// Perimeter of the building footprint, centimeters.
    pub perimeter_cm: f64,
    /// Footprint area, square centimeters.
    pub footprint_area_cm2: f64,
    /// Total run length of all walls.
    pub wall_length_cm: f64,
    /// Length of solid wall sections (side sections included).
    pub solid_wall_length_cm: f64,
    pub door_count: usize,
    /// Total width of all door openings.
    pub door_width_cm: f64,
    pub window_count: usize,
    /// Total width of all window openings.
    pub window_width_cm: f64,
    /// Total window opening area (width x height per window).
    pub window_area_cm2: f64,
    /// Placed columns; nodes without coordinates are not counted.
    pub column_count: usize,
}

impl PlanQuantities {
    /// One-line human-readable summary in meters, for logs and the
    /// submission preview.
    pub fn summary(&self) -> String {
        let m = LengthUnit::Meters;
        format!(
            "walls {} m (solid {} m), {} doors ({} m), {} windows ({} m2), {} columns",
            format_length(self.wall_length_cm, m),
            format_length(self.solid_wall_length_cm, m),
            self.door_count,
            format_length(self.door_width_cm, m),
            self.window_count,
            format_area(self.window_area_cm2, m),
            self.column_count,
        )
    }
}

/// Computes the take-off for a plan.
pub fn take_off(plan: &Plan) -> PlanQuantities {
    let mut wall_length_cm = 0.0;
    let mut solid_wall_length_cm = 0.0;
    let mut door_count = 0;
    let mut door_width_cm = 0.0;
    let mut window_count = 0;
    let mut window_width_cm = 0.0;
    let mut window_area_cm2 = 0.0;

    for wall in &plan.walls {
        wall_length_cm += wall.length_cm();
        for span in walls::partition(&wall.kind, wall.length_cm()) {
            match span.kind {
                SegmentKind::Wall => solid_wall_length_cm += span.width_cm,
                SegmentKind::Door => {
                    door_count += 1;
                    door_width_cm += span.width_cm;
                }
                SegmentKind::Window => window_width_cm += span.width_cm,
            }
        }
        match &wall.kind {
            WallKind::Window(window) => {
                let per_wall = match window.count {
                    WindowCount::One => 1,
                    WindowCount::Two => 2,
                };
                window_count += per_wall;
                window_area_cm2 +=
                    per_wall as f64 * window.window_width_cm * window.window_height_cm;
            }
            WallKind::DoorWindow(both) => {
                window_count += 1;
                window_area_cm2 += both.window_width_cm * both.window_height_cm;
            }
            WallKind::Solid | WallKind::Door(_) => {}
        }
    }

    PlanQuantities {
        perimeter_cm: 2.0 * (plan.width_cm + plan.length_cm),
        footprint_area_cm2: plan.width_cm * plan.length_cm,
        wall_length_cm,
        solid_wall_length_cm,
        door_count,
        door_width_cm,
        window_count,
        window_width_cm,
        window_area_cm2,
        column_count: plan.nodes.iter().filter(|n| n.position.is_some()).count(),
    }
}
