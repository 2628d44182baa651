//! Wall partitioning and rendering.
//!
//! A non-solid wall carries an ordered list of named widths (side
//! sections and openings). Partitioning walks the wall's length from
//! its start endpoint and assigns each named width a contiguous span.
//! Rendering draws whatever partition it is given, valid or not, so a
//! live preview can show an over-budget configuration; validity is
//! checked separately before saving.

use plankit_core::constants;
use plankit_core::error::PartitionError;
use plankit_core::units;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::geometry::{self, GEOM_EPS};
use crate::model::{Point, Wall, WallEnd, WallKind, WindowCount};
use crate::scene::{Color, Scene, Stroke, TextAnchor};
use crate::viewport::Viewport;

/// What a wall span is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Solid wall section.
    Wall,
    /// Door opening.
    Door,
    /// Window opening.
    Window,
}

/// One contiguous span of a partitioned wall.
#[derive(Debug, Clone, PartialEq)]
pub struct WallSegment {
    /// Field name of the width this span was assigned from.
    pub name: &'static str,
    pub kind: SegmentKind,
    /// Distance from the wall's start endpoint, centimeters.
    pub offset_cm: f64,
    pub width_cm: f64,
}

/// Ordered spans of one wall. At most five in practice.
pub type Partition = SmallVec<[WallSegment; 5]>;

/// The ordered named widths of a wall subtype. Side sections are
/// optional, openings mandatory.
fn named_widths(kind: &WallKind) -> SmallVec<[(&'static str, SegmentKind, f64); 5]> {
    let mut widths = SmallVec::new();
    match kind {
        WallKind::Solid => {}
        WallKind::Door(door) => {
            widths.push(("side_a", SegmentKind::Wall, door.side_a_cm));
            widths.push(("door", SegmentKind::Door, door.door_width_cm));
            widths.push(("side_b", SegmentKind::Wall, door.side_b_cm));
        }
        WallKind::Window(window) => {
            widths.push(("side_a", SegmentKind::Wall, window.side_a_cm));
            widths.push(("window", SegmentKind::Window, window.window_width_cm));
            widths.push(("side_b", SegmentKind::Wall, window.side_b_cm));
            if window.count == WindowCount::Two {
                widths.push(("window", SegmentKind::Window, window.window_width_cm));
                widths.push(("side_c", SegmentKind::Wall, window.side_c_cm));
            }
        }
        WallKind::DoorWindow(wall) => {
            let door = ("door", SegmentKind::Door, wall.door_width_cm);
            if wall.door_end == WallEnd::Start {
                widths.push(door);
            }
            widths.push(("side_a", SegmentKind::Wall, wall.side_a_cm));
            widths.push(("window", SegmentKind::Window, wall.window_width_cm));
            widths.push(("side_b", SegmentKind::Wall, wall.side_b_cm));
            if wall.door_end == WallEnd::End {
                widths.push(door);
            }
        }
    }
    widths
}

/// Partitions a wall's length into contiguous spans.
///
/// Optional side sections with zero width are dropped; openings are
/// always emitted. A solid wall is a single span covering
/// `wall_length_cm`. The sum of span widths always equals the sum of
/// the declared widths.
pub fn partition(kind: &WallKind, wall_length_cm: f64) -> Partition {
    let mut spans = Partition::new();
    if matches!(kind, WallKind::Solid) {
        spans.push(WallSegment {
            name: "wall",
            kind: SegmentKind::Wall,
            offset_cm: 0.0,
            width_cm: wall_length_cm,
        });
        return spans;
    }

    let mut cursor = 0.0;
    for (name, seg_kind, width_cm) in named_widths(kind) {
        if seg_kind == SegmentKind::Wall && width_cm.abs() < GEOM_EPS {
            continue;
        }
        spans.push(WallSegment {
            name,
            kind: seg_kind,
            offset_cm: cursor,
            width_cm,
        });
        cursor += width_cm;
    }
    spans
}

/// Sum of all declared sub-segment widths, included or not.
pub fn declared_total_cm(kind: &WallKind) -> f64 {
    named_widths(kind).iter().map(|(_, _, w)| w).sum()
}

/// Save-time precondition check for a wall partition.
///
/// All widths must be non-negative, openings strictly positive (the
/// window height included), and the total must fit the available
/// length.
pub fn validate_partition(kind: &WallKind, available_cm: f64) -> Result<(), PartitionError> {
    let mut total = 0.0;
    for (name, seg_kind, width_cm) in named_widths(kind) {
        if width_cm < 0.0 {
            return Err(PartitionError::NegativeWidth {
                name,
                value: width_cm,
            });
        }
        if seg_kind != SegmentKind::Wall && width_cm < GEOM_EPS {
            return Err(PartitionError::EmptyOpening { name });
        }
        total += width_cm;
    }

    let window_height = match kind {
        WallKind::Window(window) => Some(window.window_height_cm),
        WallKind::DoorWindow(wall) => Some(wall.window_height_cm),
        _ => None,
    };
    if let Some(height) = window_height {
        if height < 0.0 {
            return Err(PartitionError::NegativeWidth {
                name: "window_height",
                value: height,
            });
        }
        if height < GEOM_EPS {
            return Err(PartitionError::EmptyOpening {
                name: "window_height",
            });
        }
    }

    if total - available_cm > GEOM_EPS {
        return Err(PartitionError::ExceedsAvailable {
            total,
            available: available_cm,
        });
    }
    Ok(())
}

const WALL_BORDER_PX: f64 = 6.0;
const WALL_FILL_PX: f64 = 4.0;
const LABEL_OFFSET_PX: f64 = 12.0;

fn border_stroke() -> Stroke {
    Stroke::solid(Color::rgb(60, 60, 60), WALL_BORDER_PX)
}

fn fill_stroke() -> Stroke {
    Stroke::solid(Color::rgb(176, 140, 104), WALL_FILL_PX)
}

fn window_stroke() -> Stroke {
    Stroke::solid(Color::rgb(120, 160, 200), 1.0)
}

/// Renders one wall into the scene: per span a border stroke, a fill
/// stroke (transparent for openings), and a centered width label.
/// Windows get a thin center line as the plan-view symbol. A
/// zero-length wall renders nothing.
pub fn render_wall(scene: &mut Scene, wall: &Wall, viewport: &Viewport) {
    let Some(direction) = geometry::unit_direction(wall.start, wall.end) else {
        return;
    };

    let start_px = viewport.world_point_to_pixel(&wall.start);
    let end_px = viewport.world_point_to_pixel(&wall.end);
    let start_pt = Point::new(start_px.0, start_px.1);
    let end_pt = Point::new(end_px.0, end_px.1);
    // The wall has non-zero length here, so its pixel normal exists.
    let Some(normal_px) = geometry::unit_normal(start_pt, end_pt) else {
        return;
    };
    let label_angle = geometry::readable_angle_deg(geometry::rotation_angle_deg(start_pt, end_pt));

    for span in partition(&wall.kind, wall.length_cm()) {
        let span_start = geometry::offset_point(wall.start, direction, span.offset_cm);
        let span_end =
            geometry::offset_point(wall.start, direction, span.offset_cm + span.width_cm);
        let from = viewport.world_point_to_pixel(&span_start);
        let to = viewport.world_point_to_pixel(&span_end);

        scene.push_line(from, to, border_stroke());
        match span.kind {
            SegmentKind::Wall => scene.push_line(from, to, fill_stroke()),
            SegmentKind::Window => scene.push_line(from, to, window_stroke()),
            SegmentKind::Door => {}
        }

        let mid = geometry::midpoint(Point::new(from.0, from.1), Point::new(to.0, to.1));
        let label_pos = geometry::offset_point(mid, normal_px, LABEL_OFFSET_PX);
        scene.push_text_rotated(
            (label_pos.x, label_pos.y),
            units::dimension_label(span.width_cm),
            constants::LABEL_SIZE_PX,
            Color::BLACK,
            label_angle,
            TextAnchor::Middle,
        );
    }
}
