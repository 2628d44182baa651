//! Plan data model.
//!
//! All model-space coordinates and lengths are centimeters. Screen-space
//! values are pixels and only appear in the scene/viewport layers.

use serde::{Deserialize, Serialize};

use crate::geometry;
use crate::scene::Color;

/// A point in model space (centimeters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Orientation of an axis or a column footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Horizontal
    }
}

/// A user-declared interior reference axis.
///
/// Runs parallel to one pair of the building's perimeter sides at
/// `distance_cm` from the origin along the perpendicular direction:
/// a vertical axis sits at `x = distance_cm`, a horizontal one at
/// `y = distance_cm`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryAxis {
    pub label: String,
    pub orientation: Orientation,
    pub distance_cm: f64,
}

/// A free-form reference segment in model space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TertiaryAxis {
    pub label: String,
    pub start: Point,
    pub end: Point,
}

/// Column footprint for one floor level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorProfile {
    pub level: u32,
    pub column_width_cm: f64,
    pub column_depth_cm: f64,
}

/// A placed structural column.
///
/// `position` is the minimum corner of the column rectangle. Entries
/// without a position model incomplete form data; the layout filters
/// them out instead of failing the whole render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub position: Option<Point>,
    /// Footprint orientation, used only when the plan has a single
    /// floor level and no profile applies.
    #[serde(default)]
    pub orientation: Orientation,
}

impl Node {
    /// Creates a placed node.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Some(Point::new(x, y)),
            orientation: Orientation::default(),
        }
    }
}

/// Which side of the measured segment a cota is drawn on.
///
/// `Constrained` cotas sit on the positive-normal side of their
/// segment, `Free` cotas on the opposite side. Callers pick endpoints
/// so that this lands the annotation outside the building footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CotaKind {
    Free,
    Constrained,
}

/// Endpoints of a dimension annotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CotaEndpoints {
    /// Indices into the plan's node list; resolved to the current
    /// (clamped) column centers at render time.
    NodeRefs { a: usize, b: usize },
    /// Explicit model-space coordinates.
    Points { a: Point, b: Point },
}

/// A dimension annotation between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cota {
    pub endpoints: CotaEndpoints,
    pub value_cm: f64,
    pub kind: CotaKind,
    pub color: Color,
}

/// How many windows a window wall carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowCount {
    One,
    Two,
}

/// Which end of a door+window wall the door is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallEnd {
    Start,
    End,
}

/// Partition fields of a wall with a single door opening.
///
/// Sub-segment order along the wall: `[side_a?, door, side_b?]`.
/// Side segments are optional (zero width drops them), the door is
/// mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorWall {
    pub door_width_cm: f64,
    pub side_a_cm: f64,
    pub side_b_cm: f64,
}

/// Partition fields of a wall with one or two window openings.
///
/// Order: `[side_a?, window, side_b?]`, extended to
/// `[side_a?, window, side_b?, window, side_c?]` when `count` is two.
/// Both windows share the same width and height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowWall {
    pub count: WindowCount,
    pub window_width_cm: f64,
    pub window_height_cm: f64,
    pub side_a_cm: f64,
    pub side_b_cm: f64,
    /// Trailing side segment, meaningful only when `count` is two.
    #[serde(default)]
    pub side_c_cm: f64,
}

/// Partition fields of a wall with a door and a window.
///
/// The window run `[side_a?, window, side_b?]` gets the door prepended
/// (`door_end == Start`) or appended (`door_end == End`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorWindowWall {
    pub door_width_cm: f64,
    pub door_end: WallEnd,
    pub window_width_cm: f64,
    pub window_height_cm: f64,
    pub side_a_cm: f64,
    pub side_b_cm: f64,
}

/// Wall subtype with its partition fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WallKind {
    Solid,
    Door(DoorWall),
    Window(WindowWall),
    DoorWindow(DoorWindowWall),
}

/// A wall segment between two model-space endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub start: Point,
    pub end: Point,
    pub kind: WallKind,
}

impl Wall {
    /// Creates a solid wall between two points.
    pub fn solid(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            kind: WallKind::Solid,
        }
    }

    /// Horizontal if both endpoints share a y coordinate, else vertical.
    pub fn orientation(&self) -> Orientation {
        if (self.start.y - self.end.y).abs() < geometry::GEOM_EPS {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Euclidean distance between the endpoints.
    pub fn length_cm(&self) -> f64 {
        geometry::distance(self.start, self.end)
    }

    /// Length available to the wall's partition.
    ///
    /// This is the single authority for partition budgets: plain
    /// endpoint distance, with no doubled-coordinate convention.
    pub fn available_length_cm(&self) -> f64 {
        self.length_cm()
    }
}

/// The in-memory plan document: one building footprint plus everything
/// placed on it. Constructed from form state when a diagram is opened
/// and held for the duration of the editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Building footprint width (x extent).
    pub width_cm: f64,
    /// Building footprint length (y extent).
    pub length_cm: f64,
    pub floors: Vec<FloorProfile>,
    pub selected_level: u32,
    pub secondary_axes: Vec<SecondaryAxis>,
    pub tertiary_axes: Vec<TertiaryAxis>,
    pub nodes: Vec<Node>,
    pub cotas: Vec<Cota>,
    pub walls: Vec<Wall>,
}

impl Plan {
    /// Creates an empty plan with the given footprint.
    pub fn new(width_cm: f64, length_cm: f64) -> Self {
        Self {
            width_cm,
            length_cm,
            floors: Vec::new(),
            selected_level: 0,
            secondary_axes: Vec::new(),
            tertiary_axes: Vec::new(),
            nodes: Vec::new(),
            cotas: Vec::new(),
            walls: Vec::new(),
        }
    }

    /// Looks up the column profile for a floor level.
    ///
    /// The selected level always resolves when the plan has profiles;
    /// offering a level that does not exist is a caller bug, not a
    /// recoverable condition.
    pub fn profile_for_level(&self, level: u32) -> &FloorProfile {
        self.floors
            .iter()
            .find(|p| p.level == level)
            .unwrap_or_else(|| panic!("no column profile for floor level {level}"))
    }

    /// True when a per-floor column profile applies instead of the
    /// per-node orientation default.
    pub fn uses_floor_profiles(&self) -> bool {
        self.floors.len() > 1
    }
}
