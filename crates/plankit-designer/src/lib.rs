//! # Plankit Designer
//!
//! This crate provides the interactive plan layout engine for Plankit:
//! building footprints, reference axes, structural columns, partitioned
//! walls, and dimension annotations composed into an abstract 2D scene
//! for whatever rendering surface the host supplies.
//!
//! ## Core Components
//!
//! ### Plan Elements
//! - **Model**: building footprint, axes, nodes (columns), walls with
//!   door/window partitions, and dimension annotations (cotas)
//! - **Canvas**: composes the full plan into a scene of lines,
//!   rectangles, and text
//! - **Viewport**: pixel/centimeter mapping with pan and zoom
//!
//! ### Editing
//! - **Wall editor**: modal session for tuning a wall's door/window
//!   partition with live validation
//! - **Interaction**: explicit idle/panning state machine emitting
//!   viewport commands
//!
//! ### Output
//! - **Quantities**: geometry-derived take-off for the pricing payload
//! - **SVG**: reference rendering surface for previews and tests
//! - **Serialization**: versioned JSON plan documents
//!
//! ## Architecture
//!
//! ```text
//! PlannerState (session)
//!   ├── Plan (model)
//!   ├── Viewport + InteractionController (navigation)
//!   ├── PlanCanvas (layout -> Scene)
//!   │     ├── dimension (offset dimension lines)
//!   │     └── walls (partition + per-segment rendering)
//!   └── WallEditor (modal partition editing)
//!
//! Scene -> host rendering surface (reference: svg)
//! Plan  -> quantities (pricing payload input)
//! Plan  -> serialization (plan documents)
//! ```
//!
//! Data flows one way: edited model state to derived layout to rendered
//! shapes. Nothing in this crate performs I/O except plan document
//! save/load, and nothing here is asynchronous.

pub mod canvas;
pub mod dimension;
pub mod geometry;
pub mod interaction;
pub mod model;
pub mod quantities;
pub mod scene;
pub mod serialization;
pub mod state;
pub mod svg;
pub mod viewport;
pub mod wall_editor;
pub mod walls;

pub use canvas::{NodeRect, PlanCanvas};
pub use interaction::{InteractionController, InteractionState, ViewportCommand};
pub use model::{
    Cota, CotaEndpoints, CotaKind, DoorWall, DoorWindowWall, FloorProfile, Node, Orientation,
    Plan, Point, SecondaryAxis, TertiaryAxis, Wall, WallEnd, WallKind, WindowCount, WindowWall,
};
pub use quantities::{take_off, PlanQuantities};
pub use scene::{Color, DashPattern, Scene, SceneItem, Stroke, TextAnchor};
pub use serialization::{load_plan, save_plan, PlanFile, PlanMetadata, ViewportState};
pub use state::PlannerState;
pub use svg::scene_to_svg;
pub use viewport::Viewport;
pub use wall_editor::{SavedWall, WallEditor, WallSubtype};
pub use walls::{partition, validate_partition, Partition, SegmentKind, WallSegment};
