//! Session configuration.
//!
//! One explicit value passed into the editor at construction; there is
//! no ambient module-level field state anywhere in the workspace.
//! Loading and saving the configuration belongs to the host; this
//! crate only defines the shape and the sanity clamp applied on the
//! way in.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Per-session layout defaults for the plan editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Drawing surface width in pixels.
    pub canvas_width_px: f64,
    /// Drawing surface height in pixels.
    pub canvas_height_px: f64,
    /// Border between the canvas edge and the building footprint.
    pub margin_px: f64,
    /// Initial scale in pixels per centimeter.
    pub scale_px_per_cm: f64,
    /// Column footprint used when the plan has a single floor level.
    pub column_width_cm: f64,
    /// See `column_width_cm`.
    pub column_depth_cm: f64,
    /// Seed door width for a fresh wall editor session.
    pub door_width_cm: f64,
    /// Seed window width for a fresh wall editor session.
    pub window_width_cm: f64,
    /// Seed window height for a fresh wall editor session.
    pub window_height_cm: f64,
    /// Perpendicular offset of dimension lines from their segment.
    pub dimension_offset_px: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            canvas_width_px: constants::DEFAULT_CANVAS_WIDTH_PX,
            canvas_height_px: constants::DEFAULT_CANVAS_HEIGHT_PX,
            margin_px: constants::CANVAS_MARGIN_PX,
            scale_px_per_cm: constants::DEFAULT_SCALE_PX_PER_CM,
            column_width_cm: constants::DEFAULT_COLUMN_WIDTH_CM,
            column_depth_cm: constants::DEFAULT_COLUMN_DEPTH_CM,
            door_width_cm: constants::DEFAULT_DOOR_WIDTH_CM,
            window_width_cm: constants::DEFAULT_WINDOW_WIDTH_CM,
            window_height_cm: constants::DEFAULT_WINDOW_HEIGHT_CM,
            dimension_offset_px: constants::DIMENSION_OFFSET_PX,
        }
    }
}

fn sanitized(value: f64, default: f64, name: &str) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        tracing::warn!("Invalid {} {}, using default {}", name, value, default);
        default
    }
}

impl SessionConfig {
    /// Returns the configuration with non-positive geometry fields
    /// replaced by their defaults. Hosts feed this from external
    /// persistence, so a corrupted value must not poison the session.
    pub fn validated(self) -> Self {
        let d = Self::default();
        Self {
            canvas_width_px: sanitized(self.canvas_width_px, d.canvas_width_px, "canvas_width_px"),
            canvas_height_px: sanitized(
                self.canvas_height_px,
                d.canvas_height_px,
                "canvas_height_px",
            ),
            margin_px: sanitized(self.margin_px, d.margin_px, "margin_px"),
            scale_px_per_cm: sanitized(self.scale_px_per_cm, d.scale_px_per_cm, "scale_px_per_cm"),
            column_width_cm: sanitized(self.column_width_cm, d.column_width_cm, "column_width_cm"),
            column_depth_cm: sanitized(self.column_depth_cm, d.column_depth_cm, "column_depth_cm"),
            door_width_cm: sanitized(self.door_width_cm, d.door_width_cm, "door_width_cm"),
            window_width_cm: sanitized(self.window_width_cm, d.window_width_cm, "window_width_cm"),
            window_height_cm: sanitized(
                self.window_height_cm,
                d.window_height_cm,
                "window_height_cm",
            ),
            dimension_offset_px: sanitized(
                self.dimension_offset_px,
                d.dimension_offset_px,
                "dimension_offset_px",
            ),
        }
    }
}
