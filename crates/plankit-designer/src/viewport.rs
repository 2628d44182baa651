//! Viewport and coordinate transformation for canvas rendering.
//!
//! Handles conversion between pixel coordinates (screen space) and
//! model coordinates (plan space, centimeters). Manages zoom and pan
//! with proper coordinate mapping.
//!
//! Screen space follows the drawing-surface convention: (0,0) at the
//! top-left, y growing downward — the same orientation plan drawings
//! use on paper. Model y therefore maps straight to screen y with no
//! axis flip.

use std::fmt;

use plankit_core::constants;
use plankit_core::SessionConfig;

use crate::model::Point;

/// Represents the viewport transformation state (zoom and pan).
///
/// `zoom` is the scale in pixels per centimeter; `pan` is a pixel
/// translation. Mutated only by wheel/drag interactions, never by
/// data edits.
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a new viewport with initial dimensions.
    /// The default margin keeps the model origin clear of the canvas edge.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: constants::DEFAULT_SCALE_PX_PER_CM,
            pan_x: constants::CANVAS_MARGIN_PX,
            pan_y: constants::CANVAS_MARGIN_PX,
            canvas_width,
            canvas_height,
        }
    }

    /// Creates a viewport from a session configuration.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            zoom: config.scale_px_per_cm,
            pan_x: config.margin_px,
            pan_y: config.margin_px,
            canvas_width: config.canvas_width_px,
            canvas_height: config.canvas_height_px,
        }
    }

    /// Gets the canvas width.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Gets the canvas height.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when the host
    /// surface resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Gets the current zoom level in pixels per centimeter.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, constrained to the configured bounds.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom > constants::MIN_ZOOM && zoom < constants::MAX_ZOOM {
            self.zoom = zoom;
        }
    }

    /// Zooms in by one notch.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * constants::ZOOM_STEP);
    }

    /// Zooms out by one notch.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / constants::ZOOM_STEP);
    }

    /// Gets the pan offset (X coordinate).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a pixel delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts pixel coordinates to model coordinates.
    ///
    /// ```text
    /// model_x = (pixel_x - pan_x) / zoom
    /// model_y = (pixel_y - pan_y) / zoom
    /// ```
    pub fn pixel_to_world(&self, pixel_x: f64, pixel_y: f64) -> Point {
        Point::new(
            (pixel_x - self.pan_x) / self.zoom,
            (pixel_y - self.pan_y) / self.zoom,
        )
    }

    /// Converts model coordinates to pixel coordinates.
    ///
    /// ```text
    /// pixel_x = model_x * zoom + pan_x
    /// pixel_y = model_y * zoom + pan_y
    /// ```
    pub fn world_to_pixel(&self, world_x: f64, world_y: f64) -> (f64, f64) {
        (
            world_x * self.zoom + self.pan_x,
            world_y * self.zoom + self.pan_y,
        )
    }

    /// Converts model coordinates to pixel coordinates (using Point).
    pub fn world_point_to_pixel(&self, point: &Point) -> (f64, f64) {
        self.world_to_pixel(point.x, point.y)
    }

    /// Fits the given bounding box into the viewport with padding.
    ///
    /// * `min_x`, `min_y` - one corner of the box (model coordinates)
    /// * `max_x`, `max_y` - the opposite corner
    /// * `padding` - fraction of the viewport reserved per side (0.0 - 1.0)
    ///
    /// Centers the content and derives the zoom level.
    pub fn fit_to_bounds(&mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64, padding: f64) {
        if min_x >= max_x || min_y >= max_y {
            return;
        }

        let width = max_x - min_x;
        let height = max_y - min_y;

        let padding_factor = 1.0 - (padding * 2.0);
        let zoom_x = (self.canvas_width * padding_factor) / width;
        let zoom_y = (self.canvas_height * padding_factor) / height;
        let new_zoom = zoom_x
            .min(zoom_y)
            .clamp(constants::MIN_ZOOM, constants::MAX_ZOOM);

        let content_pixel_width = width * new_zoom;
        let content_pixel_height = height * new_zoom;

        // pixel = model * zoom + pan  =>  pan = pixel - model * zoom
        self.zoom = new_zoom;
        self.pan_x = (self.canvas_width - content_pixel_width) / 2.0 - min_x * new_zoom;
        self.pan_y = (self.canvas_height - content_pixel_height) / 2.0 - min_y * new_zoom;
    }

    /// Fits the viewport to show all content with the default padding.
    pub fn fit_to_view(&mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) {
        self.fit_to_bounds(min_x, min_y, max_x, max_y, constants::VIEW_PADDING);
    }

    /// Zooms to a point, maintaining that point's screen position.
    ///
    /// This is the "zoom to cursor" primitive: the model point under
    /// the pointer stays under the pointer across the zoom change.
    pub fn zoom_to_point(&mut self, world_point: &Point, new_zoom: f64) {
        if new_zoom <= constants::MIN_ZOOM || new_zoom >= constants::MAX_ZOOM {
            return;
        }

        let (pixel_x, pixel_y) = self.world_to_pixel(world_point.x, world_point.y);

        // pan = pixel - model * zoom keeps the pixel position fixed.
        self.zoom = new_zoom;
        self.pan_x = pixel_x - world_point.x * new_zoom;
        self.pan_y = pixel_y - world_point.y * new_zoom;
    }

    /// Zooms in one notch at a specific model point.
    pub fn zoom_in_at(&mut self, world_point: &Point) {
        self.zoom_to_point(world_point, self.zoom * constants::ZOOM_STEP);
    }

    /// Zooms out one notch at a specific model point.
    pub fn zoom_out_at(&mut self, world_point: &Point) {
        self.zoom_to_point(world_point, self.zoom / constants::ZOOM_STEP);
    }

    /// Centers the viewport on a model coordinate.
    pub fn center_on(&mut self, world_x: f64, world_y: f64) {
        self.pan_x = self.canvas_width / 2.0 - world_x * self.zoom;
        self.pan_y = self.canvas_height / 2.0 - world_y * self.zoom;
    }

    /// Centers the viewport on a point.
    pub fn center_on_point(&mut self, point: &Point) {
        self.center_on(point.x, point.y);
    }

    /// Resets the viewport to its default state.
    pub fn reset(&mut self) {
        self.zoom = constants::DEFAULT_SCALE_PX_PER_CM;
        self.pan_x = constants::CANVAS_MARGIN_PX;
        self.pan_y = constants::CANVAS_MARGIN_PX;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2} px/cm | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(
            constants::DEFAULT_CANVAS_WIDTH_PX,
            constants::DEFAULT_CANVAS_HEIGHT_PX,
        )
    }
}
