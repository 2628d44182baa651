//! Abstract scene graph.
//!
//! The canvas emits an ordered list of draw instructions in screen
//! space (pixels). The host's rendering surface only needs "draw
//! line", "draw rectangle", and "draw text", each with stroke, fill,
//! dash, and rotation; nothing here assumes a concrete graphics API.

use serde::{Deserialize, Serialize};

/// RGBA display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

/// Dash pattern for a stroked line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    pub on_px: f64,
    pub off_px: f64,
}

/// Stroke style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width_px: f64,
    pub dash: Option<DashPattern>,
}

impl Stroke {
    /// Solid stroke.
    pub fn solid(color: Color, width_px: f64) -> Self {
        Self {
            color,
            width_px,
            dash: None,
        }
    }

    /// Dashed stroke.
    pub fn dashed(color: Color, width_px: f64, on_px: f64, off_px: f64) -> Self {
        Self {
            color,
            width_px,
            dash: Some(DashPattern { on_px, off_px }),
        }
    }
}

/// Horizontal anchoring of a text item relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// A stroked line segment in screen space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub stroke: Stroke,
}

/// An axis-aligned rectangle in screen space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectItem {
    /// Top-left corner.
    pub origin: (f64, f64),
    pub width_px: f64,
    pub height_px: f64,
    pub stroke: Stroke,
    /// `None` leaves the interior transparent.
    pub fill: Option<Color>,
}

/// A text label in screen space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    pub position: (f64, f64),
    pub content: String,
    pub size_px: f64,
    pub color: Color,
    /// Rotation around `position`, degrees clockwise.
    pub rotation_deg: f64,
    pub anchor: TextAnchor,
}

/// One draw instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SceneItem {
    Line(LineItem),
    Rect(RectItem),
    Text(TextItem),
}

/// An ordered list of draw instructions. Later items paint over
/// earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    items: Vec<SceneItem>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line.
    pub fn push_line(&mut self, from: (f64, f64), to: (f64, f64), stroke: Stroke) {
        self.items.push(SceneItem::Line(LineItem { from, to, stroke }));
    }

    /// Appends a rectangle.
    pub fn push_rect(
        &mut self,
        origin: (f64, f64),
        width_px: f64,
        height_px: f64,
        stroke: Stroke,
        fill: Option<Color>,
    ) {
        self.items.push(SceneItem::Rect(RectItem {
            origin,
            width_px,
            height_px,
            stroke,
            fill,
        }));
    }

    /// Appends a horizontal, middle-anchored text label.
    pub fn push_text(&mut self, position: (f64, f64), content: impl Into<String>, size_px: f64, color: Color) {
        self.push_text_rotated(position, content, size_px, color, 0.0, TextAnchor::Middle);
    }

    /// Appends a text label with explicit rotation and anchoring.
    pub fn push_text_rotated(
        &mut self,
        position: (f64, f64),
        content: impl Into<String>,
        size_px: f64,
        color: Color,
        rotation_deg: f64,
        anchor: TextAnchor,
    ) {
        self.items.push(SceneItem::Text(TextItem {
            position,
            content: content.into(),
            size_px,
            color,
            rotation_deg,
            anchor,
        }));
    }

    /// All items in paint order.
    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the line items only.
    pub fn lines(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter_map(|item| match item {
            SceneItem::Line(line) => Some(line),
            _ => None,
        })
    }

    /// Iterates over the rectangle items only.
    pub fn rects(&self) -> impl Iterator<Item = &RectItem> {
        self.items.iter().filter_map(|item| match item {
            SceneItem::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    /// Iterates over the text items only.
    pub fn texts(&self) -> impl Iterator<Item = &TextItem> {
        self.items.iter().filter_map(|item| match item {
            SceneItem::Text(text) => Some(text),
            _ => None,
        })
    }
}
