// File: crates/sketch-core/src/scene.rs
// Summary: Scene model: append-only shapes and text annotations plus the zoom/rotation view state.

use crate::error::{SketchError, SketchResult};
use crate::types::{DEFAULT_CIRCLE, DEFAULT_RECT, DEFAULT_TEXT_POS};

/// Zoom change applied by one zoom-in / zoom-out step.
pub const ZOOM_STEP: f64 = 0.1;
/// Lowest zoom level; every mutation clamps to it.
pub const MIN_ZOOM: f64 = 0.1;
/// Degrees added by one rotate step.
pub const ROTATION_STEP: f64 = 45.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Rectangle { x: f32, y: f32, width: f32, height: f32 },
    Circle { x: f32, y: f32, radius: f32 },
}

impl Shape {
    /// Checked rectangle constructor; width and height must be finite and >= 0.
    pub fn rectangle(x: f32, y: f32, width: f32, height: f32) -> SketchResult<Self> {
        check_extent("width", width)?;
        check_extent("height", height)?;
        Ok(Shape::Rectangle { x, y, width, height })
    }

    /// Checked circle constructor; radius must be finite and >= 0.
    pub fn circle(x: f32, y: f32, radius: f32) -> SketchResult<Self> {
        check_extent("radius", radius)?;
        Ok(Shape::Circle { x, y, radius })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Rectangle { .. } => "rectangle",
            Shape::Circle { .. } => "circle",
        }
    }
}

fn check_extent(what: &'static str, value: f32) -> SketchResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SketchError::InvalidGeometry { what, value })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextAnnotation {
    pub content: String,
    pub x: f32,
    pub y: f32,
}

/// In-memory scene. Insertion order is paint order.
#[derive(Clone, Debug)]
pub struct Scene {
    shapes: Vec<Shape>,
    texts: Vec<TextAnnotation>,
    zoom_level: f64,
    rotation_angle: f64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self { shapes: Vec::new(), texts: Vec::new(), zoom_level: 1.0, rotation_angle: 0.0 }
    }

    pub fn shapes(&self) -> &[Shape] { &self.shapes }
    pub fn texts(&self) -> &[TextAnnotation] { &self.texts }
    pub fn zoom_level(&self) -> f64 { self.zoom_level }
    /// Rotation in degrees, always in [0, 360).
    pub fn rotation_angle(&self) -> f64 { self.rotation_angle }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.texts.is_empty()
    }

    pub fn add_rectangle(&mut self) {
        let (x, y, width, height) = DEFAULT_RECT;
        self.shapes.push(Shape::Rectangle { x, y, width, height });
    }

    pub fn add_circle(&mut self) {
        let (x, y, radius) = DEFAULT_CIRCLE;
        self.shapes.push(Shape::Circle { x, y, radius });
    }

    /// Append a shape built with the checked constructors.
    pub fn push_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn add_text(&mut self, content: impl Into<String>) {
        let (x, y) = DEFAULT_TEXT_POS;
        self.texts.push(TextAnnotation { content: content.into(), x, y });
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom_level + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom_level - ZOOM_STEP);
    }

    /// Set zoom directly; values below the floor (and NaN) clamp to `MIN_ZOOM`.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom_level = if zoom >= MIN_ZOOM { zoom } else { MIN_ZOOM };
    }

    pub fn rotate(&mut self) {
        self.rotation_angle = (self.rotation_angle + ROTATION_STEP) % 360.0;
    }

    pub fn reset_view(&mut self) {
        self.zoom_level = 1.0;
        self.rotation_angle = 0.0;
    }
}
