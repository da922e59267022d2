// File: crates/sketch-core/src/surface.rs
// Summary: Drawing-surface capability consumed by the render pipeline, chart painter and export.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SketchError, SketchResult};
use crate::geometry::{Point, RectF};
use crate::types::Color;

/// Raster encodings the export path supports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Jpeg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageFormat {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpeg" | "jpg" => Ok(ImageFormat::Jpeg),
            _ => Err(SketchError::UnknownImageFormat(s.to_string())),
        }
    }
}

/// Font request; backends resolve `families` in order and fall back to their default.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub size: f32,
    pub families: &'static [&'static str],
    pub bold: bool,
}

impl FontSpec {
    pub const SANS_FAMILIES: &'static [&'static str] =
        &["Arial", "Helvetica", "Segoe UI", "Roboto", "DejaVu Sans", "sans-serif"];

    pub fn sans(size: f32) -> Self {
        Self { size, families: Self::SANS_FAMILIES, bold: false }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Immediate-mode 2D drawing API with a save/restore transform stack.
///
/// Transforms compose the way a canvas context does: each call post-multiplies
/// the current matrix, so later calls apply to geometry first.
pub trait DrawSurface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Reset every pixel to transparent, ignoring the current transform.
    fn clear(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    /// Replace the current matrix with identity (the save stack is untouched).
    fn reset_transform(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    fn scale(&mut self, sx: f32, sy: f32);
    /// Rotate by `radians`; positive turns +x toward +y (clockwise on a y-down canvas).
    fn rotate(&mut self, radians: f32);

    fn fill_rect(&mut self, rect: RectF, color: Color);
    fn stroke_rect(&mut self, rect: RectF, color: Color, width: f32);
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32);
    /// Pie slice from `start` sweeping `sweep` radians; `inner_radius > 0` cuts a ring segment.
    fn fill_wedge(&mut self, center: Point, radius: f32, inner_radius: f32, start: f32, sweep: f32, color: Color);
    fn stroke_wedge(&mut self, center: Point, radius: f32, inner_radius: f32, start: f32, sweep: f32, color: Color, width: f32);
    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f32);

    /// Draw `text` with its baseline starting at `origin`.
    fn fill_text(&mut self, text: &str, origin: Point, font: &FontSpec, color: Color);
    fn measure_text(&self, text: &str, font: &FontSpec) -> f32;

    /// Encode the pixels currently on the surface.
    fn encode(&mut self, format: ImageFormat) -> SketchResult<Vec<u8>>;

    fn center(&self) -> Point {
        Point::new(self.width() / 2.0, self.height() / 2.0)
    }

    fn bounds(&self) -> RectF {
        RectF::from_ltrb(0.0, 0.0, self.width(), self.height())
    }
}
