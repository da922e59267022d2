// File: crates/sketch-core/src/recording.rs
// Summary: Headless surface that records draw calls with the matrix active at each call.

use crate::error::{SketchError, SketchResult};
use crate::geometry::{Affine, Point, RectF};
use crate::surface::{DrawSurface, FontSpec, ImageFormat};
use crate::types::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Save,
    Restore,
    ResetTransform,
    Translate { dx: f32, dy: f32 },
    Scale { sx: f32, sy: f32 },
    Rotate { radians: f32 },
    FillRect { rect: RectF, color: Color, matrix: Affine },
    StrokeRect { rect: RectF, color: Color, width: f32, matrix: Affine },
    FillCircle { center: Point, radius: f32, color: Color, matrix: Affine },
    StrokeCircle { center: Point, radius: f32, color: Color, matrix: Affine },
    FillWedge { center: Point, radius: f32, start: f32, sweep: f32, color: Color, matrix: Affine },
    StrokeWedge { center: Point, radius: f32, start: f32, sweep: f32, color: Color, matrix: Affine },
    Polyline { points: Vec<Point>, color: Color, width: f32, matrix: Affine },
    Text { text: String, origin: Point, size: f32, color: Color, matrix: Affine },
}

impl DrawOp {
    /// True for operations that put pixels on the surface.
    pub fn is_paint(&self) -> bool {
        !matches!(
            self,
            DrawOp::Clear
                | DrawOp::Save
                | DrawOp::Restore
                | DrawOp::ResetTransform
                | DrawOp::Translate { .. }
                | DrawOp::Scale { .. }
                | DrawOp::Rotate { .. }
        )
    }

    pub fn matrix(&self) -> Option<Affine> {
        match self {
            DrawOp::FillRect { matrix, .. }
            | DrawOp::StrokeRect { matrix, .. }
            | DrawOp::FillCircle { matrix, .. }
            | DrawOp::StrokeCircle { matrix, .. }
            | DrawOp::FillWedge { matrix, .. }
            | DrawOp::StrokeWedge { matrix, .. }
            | DrawOp::Polyline { matrix, .. }
            | DrawOp::Text { matrix, .. } => Some(*matrix),
            _ => None,
        }
    }
}

pub struct RecordingSurface {
    width: f32,
    height: f32,
    matrix: Affine,
    stack: Vec<Affine>,
    ops: Vec<DrawOp>,
    last_clear: usize,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, matrix: Affine::IDENTITY, stack: Vec::new(), ops: Vec::new(), last_clear: 0 }
    }

    /// Every call since construction.
    pub fn ops(&self) -> &[DrawOp] { &self.ops }

    /// Calls made since the most recent `clear`.
    pub fn since_clear(&self) -> &[DrawOp] { &self.ops[self.last_clear..] }

    /// Paint operations that survived the most recent `clear`.
    pub fn painted(&self) -> Vec<&DrawOp> {
        self.since_clear().iter().filter(|op| op.is_paint()).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.painted().is_empty()
    }

    pub fn current_matrix(&self) -> Affine { self.matrix }
    pub fn save_depth(&self) -> usize { self.stack.len() }

    fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> f32 { self.width }
    fn height(&self) -> f32 { self.height }

    fn clear(&mut self) {
        self.last_clear = self.ops.len();
        self.push(DrawOp::Clear);
    }

    fn save(&mut self) {
        self.stack.push(self.matrix);
        self.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        // unbalanced restore is a no-op, as on a canvas
        if let Some(m) = self.stack.pop() {
            self.matrix = m;
        }
        self.push(DrawOp::Restore);
    }

    fn reset_transform(&mut self) {
        self.matrix = Affine::IDENTITY;
        self.push(DrawOp::ResetTransform);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.matrix = self.matrix.translate(dx, dy);
        self.push(DrawOp::Translate { dx, dy });
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.matrix = self.matrix.scale(sx, sy);
        self.push(DrawOp::Scale { sx, sy });
    }

    fn rotate(&mut self, radians: f32) {
        self.matrix = self.matrix.rotate(radians);
        self.push(DrawOp::Rotate { radians });
    }

    fn fill_rect(&mut self, rect: RectF, color: Color) {
        let matrix = self.matrix;
        self.push(DrawOp::FillRect { rect, color, matrix });
    }

    fn stroke_rect(&mut self, rect: RectF, color: Color, width: f32) {
        let matrix = self.matrix;
        self.push(DrawOp::StrokeRect { rect, color, width, matrix });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        let matrix = self.matrix;
        self.push(DrawOp::FillCircle { center, radius, color, matrix });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, _width: f32) {
        let matrix = self.matrix;
        self.push(DrawOp::StrokeCircle { center, radius, color, matrix });
    }

    fn fill_wedge(&mut self, center: Point, radius: f32, _inner: f32, start: f32, sweep: f32, color: Color) {
        let matrix = self.matrix;
        self.push(DrawOp::FillWedge { center, radius, start, sweep, color, matrix });
    }

    fn stroke_wedge(&mut self, center: Point, radius: f32, _inner: f32, start: f32, sweep: f32, color: Color, _width: f32) {
        let matrix = self.matrix;
        self.push(DrawOp::StrokeWedge { center, radius, start, sweep, color, matrix });
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f32) {
        let matrix = self.matrix;
        self.push(DrawOp::Polyline { points: points.to_vec(), color, width, matrix });
    }

    fn fill_text(&mut self, text: &str, origin: Point, font: &FontSpec, color: Color) {
        let matrix = self.matrix;
        self.push(DrawOp::Text { text: text.to_string(), origin, size: font.size, color, matrix });
    }

    fn measure_text(&self, text: &str, font: &FontSpec) -> f32 {
        // rough average advance for a sans face
        text.chars().count() as f32 * font.size * 0.55
    }

    fn encode(&mut self, _format: ImageFormat) -> SketchResult<Vec<u8>> {
        Err(SketchError::EncodeUnsupported)
    }
}
