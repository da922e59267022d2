// File: crates/sketch-render-skia/src/surface.rs
// Summary: `DrawSurface` over a Skia CPU raster surface, with PNG (Skia) and JPEG (image) encoding.

use std::f32::consts::TAU;

use log::{debug, warn};
use skia_safe as skia;

use sketch_core::{Color, DrawSurface, FontSpec, ImageFormat, Point, RectF, SketchConfig, SketchError, SketchResult};

use crate::text::TextShaper;

pub struct SkiaSurface {
    surface: skia::Surface,
    width: u32,
    height: u32,
    shaper: TextShaper,
    background: skia::Color,
    jpeg_quality: u8,
}

impl SkiaSurface {
    /// Create a transparent `width` x `height` raster surface.
    pub fn new(width: u32, height: u32) -> SketchResult<Self> {
        let surface = skia::surfaces::raster_n32_premul((width as i32, height as i32))
            .ok_or(SketchError::SurfaceAllocation { width, height })?;
        debug!("raster surface {}x{}", width, height);
        Ok(Self {
            surface,
            width,
            height,
            shaper: TextShaper::new(),
            background: skia::Color::TRANSPARENT,
            jpeg_quality: 92,
        })
    }

    /// Surface sized from the configured viewport fractions.
    pub fn from_config(config: &SketchConfig) -> SketchResult<Self> {
        let (w, h) = config.surface_size()?;
        Ok(Self::new(w, h)?.with_jpeg_quality(config.jpeg_quality()))
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    /// Colour `clear` fills with; transparent unless changed.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = to_skia(color);
        self
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Copy the pixels out as tightly packed 8-bit RGBA rows.
    pub fn read_rgba8(&mut self, premultiplied: bool) -> SketchResult<Vec<u8>> {
        let alpha = if premultiplied { skia::AlphaType::Premul } else { skia::AlphaType::Unpremul };
        let info = skia::ImageInfo::new((self.width as i32, self.height as i32), skia::ColorType::RGBA8888, alpha, None);
        let row_bytes = self.width as usize * 4;
        let mut px = vec![0u8; row_bytes * self.height as usize];
        if !self.surface.read_pixels(&info, &mut px, row_bytes, (0, 0)) {
            return Err(SketchError::PixelRead);
        }
        Ok(px)
    }

    /// Unpremultiplied RGBA of one pixel.
    pub fn pixel(&mut self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let info = skia::ImageInfo::new((1, 1), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let mut px = [0u8; 4];
        self.surface.read_pixels(&info, &mut px, 4, (x as i32, y as i32)).then_some(px)
    }

    fn encode_png(&mut self) -> SketchResult<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(SketchError::Encode(ImageFormat::Png))?;
        Ok(data.as_bytes().to_vec())
    }

    fn encode_jpeg(&mut self) -> SketchResult<Vec<u8>> {
        // JPEG has no alpha: premultiplied RGB is the image composited over black.
        let rgba = self.read_rgba8(true)?;
        let rgb: Vec<u8> = rgba.chunks_exact(4).flat_map(|p| [p[0], p[1], p[2]]).collect();
        let mut out = Vec::new();
        {
            let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, self.jpeg_quality);
            encoder
                .encode(&rgb, self.width, self.height, image::ExtendedColorType::Rgb8)
                .map_err(|e| {
                    warn!("jpeg encode: {e}");
                    SketchError::Encode(ImageFormat::Jpeg)
                })?;
        }
        Ok(out)
    }
}

impl DrawSurface for SkiaSurface {
    fn width(&self) -> f32 { self.width as f32 }
    fn height(&self) -> f32 { self.height as f32 }

    fn clear(&mut self) {
        let bg = self.background;
        self.surface.canvas().clear(bg);
    }

    fn save(&mut self) {
        self.surface.canvas().save();
    }

    fn restore(&mut self) {
        self.surface.canvas().restore();
    }

    fn reset_transform(&mut self) {
        self.surface.canvas().reset_matrix();
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.surface.canvas().translate((dx, dy));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.surface.canvas().scale((sx, sy));
    }

    fn rotate(&mut self, radians: f32) {
        self.surface.canvas().rotate(radians.to_degrees(), None);
    }

    fn fill_rect(&mut self, rect: RectF, color: Color) {
        self.surface.canvas().draw_rect(to_rect(rect), &fill_paint(color));
    }

    fn stroke_rect(&mut self, rect: RectF, color: Color, width: f32) {
        self.surface.canvas().draw_rect(to_rect(rect), &stroke_paint(color, width));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.surface.canvas().draw_circle((center.x, center.y), radius, &fill_paint(color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        self.surface.canvas().draw_circle((center.x, center.y), radius, &stroke_paint(color, width));
    }

    fn fill_wedge(&mut self, center: Point, radius: f32, inner_radius: f32, start: f32, sweep: f32, color: Color) {
        let path = wedge_path(center, radius, inner_radius, start, sweep);
        self.surface.canvas().draw_path(&path, &fill_paint(color));
    }

    fn stroke_wedge(&mut self, center: Point, radius: f32, inner_radius: f32, start: f32, sweep: f32, color: Color, width: f32) {
        let path = wedge_path(center, radius, inner_radius, start, sweep);
        self.surface.canvas().draw_path(&path, &stroke_paint(color, width));
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f32) {
        let Some((first, rest)) = points.split_first() else { return };
        if rest.is_empty() {
            return;
        }
        let mut path = skia::Path::new();
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }
        self.surface.canvas().draw_path(&path, &stroke_paint(color, width));
    }

    fn fill_text(&mut self, text: &str, origin: Point, font: &FontSpec, color: Color) {
        let canvas = self.surface.canvas();
        self.shaper.draw_baseline(canvas, text, origin.x, origin.y, font, to_skia(color));
    }

    fn measure_text(&self, text: &str, font: &FontSpec) -> f32 {
        self.shaper.measure_width(text, font)
    }

    fn encode(&mut self, format: ImageFormat) -> SketchResult<Vec<u8>> {
        match format {
            ImageFormat::Png => self.encode_png(),
            ImageFormat::Jpeg => self.encode_jpeg(),
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_rect(r: RectF) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(color));
    paint
}

fn stroke_paint(color: Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(to_skia(color));
    paint
}

fn wedge_path(center: Point, radius: f32, inner_radius: f32, start: f32, sweep: f32) -> skia::Path {
    let (cx, cy) = (center.x, center.y);
    let outer = skia::Rect::from_ltrb(cx - radius, cy - radius, cx + radius, cy + radius);
    let mut path = skia::Path::new();

    // A full turn is drawn as circles; arc_to collapses a 360 degree sweep.
    if sweep.abs() >= TAU - 1e-4 {
        path.add_circle((cx, cy), radius, None);
        if inner_radius > 0.0 {
            path.add_circle((cx, cy), inner_radius, None);
            path.set_fill_type(skia::PathFillType::EvenOdd);
        }
        return path;
    }

    let (start_deg, sweep_deg) = (start.to_degrees(), sweep.to_degrees());
    if inner_radius > 0.0 {
        let inner = skia::Rect::from_ltrb(cx - inner_radius, cy - inner_radius, cx + inner_radius, cy + inner_radius);
        path.arc_to(outer, start_deg, sweep_deg, true);
        path.arc_to(inner, start_deg + sweep_deg, -sweep_deg, false);
    } else {
        path.move_to((cx, cy));
        path.arc_to(outer, start_deg, sweep_deg, false);
    }
    path.close();
    path
}
