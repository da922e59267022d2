// File: crates/sketch-core/src/render.rs
// Summary: Full-redraw pipeline compositing chart, shapes and text under the scene's zoom/rotation.

use log::trace;

use crate::chart::ChartAdapter;
use crate::geometry::{Affine, Point, RectF};
use crate::scene::{Scene, Shape};
use crate::surface::{DrawSurface, FontSpec};
use crate::theme::Theme;

/// Font size for text annotations.
pub const TEXT_SIZE: f32 = 20.0;

/// Repaint the whole surface from `scene`.
///
/// Order: clear, push the center-pivoted scale+rotate transform, chart, shapes
/// (insertion order), texts (insertion order), pop the transform.
pub fn render_scene(scene: &Scene, chart: &mut ChartAdapter, surface: &mut dyn DrawSurface, theme: &Theme) {
    trace!(
        "render: {} shapes, {} texts, zoom {:.2}, rotation {}",
        scene.shapes().len(),
        scene.texts().len(),
        scene.zoom_level(),
        scene.rotation_angle()
    );
    surface.clear();

    surface.save();
    let (cx, cy) = (surface.width() / 2.0, surface.height() / 2.0);
    let zoom = scene.zoom_level() as f32;
    surface.translate(cx, cy);
    surface.scale(zoom, zoom);
    surface.rotate(scene.rotation_angle().to_radians() as f32);
    surface.translate(-cx, -cy);

    chart.repaint(surface);

    for shape in scene.shapes() {
        match *shape {
            Shape::Rectangle { x, y, width, height } => {
                surface.fill_rect(RectF::from_xywh(x, y, width, height), theme.rectangle_fill);
            }
            Shape::Circle { x, y, radius } => {
                surface.fill_circle(Point::new(x, y), radius, theme.circle_fill);
            }
        }
    }

    let font = FontSpec::sans(TEXT_SIZE);
    for text in scene.texts() {
        surface.fill_text(&text.content, Point::new(text.x, text.y), &font, theme.text);
    }

    surface.restore();
}

/// Matrix the pipeline applies to shapes and text for a `width` x `height` surface.
pub fn view_matrix(scene: &Scene, width: f32, height: f32) -> Affine {
    let (cx, cy) = (width / 2.0, height / 2.0);
    let zoom = scene.zoom_level() as f32;
    Affine::IDENTITY
        .translate(cx, cy)
        .scale(zoom, zoom)
        .rotate(scene.rotation_angle().to_radians() as f32)
        .translate(-cx, -cy)
}
