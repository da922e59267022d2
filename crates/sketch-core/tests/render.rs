// File: crates/sketch-core/tests/render.rs
// Purpose: Render pipeline call order, transform and idempotence, checked on a recording surface.

use std::f32::consts::FRAC_PI_2;

use sketch_core::{
    view_matrix, Affine, ChartAdapter, ChartKind, ChartSpec, Color, DrawOp, PlotBackend, Point, RecordingSurface,
    Scene, Theme,
};
use sketch_core::render::render_scene;

const W: f32 = 400.0;
const H: f32 = 200.0;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
}

fn affine_close(a: Affine, b: Affine) -> bool {
    [a.a - b.a, a.b - b.b, a.c - b.c, a.d - b.d, a.e - b.e, a.f - b.f].iter().all(|d| d.abs() < 1e-3)
}

#[test]
fn empty_scene_leaves_surface_blank() {
    let scene = Scene::new();
    let mut chart = ChartAdapter::new(PlotBackend::default());
    let mut surface = RecordingSurface::new(W, H);
    let theme = Theme::default();

    render_scene(&scene, &mut chart, &mut surface, &theme);
    let first = surface.since_clear().to_vec();
    render_scene(&scene, &mut chart, &mut surface, &theme);

    assert!(surface.is_blank());
    assert_eq!(surface.since_clear(), first.as_slice());
    assert_eq!(
        first,
        vec![
            DrawOp::Clear,
            DrawOp::Save,
            DrawOp::Translate { dx: W / 2.0, dy: H / 2.0 },
            DrawOp::Scale { sx: 1.0, sy: 1.0 },
            DrawOp::Rotate { radians: 0.0 },
            DrawOp::Translate { dx: -W / 2.0, dy: -H / 2.0 },
            DrawOp::Restore,
        ]
    );
    assert_eq!(surface.save_depth(), 0);
}

#[test]
fn transform_pivots_on_surface_center() {
    let mut scene = Scene::new();
    scene.zoom_in();
    scene.rotate();
    scene.rotate();
    let mut chart = ChartAdapter::new(PlotBackend::default());
    let mut surface = RecordingSurface::new(W, H);
    render_scene(&scene, &mut chart, &mut surface, &Theme::default());

    let ops = surface.since_clear();
    assert!(matches!(ops[3], DrawOp::Scale { sx, sy } if (sx - 1.1).abs() < 1e-6 && sx == sy));
    assert!(matches!(ops[4], DrawOp::Rotate { radians } if (radians - FRAC_PI_2).abs() < 1e-6));

    let m = view_matrix(&scene, W, H);
    let c = Point::new(W / 2.0, H / 2.0);
    assert!(close(m.apply(c), c));
    // +x turns toward +y
    assert!(close(m.apply(Point::new(c.x + 10.0, c.y)), Point::new(c.x, c.y + 11.0)));
}

#[test]
fn chart_then_shapes_then_text() {
    let mut scene = Scene::new();
    scene.add_text("late");
    scene.add_rectangle();
    scene.add_circle();
    scene.rotate();

    let mut chart = ChartAdapter::new(PlotBackend::default());
    let mut surface = RecordingSurface::new(W, H);
    chart.set_config(ChartSpec::new("T", ChartKind::Bar, vec![3.0, 1.0]), &surface);
    let theme = Theme::default();
    render_scene(&scene, &mut chart, &mut surface, &theme);

    let painted = surface.painted();
    let n = painted.len();
    let rect_at = painted
        .iter()
        .position(|op| matches!(op, DrawOp::FillRect { color, .. } if *color == theme.rectangle_fill))
        .expect("rectangle painted");
    let circle_at = painted
        .iter()
        .position(|op| matches!(op, DrawOp::FillCircle { color, .. } if *color == theme.circle_fill))
        .expect("circle painted");

    // everything before the rectangle belongs to the chart and ignores the scene transform
    assert!(rect_at > 0);
    assert!(painted[..rect_at].iter().all(|op| op.matrix().map_or(false, |m| m.is_identity())));
    assert_eq!(circle_at, rect_at + 1);
    assert_eq!(n, circle_at + 2);
    match painted[n - 1] {
        DrawOp::Text { text, origin, size, color, matrix } => {
            assert_eq!(text, "late");
            assert_eq!(*origin, Point::new(100.0, 100.0));
            assert_eq!(*size, 20.0);
            assert_eq!(*color, Color::BLACK);
            assert!(affine_close(*matrix, view_matrix(&scene, W, H)));
        }
        other => panic!("expected text last, got {other:?}"),
    }
    assert_eq!(surface.since_clear().last(), Some(&DrawOp::Restore));
    assert_eq!(surface.save_depth(), 0);
}

#[test]
fn shape_colors_are_translucent() {
    let theme = Theme::default();
    assert_eq!(theme.rectangle_fill, Color::from_argb(128, 75, 192, 192));
    assert_eq!(theme.circle_fill, Color::from_argb(128, 192, 75, 192));
    assert_eq!(theme.chart_border, Color::from_argb(255, 75, 192, 192));
}
