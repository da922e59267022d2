// File: crates/sketch-render-skia/tests/pixels.rs
// Purpose: Rasterized output of the render pipeline on a Skia surface.

use sketch_core::{Controller, ChartForm, PlotBackend};
use sketch_render_skia::{SkiaController, SkiaSurface};

const W: u32 = 400;
const H: u32 = 200;

fn controller() -> SkiaController {
    Controller::new(SkiaSurface::new(W, H).expect("raster surface"), PlotBackend::default())
}

fn near(got: [u8; 4], want: [u8; 4]) -> bool {
    got.iter().zip(want).all(|(g, w)| (*g as i32 - w as i32).abs() <= 3)
}

#[test]
fn empty_scene_is_transparent() {
    let mut c = controller();
    c.render();
    c.render();
    let px = c.surface_mut().read_rgba8(false).expect("pixels");
    assert_eq!(px.len(), (W * H * 4) as usize);
    assert!(px.chunks_exact(4).all(|p| p[3] == 0), "surface should be blank");
}

#[test]
fn default_shapes_land_where_expected() {
    let mut c = controller();
    c.add_rectangle();
    c.add_circle();
    let s = c.surface_mut();

    let rect = s.pixel(100, 75).expect("in bounds");
    assert!(near(rect, [75, 192, 192, 128]), "rectangle pixel {rect:?}");
    let circle = s.pixel(300, 100).expect("in bounds");
    assert!(near(circle, [192, 75, 192, 128]), "circle pixel {circle:?}");
    assert_eq!(s.pixel(10, 10).expect("in bounds")[3], 0);
    assert_eq!(s.pixel(W, 0), None);
}

#[test]
fn half_turn_mirrors_through_center() {
    let mut c = controller();
    c.add_rectangle();
    for _ in 0..4 {
        c.rotate();
    }
    let s = c.surface_mut();
    // (50..150, 50..100) maps to (250..350, 100..150)
    assert!(near(s.pixel(300, 125).expect("in bounds"), [75, 192, 192, 128]));
    assert_eq!(s.pixel(100, 75).expect("in bounds")[3], 0);
}

#[test]
fn zoom_scales_about_center() {
    let mut c = controller();
    c.add_rectangle();
    for _ in 0..5 {
        c.zoom_out();
    }
    // zoom 0.5: rectangle spans (125..175, 75..100)
    let s = c.surface_mut();
    assert!(near(s.pixel(150, 88).expect("in bounds"), [75, 192, 192, 128]));
    assert_eq!(s.pixel(60, 60).expect("in bounds")[3], 0);
}

#[test]
fn chart_ignores_scene_transform() {
    let form = ChartForm::new("", "bar", "5,3,8");

    let mut plain = controller();
    plain.update_chart(&form).expect("chart");
    let a = plain.surface_mut().read_rgba8(false).expect("pixels");

    let mut turned = controller();
    turned.rotate();
    turned.zoom_in();
    turned.update_chart(&form).expect("chart");
    let b = turned.surface_mut().read_rgba8(false).expect("pixels");

    assert!(a.chunks_exact(4).any(|p| p[3] != 0), "chart should paint something");
    assert_eq!(a, b);
}

#[test]
fn every_chart_type_renders() {
    for kind in ["bar", "line", "pie", "doughnut"] {
        let mut c = controller();
        c.update_chart(&ChartForm::new("Kinds", kind, "3,1,x,4,1,5,9")).expect("chart");
        let px = c.surface_mut().read_rgba8(false).expect("pixels");
        assert!(px.chunks_exact(4).any(|p| p[3] != 0), "{kind} painted nothing");
    }
}

#[test]
fn text_annotation_renders_without_fonts_configured() {
    let mut c = controller();
    assert!(c.add_text(Some("Hello")));
    assert!(c.add_text(Some("")));
    assert_eq!(c.scene().texts().len(), 2);
}

#[test]
fn single_pixel_read_matches_full_readback() {
    let mut c = controller();
    c.add_circle();
    let s = c.surface_mut();
    let full = s.read_rgba8(false).expect("pixels");
    for (x, y) in [(300u32, 100u32), (0, 0), (W - 1, H - 1), (260, 100)] {
        let i = ((y * W + x) * 4) as usize;
        assert_eq!(s.pixel(x, y), Some([full[i], full[i + 1], full[i + 2], full[i + 3]]), "at ({x}, {y})");
    }
    assert_eq!(s.pixel(0, H), None);
}
