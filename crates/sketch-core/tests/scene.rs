// File: crates/sketch-core/tests/scene.rs
// Purpose: Scene model defaults, paint order, zoom floor and rotation wrap.

use sketch_core::scene::MIN_ZOOM;
use sketch_core::{Scene, Shape, SketchError};

#[test]
fn defaults() {
    let scene = Scene::new();
    assert!(scene.is_empty());
    assert_eq!(scene.zoom_level(), 1.0);
    assert_eq!(scene.rotation_angle(), 0.0);
}

#[test]
fn rectangle_then_circle_keeps_insertion_order() {
    let mut scene = Scene::new();
    scene.add_rectangle();
    scene.add_circle();

    assert_eq!(
        scene.shapes(),
        &[
            Shape::Rectangle { x: 50.0, y: 50.0, width: 100.0, height: 50.0 },
            Shape::Circle { x: 300.0, y: 100.0, radius: 50.0 },
        ]
    );
    assert_eq!(scene.shapes()[0].kind(), "rectangle");
}

#[test]
fn text_lands_at_default_anchor() {
    let mut scene = Scene::new();
    scene.add_text("hello");
    scene.add_text("");
    let texts = scene.texts();
    assert_eq!(texts.len(), 2);
    assert_eq!((texts[0].x, texts[0].y), (100.0, 100.0));
    assert_eq!(texts[0].content, "hello");
    assert_eq!(texts[1].content, "");
}

#[test]
fn twenty_zoom_outs_stop_at_floor() {
    let mut scene = Scene::new();
    for _ in 0..20 {
        scene.zoom_out();
    }
    assert_eq!(scene.zoom_level(), MIN_ZOOM);
    assert_eq!(scene.zoom_level(), 0.1);
}

#[test]
fn zoom_in_adds_a_tenth() {
    let mut scene = Scene::new();
    scene.zoom_in();
    scene.zoom_in();
    assert!((scene.zoom_level() - 1.2).abs() < 1e-12);
    scene.zoom_out();
    assert!((scene.zoom_level() - 1.1).abs() < 1e-12);
}

#[test]
fn set_zoom_clamps_nan_and_negative() {
    let mut scene = Scene::new();
    scene.set_zoom(-3.0);
    assert_eq!(scene.zoom_level(), MIN_ZOOM);
    scene.set_zoom(f64::NAN);
    assert_eq!(scene.zoom_level(), MIN_ZOOM);
    scene.set_zoom(2.5);
    assert_eq!(scene.zoom_level(), 2.5);
}

#[test]
fn eight_rotations_close_the_circle() {
    let mut scene = Scene::new();
    let mut seen = Vec::new();
    for _ in 0..8 {
        scene.rotate();
        seen.push(scene.rotation_angle());
    }
    assert_eq!(seen, vec![45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0, 0.0]);
}

#[test]
fn reset_view_restores_identity() {
    let mut scene = Scene::new();
    scene.zoom_in();
    scene.rotate();
    scene.add_circle();
    scene.reset_view();
    assert_eq!(scene.zoom_level(), 1.0);
    assert_eq!(scene.rotation_angle(), 0.0);
    assert_eq!(scene.shapes().len(), 1);
}

#[test]
fn checked_constructors_reject_bad_extents() {
    assert!(Shape::rectangle(0.0, 0.0, 10.0, 0.0).is_ok());
    assert!(Shape::circle(5.0, 5.0, 0.0).is_ok());

    let err = Shape::rectangle(0.0, 0.0, -1.0, 5.0).unwrap_err();
    assert!(matches!(err, SketchError::InvalidGeometry { what: "width", .. }));
    let err = Shape::rectangle(0.0, 0.0, 1.0, f32::INFINITY).unwrap_err();
    assert!(matches!(err, SketchError::InvalidGeometry { what: "height", .. }));
    let err = Shape::circle(0.0, 0.0, f32::NAN).unwrap_err();
    assert!(matches!(err, SketchError::InvalidGeometry { what: "radius", .. }));
}
