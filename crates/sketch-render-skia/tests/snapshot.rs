// File: crates/sketch-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic composite (shapes only, no text) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use sketch_core::{Controller, ImageFormat, MemorySink, PlotBackend, Shape};
use sketch_render_skia::SkiaSurface;

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

#[test]
fn golden_rotated_shapes() {
    let surface = SkiaSurface::new(480, 240).expect("raster surface");
    let mut c = Controller::new(surface, PlotBackend::default());
    c.add_rectangle();
    c.add_circle();
    c.add_shape(Shape::rectangle(200.0, 150.0, 60.0, 30.0).expect("valid"));
    c.rotate();
    c.zoom_in();

    let mut sink = MemorySink::new();
    c.export(ImageFormat::Png, &mut sink).expect("export");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/rotated_shapes.png");
    write_or_compare(&path, &sink.downloads[0].bytes);
}
