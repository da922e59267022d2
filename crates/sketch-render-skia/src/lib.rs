// File: crates/sketch-render-skia/src/lib.rs
// Summary: Skia renderer crate; hosts the CPU raster surface and text shaping for sketch-core.

pub mod surface;
pub mod text;

pub use surface::SkiaSurface;
pub use text::TextShaper;

use sketch_core::{Controller, PlotBackend, SketchConfig, SketchResult, Theme};

/// Controller drawing onto a Skia raster surface.
pub type SkiaController = Controller<SkiaSurface>;

/// Surface sized from `config`, with the built-in plot chart backend.
pub fn controller_from_config(config: &SketchConfig) -> SketchResult<SkiaController> {
    let theme = Theme::default();
    let surface = SkiaSurface::from_config(config)?.with_background(theme.background);
    Ok(Controller::new(surface, PlotBackend::default()).with_theme(theme))
}
