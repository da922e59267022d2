// File: crates/sketch-core/src/lib.rs
// Summary: Core library entry point; exports the scene, chart, render and export API.

pub mod chart;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod geometry;
pub mod grid;
pub mod plot;
pub mod recording;
pub mod render;
pub mod scale;
pub mod scene;
pub mod surface;
pub mod theme;
pub mod types;

pub use chart::{parse_data_values, ChartAdapter, ChartBackend, ChartForm, ChartKind, ChartSpec, RenderableChart};
pub use config::SketchConfig;
pub use controller::{Action, Controller, CHART_UPDATED_STATUS};
pub use error::{SketchError, SketchResult};
pub use export::{export_surface, Download, DownloadSink, FileSink, MemorySink};
pub use geometry::{Affine, Point, RectF};
pub use plot::{ChartOptions, PlotBackend};
pub use recording::{DrawOp, RecordingSurface};
pub use render::{render_scene, view_matrix};
pub use scene::{Scene, Shape, TextAnnotation};
pub use surface::{DrawSurface, FontSpec, ImageFormat};
pub use theme::Theme;
pub use types::Color;
