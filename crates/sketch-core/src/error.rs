// File: crates/sketch-core/src/error.rs
// Summary: Error type shared by the scene, chart adapter, surfaces and export.

use thiserror::Error;

use crate::surface::ImageFormat;

pub type SketchResult<T> = Result<T, SketchError>;

#[derive(Debug, Error)]
pub enum SketchError {
    #[error("invalid {what}: {value} (must be finite and non-negative)")]
    InvalidGeometry { what: &'static str, value: f32 },

    #[error("unknown chart type: {0:?}")]
    UnknownChartKind(String),

    #[error("unknown image format: {0:?}")]
    UnknownImageFormat(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("failed to create {width}x{height} raster surface")]
    SurfaceAllocation { width: u32, height: u32 },

    #[error("encode {0} failed")]
    Encode(ImageFormat),

    #[error("surface cannot encode pixels")]
    EncodeUnsupported,

    #[error("reading surface pixels failed")]
    PixelRead,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(#[from] serde_json::Error),
}
