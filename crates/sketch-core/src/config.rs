// File: crates/sketch-core/src/config.rs
// Summary: Canvas and export settings, loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SketchError, SketchResult};
use crate::surface::ImageFormat;
use crate::types::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Host viewport size the surface is derived from.
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Share of the viewport the surface takes, per axis.
    pub width_fraction: f64,
    pub height_fraction: f64,
    pub export_format: ImageFormat,
    /// JPEG quality, 1..=100.
    pub jpeg_quality: u8,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            width_fraction: 0.9,
            height_fraction: 0.4,
            export_format: ImageFormat::Png,
            jpeg_quality: 92,
        }
    }
}

impl SketchConfig {
    pub fn from_json_str(s: &str) -> SketchResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> SketchResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Surface pixel size: each viewport axis times its fraction, truncated.
    pub fn surface_size(&self) -> SketchResult<(u32, u32)> {
        let w = (self.viewport_width as f64 * self.width_fraction).floor();
        let h = (self.viewport_height as f64 * self.height_fraction).floor();
        if !(w >= 1.0 && h >= 1.0) {
            return Err(SketchError::InvalidViewport { width: self.viewport_width, height: self.viewport_height });
        }
        Ok((w as u32, h as u32))
    }

    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality.clamp(1, 100)
    }
}
