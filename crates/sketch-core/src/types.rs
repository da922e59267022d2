// File: crates/sketch-core/src/types.rs
// Summary: Shared types and constants (default geometry, colors, paddings).

use serde::{Deserialize, Serialize};

/// Default viewport width used when no host size is known.
pub const VIEWPORT_WIDTH: u32 = 1280;
/// Default viewport height used when no host size is known.
pub const VIEWPORT_HEIGHT: u32 = 800;

/// Default rectangle geometry for `Scene::add_rectangle` (x, y, width, height).
pub const DEFAULT_RECT: (f32, f32, f32, f32) = (50.0, 50.0, 100.0, 50.0);
/// Default circle geometry for `Scene::add_circle` (center x, center y, radius).
pub const DEFAULT_CIRCLE: (f32, f32, f32) = (300.0, 100.0, 50.0);
/// Default anchor for new text annotations.
pub const DEFAULT_TEXT_POS: (f32, f32) = (100.0, 100.0);

/// Straight (non-premultiplied) RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_argb(0, 0, 0, 0);
    pub const BLACK: Color = Color::from_argb(255, 0, 0, 0);
    pub const WHITE: Color = Color::from_argb(255, 255, 255, 255);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// CSS-style `rgba(r, g, b, alpha)` with alpha in [0, 1].
    pub fn from_rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { r, g, b, a }
    }
}

/// Plot-area margins inside a cartesian chart, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(56, 16, 40, 40)
    }
}
