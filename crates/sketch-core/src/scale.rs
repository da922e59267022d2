// File: crates/sketch-core/src/scale.rs
// Summary: Category (X) and value (Y) scales used by the plot painter.

/// Value Y coordinate.
pub type Value = f64;

/// Largest magnitude a fitted range keeps; the span between the two ends stays finite.
pub const VALUE_LIMIT: Value = f64::MAX / 4.0;

/// Horizontal category scale: `count` equal bands across [left, right].
#[derive(Clone, Copy, Debug)]
pub struct CategoryScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl CategoryScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px, count }
    }
    /// Width of one category band.
    #[inline]
    pub fn band(&self) -> f32 {
        (self.right_px - self.left_px) / self.count.max(1) as f32
    }
    /// Center of category `index`.
    #[inline]
    pub fn center_px(&self, index: usize) -> f32 {
        self.left_px + self.band() * (index as f32 + 0.5)
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    /// Range covering every finite value and zero, so bars grow from a visible baseline.
    /// Ends are capped at `VALUE_LIMIT`.
    pub fn fit(top_px: f32, bottom_px: f32, values: &[f64]) -> Self {
        let mut vmin = 0.0f64;
        let mut vmax = 0.0f64;
        for &v in values.iter().filter(|v| v.is_finite()) {
            vmin = vmin.min(v);
            vmax = vmax.max(v);
        }
        Self::new_linear(top_px, bottom_px, vmin.max(-VALUE_LIMIT), vmax.min(VALUE_LIMIT))
    }

    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}
