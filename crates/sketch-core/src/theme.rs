// File: crates/sketch-core/src/theme.rs
// Summary: Fixed colour set for annotations and the built-in chart.

use crate::types::Color;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: Color,
    pub rectangle_fill: Color,
    pub circle_fill: Color,
    pub text: Color,
    pub chart_border: Color,
    pub chart_palette: [Color; 6],
    pub title: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    pub fn standard() -> Self {
        Self {
            background: Color::TRANSPARENT,
            rectangle_fill: Color::from_rgba(75, 192, 192, 0.5),
            circle_fill: Color::from_rgba(192, 75, 192, 0.5),
            text: Color::BLACK,
            chart_border: Color::from_rgba(75, 192, 192, 1.0),
            // CSS named colours: red, blue, green, yellow, purple, orange
            chart_palette: [
                Color::from_rgb(255, 0, 0),
                Color::from_rgb(0, 0, 255),
                Color::from_rgb(0, 128, 0),
                Color::from_rgb(255, 255, 0),
                Color::from_rgb(128, 0, 128),
                Color::from_rgb(255, 165, 0),
            ],
            title: Color::from_rgb(102, 102, 102),
            grid: Color::from_argb(26, 0, 0, 0),
            axis_line: Color::from_argb(64, 0, 0, 0),
            axis_label: Color::from_rgb(102, 102, 102),
        }
    }

    /// Palette colour for data point `index`, cycling through the six entries.
    pub fn point_color(&self, index: usize) -> Color {
        self.chart_palette[index % self.chart_palette.len()]
    }
}
