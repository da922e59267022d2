// File: crates/sketch-render-skia/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout with system font fallback.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use sketch_core::FontSpec;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &FontSpec, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(font.families);
        if font.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, font: &FontSpec, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(font, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, font: &FontSpec) -> f32 {
        // width of the longest line
        self.layout(text, font, skia::Color::TRANSPARENT).longest_line()
    }

    /// Paint `text` so its alphabetic baseline starts at (x, y).
    pub fn draw_baseline(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, font: &FontSpec, color: skia::Color) {
        if text.is_empty() {
            return;
        }
        let p = self.layout(text, font, color);
        p.paint(canvas, (x, y - p.alphabetic_baseline()));
    }
}
