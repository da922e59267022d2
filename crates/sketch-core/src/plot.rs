// File: crates/sketch-core/src/plot.rs
// Summary: Built-in chart backend painting bar, line, pie and doughnut charts through `DrawSurface`.

use std::f32::consts::{FRAC_PI_2, TAU};

use log::debug;

use crate::chart::{ChartBackend, ChartKind, ChartSpec, RenderableChart};
use crate::geometry::{clamp, Point, RectF};
use crate::grid::{format_tick, linspace, nice_step};
use crate::scale::{CategoryScale, ValueScale};
use crate::surface::{DrawSurface, FontSpec};
use crate::theme::Theme;
use crate::types::Insets;

const TITLE_SIZE: f32 = 16.0;
const TITLE_PAD: f32 = 10.0;
const LABEL_SIZE: f32 = 12.0;
const LEGEND_HEIGHT: f32 = 28.0;
const LEGEND_SWATCH: f32 = 12.0;
const POINT_RADIUS: f32 = 3.0;
const DOUGHNUT_CUTOUT: f32 = 0.5;
const Y_TICKS: usize = 6;

/// Layout options applied to every chart the backend creates.
#[derive(Clone, Copy, Debug)]
pub struct ChartOptions {
    /// Follow the surface size on every repaint instead of the size at creation.
    pub responsive: bool,
    /// Keep `aspect_ratio` (width / height) inside the surface instead of filling it.
    pub maintain_aspect_ratio: bool,
    pub aspect_ratio: f32,
    pub display_title: bool,
    pub border_width: f32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            aspect_ratio: 2.0,
            display_title: true,
            border_width: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PlotBackend {
    pub theme: Theme,
    pub options: ChartOptions,
}

impl PlotBackend {
    pub fn new(theme: Theme, options: ChartOptions) -> Self {
        Self { theme, options }
    }
}

impl ChartBackend for PlotBackend {
    fn name(&self) -> &'static str { "plot" }

    fn create(&self, spec: ChartSpec, surface: &dyn DrawSurface) -> Box<dyn RenderableChart> {
        Box::new(PlotChart {
            spec,
            theme: self.theme,
            options: self.options,
            initial_bounds: surface.bounds(),
            destroyed: false,
        })
    }
}

pub struct PlotChart {
    spec: ChartSpec,
    theme: Theme,
    options: ChartOptions,
    initial_bounds: RectF,
    destroyed: bool,
}

impl PlotChart {
    /// Area the chart occupies on `surface`.
    pub fn area(&self, surface: &dyn DrawSurface) -> RectF {
        let container = if self.options.responsive { surface.bounds() } else { self.initial_bounds };
        if !self.options.maintain_aspect_ratio || self.options.aspect_ratio <= 0.0 {
            return container;
        }
        let width = container.width();
        let height = (width / self.options.aspect_ratio).min(container.height());
        RectF::from_xywh(container.left, container.top, height * self.options.aspect_ratio, height)
    }

    fn paint(&self, s: &mut dyn DrawSurface) {
        let area = self.area(s);
        if area.is_empty() {
            return;
        }
        let mut body = area;
        if self.options.display_title && !self.spec.title.is_empty() {
            let font = FontSpec::sans(TITLE_SIZE).bold();
            let w = s.measure_text(&self.spec.title, &font);
            let origin = Point::new(area.center().x - w / 2.0, area.top + TITLE_PAD + TITLE_SIZE * 0.8);
            s.fill_text(&self.spec.title, origin, &font, self.theme.title);
            body.top += TITLE_SIZE + TITLE_PAD * 2.0;
        }
        match self.spec.kind {
            ChartKind::Bar | ChartKind::Line => self.paint_cartesian(s, body),
            ChartKind::Pie | ChartKind::Doughnut => self.paint_radial(s, body),
        }
    }

    fn paint_cartesian(&self, s: &mut dyn DrawSurface, body: RectF) {
        let insets = Insets::default();
        let plot = RectF::from_ltrb(
            body.left + insets.left as f32,
            body.top + 8.0,
            body.right - insets.right as f32,
            body.bottom - insets.bottom as f32,
        );
        if plot.is_empty() {
            return;
        }
        let values = &self.spec.values;
        let fitted = ValueScale::fit(plot.top, plot.bottom, values);
        let step = nice_step(fitted.vmax - fitted.vmin, Y_TICKS);
        let vmin = (fitted.vmin / step).floor() * step;
        let vmax = (fitted.vmax / step).ceil() * step;
        let ys = ValueScale::new_linear(plot.top, plot.bottom, vmin, vmax);
        let xs = CategoryScale::new(plot.left, plot.right, values.len());

        draw_grid(s, plot, &ys, step, &self.theme);
        draw_axes(s, plot, &self.theme);
        self.draw_category_labels(s, plot, &xs);

        if self.spec.kind == ChartKind::Bar {
            self.draw_bars(s, &xs, &ys);
        } else {
            self.draw_line(s, &xs, &ys);
        }
    }

    fn draw_category_labels(&self, s: &mut dyn DrawSurface, plot: RectF, xs: &CategoryScale) {
        let font = FontSpec::sans(LABEL_SIZE);
        for (i, label) in self.spec.labels().iter().enumerate() {
            let w = s.measure_text(label, &font);
            let origin = Point::new(xs.center_px(i) - w / 2.0, plot.bottom + LABEL_SIZE + 6.0);
            s.fill_text(label, origin, &font, self.theme.axis_label);
        }
    }

    fn draw_bars(&self, s: &mut dyn DrawSurface, xs: &CategoryScale, ys: &ValueScale) {
        // category share 0.8, bar share 0.9
        let bar_w = xs.band() * 0.8 * 0.9;
        let base = ys.to_px(0.0);
        for (i, &v) in self.spec.values.iter().enumerate() {
            if !v.is_finite() {
                continue;
            }
            let cx = xs.center_px(i);
            let y = ys.to_px(v);
            let rect = RectF::from_ltrb(cx - bar_w / 2.0, y.min(base), cx + bar_w / 2.0, y.max(base));
            s.fill_rect(rect, self.theme.point_color(i));
            s.stroke_rect(rect, self.theme.chart_border, self.options.border_width);
        }
    }

    fn draw_line(&self, s: &mut dyn DrawSurface, xs: &CategoryScale, ys: &ValueScale) {
        // NaN points break the line into separate runs.
        let mut run: Vec<Point> = Vec::new();
        let mut markers: Vec<(usize, Point)> = Vec::new();
        for (i, &v) in self.spec.values.iter().enumerate() {
            if v.is_finite() {
                let p = Point::new(xs.center_px(i), ys.to_px(v));
                run.push(p);
                markers.push((i, p));
            } else if !run.is_empty() {
                s.stroke_polyline(&run, self.theme.chart_border, self.options.border_width);
                run.clear();
            }
        }
        if !run.is_empty() {
            s.stroke_polyline(&run, self.theme.chart_border, self.options.border_width);
        }
        for (i, p) in markers {
            s.fill_circle(p, POINT_RADIUS, self.theme.point_color(i));
            s.stroke_circle(p, POINT_RADIUS, self.theme.chart_border, self.options.border_width);
        }
    }

    fn paint_radial(&self, s: &mut dyn DrawSurface, body: RectF) {
        let labels = self.spec.labels();
        self.draw_legend(s, body, &labels);

        let pie_area = RectF::from_ltrb(body.left, body.top + LEGEND_HEIGHT, body.right, body.bottom);
        if pie_area.is_empty() {
            return;
        }
        let radius = (pie_area.width().min(pie_area.height()) / 2.0 - 8.0).max(0.0);
        let inner = if self.spec.kind == ChartKind::Doughnut { radius * DOUGHNUT_CUTOUT } else { 0.0 };
        let center = pie_area.center();

        let weights: Vec<f64> = self
            .spec
            .values
            .iter()
            .map(|&v| if v.is_finite() && v > 0.0 { v } else { 0.0 })
            .collect();
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return;
        }
        // first slice starts at 12 o'clock
        let mut start = -FRAC_PI_2;
        for (i, w) in weights.iter().enumerate() {
            if *w <= 0.0 {
                continue;
            }
            let sweep = (*w / total) as f32 * TAU;
            s.fill_wedge(center, radius, inner, start, sweep, self.theme.point_color(i));
            s.stroke_wedge(center, radius, inner, start, sweep, self.theme.chart_border, self.options.border_width);
            start += sweep;
        }
    }

    fn draw_legend(&self, s: &mut dyn DrawSurface, body: RectF, labels: &[String]) {
        if labels.is_empty() {
            return;
        }
        let font = FontSpec::sans(LABEL_SIZE);
        let gap = 10.0;
        let widths: Vec<f32> = labels.iter().map(|l| LEGEND_SWATCH + 4.0 + s.measure_text(l, &font)).collect();
        let total: f32 = widths.iter().sum::<f32>() + gap * (labels.len() as f32 - 1.0);
        let mut x = clamp(body.center().x - total / 2.0, body.left, body.right);
        let y = body.top + (LEGEND_HEIGHT - LEGEND_SWATCH) / 2.0;
        for (i, (label, w)) in labels.iter().zip(&widths).enumerate() {
            let swatch = RectF::from_xywh(x, y, LEGEND_SWATCH, LEGEND_SWATCH);
            s.fill_rect(swatch, self.theme.point_color(i));
            s.stroke_rect(swatch, self.theme.chart_border, self.options.border_width);
            s.fill_text(label, Point::new(x + LEGEND_SWATCH + 4.0, y + LABEL_SIZE - 1.0), &font, self.theme.axis_label);
            x += w + gap;
        }
    }
}

impl RenderableChart for PlotChart {
    fn spec(&self) -> &ChartSpec { &self.spec }

    fn update(&mut self, surface: &mut dyn DrawSurface) {
        if self.destroyed {
            return;
        }
        // The chart lays itself out in surface pixels, independent of the scene transform.
        surface.save();
        surface.reset_transform();
        self.paint(surface);
        surface.restore();
    }

    fn destroy(&mut self) {
        if !self.destroyed {
            debug!("plot chart '{}' released", self.spec.title);
            self.destroyed = true;
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(s: &mut dyn DrawSurface, plot: RectF, ys: &ValueScale, step: f64, theme: &Theme) {
    let span = ys.vmax - ys.vmin;
    if !span.is_finite() || !step.is_finite() || step <= 0.0 {
        return;
    }
    let font = FontSpec::sans(LABEL_SIZE);
    let ticks = ((span / step).round() as usize).saturating_add(1).clamp(2, Y_TICKS * 2);
    for v in linspace(ys.vmin, ys.vmax, ticks) {
        let y = ys.to_px(v);
        s.stroke_polyline(&[Point::new(plot.left, y), Point::new(plot.right, y)], theme.grid, 1.0);
        let label = format_tick(v);
        let w = s.measure_text(&label, &font);
        s.fill_text(&label, Point::new(plot.left - 6.0 - w, y + LABEL_SIZE * 0.35), &font, theme.axis_label);
    }
}

fn draw_axes(s: &mut dyn DrawSurface, plot: RectF, theme: &Theme) {
    s.stroke_polyline(&[Point::new(plot.left, plot.bottom), Point::new(plot.right, plot.bottom)], theme.axis_line, 1.0);
    s.stroke_polyline(&[Point::new(plot.left, plot.top), Point::new(plot.left, plot.bottom)], theme.axis_line, 1.0);
}
