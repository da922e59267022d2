// File: crates/sketch-core/src/chart.rs
// Summary: Chart configuration built from form inputs and the adapter owning the single live chart instance.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

use crate::error::{SketchError, SketchResult};
use crate::surface::DrawSurface;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
    Doughnut,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [ChartKind::Bar, ChartKind::Line, ChartKind::Pie, ChartKind::Doughnut];

    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
        }
    }

    /// Radial kinds draw wedges and a legend instead of axes.
    pub fn is_radial(&self) -> bool {
        matches!(self, ChartKind::Pie | ChartKind::Doughnut)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ChartKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SketchError::UnknownChartKind(s.to_string()))
    }
}

/// Raw values of the chart form controls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartForm {
    pub title: String,
    pub chart_type: String,
    pub data_values: String,
}

impl ChartForm {
    pub fn new(title: impl Into<String>, chart_type: impl Into<String>, data_values: impl Into<String>) -> Self {
        Self { title: title.into(), chart_type: chart_type.into(), data_values: data_values.into() }
    }
}

/// Chart configuration; rebuilt from the form on every update.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub values: Vec<f64>,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>, kind: ChartKind, values: Vec<f64>) -> Self {
        Self { title: title.into(), kind, values }
    }

    pub fn from_form(form: &ChartForm) -> SketchResult<Self> {
        let kind = form.chart_type.parse::<ChartKind>()?;
        let values = parse_data_values(&form.data_values);
        let bad = values.iter().filter(|v| v.is_nan()).count();
        if bad > 0 {
            warn!("{bad} of {} data values are not numeric", values.len());
        }
        Ok(Self::new(form.title.clone(), kind, values))
    }

    /// Category labels "Point 1", "Point 2", ... one per value.
    pub fn labels(&self) -> Vec<String> {
        (1..=self.values.len()).map(|i| format!("Point {i}")).collect()
    }
}

/// Split on commas and convert each token; non-numeric tokens become NaN.
pub fn parse_data_values(input: &str) -> Vec<f64> {
    input.split(',').map(parse_number).collect()
}

/// Numeric conversion with form-field semantics: surrounding whitespace is ignored,
/// a blank token is zero, and anything unparseable is NaN.
pub fn parse_number(token: &str) -> f64 {
    let t = token.trim();
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = t.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix).map(|v| v as f64).unwrap_or(f64::NAN);
        }
    }
    // f64::from_str also takes "inf"/"nan"; keep to plain decimal notation.
    if !t.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')) {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

/// A live chart instance bound to a configuration.
pub trait RenderableChart {
    fn spec(&self) -> &ChartSpec;
    /// Redraw the chart onto `surface` using its current configuration.
    fn update(&mut self, surface: &mut dyn DrawSurface);
    /// Release backend resources; the instance is not used afterwards.
    fn destroy(&mut self);
}

/// Factory for chart instances; any charting backend can implement it.
pub trait ChartBackend {
    fn name(&self) -> &'static str;
    fn create(&self, spec: ChartSpec, surface: &dyn DrawSurface) -> Box<dyn RenderableChart>;
}

/// Owns at most one live chart instance.
pub struct ChartAdapter {
    backend: Box<dyn ChartBackend>,
    live: Option<Box<dyn RenderableChart>>,
}

impl ChartAdapter {
    pub fn new(backend: impl ChartBackend + 'static) -> Self {
        Self { backend: Box::new(backend), live: None }
    }

    /// Replace the live chart; the previous instance is destroyed before the new one is created.
    pub fn set_config(&mut self, spec: ChartSpec, surface: &dyn DrawSurface) {
        self.destroy();
        debug!(
            "creating {} chart via {} backend ({} points)",
            spec.kind,
            self.backend.name(),
            spec.values.len()
        );
        self.live = Some(self.backend.create(spec, surface));
    }

    /// Ask the live chart (if any) to redraw itself.
    pub fn repaint(&mut self, surface: &mut dyn DrawSurface) {
        if let Some(chart) = self.live.as_mut() {
            chart.update(surface);
        }
    }

    pub fn destroy(&mut self) {
        if let Some(mut chart) = self.live.take() {
            debug!("destroying {} chart", chart.spec().kind);
            chart.destroy();
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    pub fn spec(&self) -> Option<&ChartSpec> {
        self.live.as_ref().map(|c| c.spec())
    }
}

impl Drop for ChartAdapter {
    fn drop(&mut self) {
        self.destroy();
    }
}
