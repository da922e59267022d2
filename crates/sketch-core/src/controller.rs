// File: crates/sketch-core/src/controller.rs
// Summary: User-triggered operations; each mutates scene or chart state and then redraws synchronously.

use log::{debug, info};

use crate::chart::{ChartAdapter, ChartBackend, ChartForm, ChartSpec};
use crate::error::SketchResult;
use crate::export::{export_surface, DownloadSink};
use crate::render::render_scene;
use crate::scene::{Scene, Shape};
use crate::surface::{DrawSurface, ImageFormat};
use crate::theme::Theme;

/// Status text shown after a successful chart update.
pub const CHART_UPDATED_STATUS: &str = "Chart updated successfully!";

/// One discrete user action.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    AddRectangle,
    AddCircle,
    /// `None` is a cancelled text prompt.
    AddText(Option<String>),
    ZoomIn,
    ZoomOut,
    Rotate,
    UpdateChart(ChartForm),
    Export(ImageFormat),
}

/// Owns the scene, the chart adapter and the surface they are drawn on.
pub struct Controller<S: DrawSurface> {
    scene: Scene,
    chart: ChartAdapter,
    surface: S,
    theme: Theme,
    status: Option<String>,
}

impl<S: DrawSurface> Controller<S> {
    pub fn new(surface: S, backend: impl ChartBackend + 'static) -> Self {
        Self { scene: Scene::new(), chart: ChartAdapter::new(backend), surface, theme: Theme::default(), status: None }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn scene(&self) -> &Scene { &self.scene }
    pub fn chart(&self) -> &ChartAdapter { &self.chart }
    pub fn surface(&self) -> &S { &self.surface }
    pub fn surface_mut(&mut self) -> &mut S { &mut self.surface }
    pub fn status(&self) -> Option<&str> { self.status.as_deref() }

    /// Full repaint of the surface from the current state.
    pub fn render(&mut self) {
        render_scene(&self.scene, &mut self.chart, &mut self.surface, &self.theme);
    }

    pub fn add_rectangle(&mut self) {
        self.scene.add_rectangle();
        self.render();
    }

    pub fn add_circle(&mut self) {
        self.scene.add_circle();
        self.render();
    }

    /// Append a shape with custom geometry (see `Shape::rectangle` / `Shape::circle`).
    pub fn add_shape(&mut self, shape: Shape) {
        self.scene.push_shape(shape);
        self.render();
    }

    /// Returns false, leaving the scene and surface untouched, when the prompt was cancelled.
    pub fn add_text(&mut self, content: Option<&str>) -> bool {
        let Some(content) = content else {
            debug!("text prompt cancelled; nothing added");
            return false;
        };
        self.scene.add_text(content);
        self.render();
        true
    }

    pub fn zoom_in(&mut self) {
        self.scene.zoom_in();
        self.render();
    }

    pub fn zoom_out(&mut self) {
        self.scene.zoom_out();
        self.render();
    }

    pub fn rotate(&mut self) {
        self.scene.rotate();
        self.render();
    }

    pub fn reset_view(&mut self) {
        self.scene.reset_view();
        self.render();
    }

    /// Rebuild the chart from the form, replacing the live instance.
    pub fn update_chart(&mut self, form: &ChartForm) -> SketchResult<()> {
        let spec = ChartSpec::from_form(form)?;
        self.chart.set_config(spec, &self.surface);
        info!("{}", CHART_UPDATED_STATUS);
        self.status = Some(CHART_UPDATED_STATUS.to_string());
        self.render();
        Ok(())
    }

    /// Encode the pixels already on the surface; does not redraw first.
    pub fn export(&mut self, format: ImageFormat, sink: &mut dyn DownloadSink) -> SketchResult<()> {
        export_surface(&mut self.surface, format, sink)
    }

    pub fn dispatch(&mut self, action: Action, sink: &mut dyn DownloadSink) -> SketchResult<()> {
        debug!("dispatch {:?}", action);
        match action {
            Action::AddRectangle => self.add_rectangle(),
            Action::AddCircle => self.add_circle(),
            Action::AddText(content) => {
                self.add_text(content.as_deref());
            }
            Action::ZoomIn => self.zoom_in(),
            Action::ZoomOut => self.zoom_out(),
            Action::Rotate => self.rotate(),
            Action::UpdateChart(form) => self.update_chart(&form)?,
            Action::Export(format) => self.export(format, sink)?,
        }
        Ok(())
    }

    /// Release the chart instance and hand back the surface.
    pub fn into_surface(mut self) -> S {
        self.chart.destroy();
        self.surface
    }
}
