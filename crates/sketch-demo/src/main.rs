// File: crates/sketch-demo/src/main.rs
// Summary: Replays a scripted list of user actions against a Skia-backed controller and exports the result.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use sketch_core::{Action, ChartForm, FileSink, ImageFormat, SketchConfig};
use sketch_render_skia::controller_from_config;

#[derive(Parser, Debug)]
#[command(name = "sketch-demo", version, about = "Compose a chart with shapes and text, then export it as an image")]
struct Cli {
    /// Chart title
    #[arg(long, default_value = "Monthly sales")]
    title: String,

    /// Chart type: bar, line, pie or doughnut
    #[arg(long = "chart-type", default_value = "bar")]
    chart_type: String,

    /// Comma-separated data values
    #[arg(long, default_value = "12,19,3,5,2,3")]
    data: String,

    /// Export format (png or jpeg); overrides the config file
    #[arg(short, long, value_parser = parse_format)]
    format: Option<ImageFormat>,

    /// Directory the exported file is written to
    #[arg(short, long, value_name = "DIR", default_value = "target/out")]
    out_dir: PathBuf,

    /// Host viewport size; the surface takes 90% x 40% of it
    #[arg(long, value_name = "WxH", value_parser = parse_viewport)]
    viewport: Option<Viewport>,

    /// JSON config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Actions in order: rect, circle, text=<content>, text (cancelled prompt),
    /// zoom-in, zoom-out, rotate, chart, export[=png|jpeg]
    actions: Vec<String>,
}

#[derive(Clone, Copy, Debug)]
struct Viewport {
    width: u32,
    height: u32,
}

fn parse_viewport(s: &str) -> Result<Viewport, String> {
    let (w, h) = s.split_once(['x', 'X']).ok_or_else(|| format!("expected WxH, got {s:?}"))?;
    let width = w.trim().parse::<u32>().map_err(|e| format!("width: {e}"))?;
    let height = h.trim().parse::<u32>().map_err(|e| format!("height: {e}"))?;
    Ok(Viewport { width, height })
}

fn parse_format(s: &str) -> Result<ImageFormat, String> {
    s.parse::<ImageFormat>().map_err(|e| e.to_string())
}

const DEFAULT_SCRIPT: &[&str] = &["chart", "rect", "circle", "text=Hello, chart!", "export"];

fn parse_action(raw: &str, form: &ChartForm, format: ImageFormat) -> Result<Action> {
    let (name, arg) = match raw.split_once('=') {
        Some((n, a)) => (n, Some(a)),
        None => (raw, None),
    };
    let action = match (name.trim().to_ascii_lowercase().as_str(), arg) {
        ("rect" | "rectangle", None) => Action::AddRectangle,
        ("circle", None) => Action::AddCircle,
        ("text", content) => Action::AddText(content.map(str::to_string)),
        ("zoom-in", None) => Action::ZoomIn,
        ("zoom-out", None) => Action::ZoomOut,
        ("rotate", None) => Action::Rotate,
        ("chart", None) => Action::UpdateChart(form.clone()),
        ("export", None) => Action::Export(format),
        ("export", Some(f)) => Action::Export(f.parse::<ImageFormat>()?),
        _ => bail!("unknown action {raw:?}"),
    };
    Ok(action)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SketchConfig::load(path).with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => SketchConfig::default(),
    };
    if let Some(vp) = cli.viewport {
        config = config.with_viewport(vp.width, vp.height);
    }
    let format = cli.format.unwrap_or(config.export_format);

    let form = ChartForm::new(&cli.title, &cli.chart_type, &cli.data);
    let raw: Vec<&str> = if cli.actions.is_empty() {
        DEFAULT_SCRIPT.to_vec()
    } else {
        cli.actions.iter().map(String::as_str).collect()
    };
    let mut script = raw
        .iter()
        .map(|r| parse_action(r, &form, format))
        .collect::<Result<Vec<_>>>()?;
    if !script.iter().any(|a| matches!(a, Action::Export(_))) {
        script.push(Action::Export(format));
    }

    let mut controller = controller_from_config(&config).context("failed to create drawing surface")?;
    let (w, h) = controller.surface().size();
    println!("Surface: {}x{} (viewport {}x{})", w, h, config.viewport_width, config.viewport_height);

    let mut sink = FileSink::new(&cli.out_dir);
    for action in script {
        let label = format!("{:?}", action);
        let updates_chart = matches!(action, Action::UpdateChart(_));
        controller.dispatch(action, &mut sink).with_context(|| format!("action {label} failed"))?;
        info!("applied {label}");
        if updates_chart {
            if let Some(status) = controller.status() {
                println!("Status: {status}");
            }
        }
    }

    let scene = controller.scene();
    println!(
        "Scene: {} shapes, {} texts, zoom {:.1}, rotation {}",
        scene.shapes().len(),
        scene.texts().len(),
        scene.zoom_level(),
        scene.rotation_angle()
    );
    for path in sink.written() {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
