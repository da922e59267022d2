// File: crates/sketch-core/src/export.rs
// Summary: Export path: encode the surface's current pixels and hand them to a download sink.

use std::path::{Path, PathBuf};

use base64::Engine as _;
use log::info;

use crate::error::SketchResult;
use crate::surface::{DrawSurface, ImageFormat};

/// Base name of exported files.
pub const EXPORT_STEM: &str = "graphic";

/// An encoded image plus the filename it should be saved under.
#[derive(Clone, Debug, PartialEq)]
pub struct Download {
    pub filename: String,
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

impl Download {
    pub fn new(format: ImageFormat, bytes: Vec<u8>) -> Self {
        Self { filename: format!("{EXPORT_STEM}.{}", format.extension()), format, bytes }
    }

    /// `data:<mime>;base64,<payload>` form of the image.
    pub fn data_uri(&self) -> String {
        let b64 = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{}", self.format.mime_type(), b64)
    }
}

/// Receives finished downloads (browser download, save dialog, directory, ...).
pub trait DownloadSink {
    fn deliver(&mut self, download: Download) -> SketchResult<()>;
}

/// Writes each download into a directory under its suggested filename.
pub struct FileSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), written: Vec::new() }
    }

    pub fn dir(&self) -> &Path { &self.dir }

    /// Paths written so far, oldest first.
    pub fn written(&self) -> &[PathBuf] { &self.written }
}

impl DownloadSink for FileSink {
    fn deliver(&mut self, download: Download) -> SketchResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&download.filename);
        std::fs::write(&path, &download.bytes)?;
        info!("wrote {} ({} bytes)", path.display(), download.bytes.len());
        self.written.push(path);
        Ok(())
    }
}

/// Keeps downloads in memory.
#[derive(Default)]
pub struct MemorySink {
    pub downloads: Vec<Download>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Download> {
        self.downloads.last()
    }
}

impl DownloadSink for MemorySink {
    fn deliver(&mut self, download: Download) -> SketchResult<()> {
        self.downloads.push(download);
        Ok(())
    }
}

/// Encode what is currently on `surface` (no re-render) and deliver it to `sink`.
pub fn export_surface(surface: &mut dyn DrawSurface, format: ImageFormat, sink: &mut dyn DownloadSink) -> SketchResult<()> {
    let bytes = surface.encode(format)?;
    let download = Download::new(format, bytes);
    info!("exporting {} ({} bytes)", download.filename, download.bytes.len());
    sink.deliver(download)
}
