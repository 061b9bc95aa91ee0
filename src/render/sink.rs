use std::path::PathBuf;

use crate::animation::FrameReport;
use crate::foundation::core::SurfaceSize;
use crate::foundation::error::{LogoError, LogoResult};
use crate::render::FrameRGBA;

/// Configuration passed to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SinkConfig {
    /// Frame size.
    pub size: SurfaceSize,
    /// Frames per second.
    pub fps: f64,
}

/// Consumer of rendered frames.
///
/// `push_frame` is called in strictly increasing frame-index order.
pub trait FrameSink {
    /// Called once before the first frame.
    fn begin(&mut self, cfg: SinkConfig) -> LogoResult<()>;
    /// Consume frame `idx`.
    fn push_frame(&mut self, idx: u64, report: &FrameReport, frame: &FrameRGBA) -> LogoResult<()>;
    /// Called once after the last frame.
    fn end(&mut self) -> LogoResult<()>;
}

/// Keeps every frame in memory. Intended for tests.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(u64, FrameReport, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration from the last `begin`.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Every frame pushed since the last `begin`.
    pub fn frames(&self) -> &[(u64, FrameReport, FrameRGBA)] {
        &self.frames
    }

    /// Whether `end` was called.
    pub fn ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> LogoResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, report: &FrameReport, frame: &FrameRGBA) -> LogoResult<()> {
        self.frames.push((idx, *report, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> LogoResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Writes `<dir>/<prefix>_<index>.png` for every frame.
#[derive(Clone, Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Sink writing into `dir`, created on `begin`.
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            written: Vec::new(),
        }
    }

    /// File path for frame `idx`.
    pub fn path_for(&self, idx: u64) -> PathBuf {
        self.dir.join(format!("{}_{idx:05}.png", self.prefix))
    }

    /// Files written so far, in frame order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, _cfg: SinkConfig) -> LogoResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            LogoError::surface(format!("create output dir '{}': {e}", self.dir.display()))
        })?;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, _report: &FrameReport, frame: &FrameRGBA) -> LogoResult<()> {
        let path = self.path_for(idx);
        frame.save_png(&path)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> LogoResult<()> {
        tracing::info!(frames = self.written.len(), dir = %self.dir.display(), "png sequence written");
        Ok(())
    }
}
