use crate::animation::{AnimationController, FrameReport, UiReveal};
use crate::foundation::core::{SurfaceSize, TimeMs};
use crate::foundation::error::{LogoError, LogoResult};
use crate::render::FrameRGBA;
use crate::render::cpu::CpuSurface;
use crate::render::sink::{FrameSink, SinkConfig};
use crate::render::surface::RenderSurface as _;

/// Fixed-rate host loop settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HostOpts {
    /// Frames per second.
    pub fps: f64,
    /// Host time of frame 0.
    pub start_ms: TimeMs,
}

impl Default for HostOpts {
    fn default() -> Self {
        Self {
            fps: 60.0,
            start_ms: 0.0,
        }
    }
}

/// Counters for a range render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames rendered.
    pub frames: u64,
    /// Frames the controller skipped.
    pub skipped: u64,
    /// Scheduled resizes applied.
    pub resizes: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ScheduledResize {
    at_ms: TimeMs,
    size: SurfaceSize,
}

/// Drives an [`AnimationController`] against a [`CpuSurface`] on a simulated clock.
///
/// Plays the role of the browser render loop: `setup` on construction, one `tick` per frame
/// at `start_ms + index * 1000 / fps`, and resize events delivered before the first frame at or
/// after their scheduled time.
pub struct HeadlessHost {
    controller: AnimationController,
    surface: CpuSurface,
    ui: UiReveal,
    opts: HostOpts,
    resizes: Vec<ScheduledResize>,
    next_frame: u64,
}

impl HeadlessHost {
    /// Host rendering `controller` on a fresh surface of `size`; runs `setup` at `start_ms`.
    #[tracing::instrument(skip(controller))]
    pub fn new(
        mut controller: AnimationController,
        size: SurfaceSize,
        opts: HostOpts,
    ) -> LogoResult<Self> {
        if !opts.fps.is_finite() || opts.fps <= 0.0 {
            return Err(LogoError::validation("fps must be > 0"));
        }
        let surface = CpuSurface::new(size)?;
        controller.setup(size, opts.start_ms);
        let ui = UiReveal::new(controller.config().reveal_elements.iter().cloned());
        Ok(Self {
            controller,
            surface,
            ui,
            opts,
            resizes: Vec::new(),
            next_frame: 0,
        })
    }

    /// Deliver a resize to `size` at host time `at_ms`.
    pub fn schedule_resize(&mut self, at_ms: TimeMs, size: SurfaceSize) {
        self.resizes.push(ScheduledResize { at_ms, size });
        self.resizes.sort_by(|a, b| a.at_ms.total_cmp(&b.at_ms));
    }

    /// Host time of frame `idx`.
    pub fn frame_time(&self, idx: u64) -> TimeMs {
        self.opts.start_ms + (idx as f64) * 1000.0 / self.opts.fps
    }

    /// Index of the next frame [`step`](Self::step) will render.
    pub fn next_frame(&self) -> u64 {
        self.next_frame
    }

    /// Render the next frame.
    pub fn step(&mut self) -> LogoResult<FrameReport> {
        let now = self.frame_time(self.next_frame);
        self.apply_resizes(now)?;
        let report = self.controller.tick(now, &mut self.surface, &mut self.ui);
        self.next_frame += 1;
        Ok(report)
    }

    /// Render every frame up to and including host time `at_ms` and return the last one.
    pub fn render_until(&mut self, at_ms: TimeMs) -> LogoResult<FrameRGBA> {
        while self.frame_time(self.next_frame) <= at_ms {
            self.step()?;
        }
        Ok(self.surface.snapshot())
    }

    /// Render `count` frames into `sink`.
    #[tracing::instrument(skip(self, sink))]
    pub fn render_frames(&mut self, count: u64, sink: &mut dyn FrameSink) -> LogoResult<RenderStats> {
        sink.begin(SinkConfig {
            size: self.surface_size(),
            fps: self.opts.fps,
        })?;
        let mut stats = RenderStats::default();
        for _ in 0..count {
            let idx = self.next_frame;
            let pending = self.resizes.len();
            let report = self.step()?;
            stats.resizes += (pending - self.resizes.len()) as u64;
            stats.frames += 1;
            if report.skipped {
                stats.skipped += 1;
            }
            let frame = self.surface.snapshot();
            sink.push_frame(idx, &report, &frame)?;
        }
        sink.end()?;
        Ok(stats)
    }

    /// Render frames one by one, handing each to `f`.
    pub fn render_frames_with<F>(&mut self, count: u64, mut f: F) -> LogoResult<()>
    where
        F: FnMut(u64, &FrameReport, &FrameRGBA) -> LogoResult<()>,
    {
        for _ in 0..count {
            let idx = self.next_frame;
            let report = self.step()?;
            let frame = self.surface.snapshot();
            f(idx, &report, &frame)?;
        }
        Ok(())
    }

    /// The driven controller.
    pub fn controller(&self) -> &AnimationController {
        &self.controller
    }

    /// UI elements revealed by the formed signal.
    pub fn ui(&self) -> &UiReveal {
        &self.ui
    }

    /// Current surface size.
    pub fn surface_size(&self) -> SurfaceSize {
        self.surface.size()
    }

    /// Current canvas contents.
    pub fn snapshot(&mut self) -> FrameRGBA {
        self.surface.snapshot()
    }

    fn apply_resizes(&mut self, now: TimeMs) -> LogoResult<()> {
        while let Some(next) = self.resizes.first().copied() {
            if next.at_ms > now {
                break;
            }
            self.resizes.remove(0);
            self.surface.resize(next.size)?;
            self.controller.resize(next.size, now);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
