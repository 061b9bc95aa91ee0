use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::animation::FrameReport;
use crate::animation::events::LogoEvents;
use crate::animation::phase::{AnimationClock, Phase};
use crate::config::LogoConfig;
use crate::flow::{NoiseSource, PerlinNoise};
use crate::foundation::core::{SurfaceSize, TimeMs};
use crate::foundation::error::LogoResult;
use crate::palette::Palette;
use crate::particle::{Particle, ParticleId, StepCtx};
use crate::render::surface::RenderSurface;
use crate::sampling::{GlyphRasterizer, SvgTextRasterizer, TargetPointSet, TextPointSampler};

/// Owns the particle population and the phase clock, and runs one frame per [`tick`].
///
/// Lifecycle: [`setup`] once, [`tick`] every frame, [`resize`] whenever the surface changes
/// size. Setup and resize are the same full reset: the glyph mask is resampled, the clock, noise
/// offset and formed flag are cleared, and every particle is recreated at a fresh random
/// position. Nothing from the previous run survives.
///
/// [`tick`]: AnimationController::tick
/// [`setup`]: AnimationController::setup
/// [`resize`]: AnimationController::resize
pub struct AnimationController {
    config: LogoConfig,
    palette: Palette,
    noise: Box<dyn NoiseSource>,
    rasterizer: Box<dyn GlyphRasterizer>,
    sampler: TextPointSampler,
    rng: SmallRng,
    size: SurfaceSize,
    clock: AnimationClock,
    z_off: f64,
    formed_fired: bool,
    needs_clear: bool,
    targets: TargetPointSet,
    particles: Vec<Particle>,
}

impl AnimationController {
    /// Validate `config` and build a controller. No particles exist until [`setup`].
    ///
    /// [`setup`]: AnimationController::setup
    pub fn new(
        config: LogoConfig,
        noise: Box<dyn NoiseSource>,
        rasterizer: Box<dyn GlyphRasterizer>,
    ) -> LogoResult<Self> {
        config.validate()?;
        let palette = Palette::from_def(&config.palette)?;
        let seed = config.seed.unwrap_or_else(clock_seed);
        tracing::debug!(seed, "particle rng seeded");
        Ok(Self {
            sampler: TextPointSampler::new(config.sample_gap),
            rng: SmallRng::seed_from_u64(seed),
            palette,
            noise,
            rasterizer,
            size: SurfaceSize::default(),
            clock: AnimationClock::new(0.0),
            z_off: 0.0,
            formed_fired: false,
            needs_clear: true,
            targets: TargetPointSet::empty(),
            particles: Vec::new(),
            config,
        })
    }

    /// Controller with Perlin noise and system-font text rendering.
    pub fn with_defaults(config: LogoConfig) -> LogoResult<Self> {
        let noise_seed = config.seed.map(|s| s as u32).unwrap_or(0);
        Self::new(
            config,
            Box::new(PerlinNoise::new(noise_seed)),
            Box::new(SvgTextRasterizer::new()),
        )
    }

    /// Start the first animation run.
    #[tracing::instrument(skip(self))]
    pub fn setup(&mut self, size: SurfaceSize, now_ms: TimeMs) {
        self.reset(size, now_ms);
    }

    /// Tear down and rebuild everything for a new surface size.
    #[tracing::instrument(skip(self))]
    pub fn resize(&mut self, size: SurfaceSize, now_ms: TimeMs) {
        tracing::debug!(
            from_width = self.size.width,
            from_height = self.size.height,
            "resize resets the animation"
        );
        self.reset(size, now_ms);
    }

    fn reset(&mut self, size: SurfaceSize, now_ms: TimeMs) {
        self.size = size;
        self.clock.reset(now_ms);
        self.z_off = 0.0;
        self.formed_fired = false;
        self.needs_clear = true;

        // Targets first: particles pick theirs up at creation.
        self.targets = self.sampler.sample_text(
            self.rasterizer.as_mut(),
            &self.config.text,
            size,
            &self.config.font,
        );

        let count = self.config.particle_count;
        let mut particles = Vec::with_capacity(count);
        for i in 0..count {
            particles.push(Particle::spawn(
                ParticleId(i as u32),
                &mut self.rng,
                size,
                &self.palette,
                self.targets.cyclic(i),
                &self.config.motion,
            ));
        }
        self.particles = particles;
    }

    /// Run one frame at host time `now_ms`, drawing into `surface`.
    ///
    /// A zero-size surface skips the frame without touching any state.
    pub fn tick(
        &mut self,
        now_ms: TimeMs,
        surface: &mut dyn RenderSurface,
        events: &mut dyn LogoEvents,
    ) -> FrameReport {
        let surface_size = surface.size();
        if surface_size.is_empty() {
            return FrameReport::skipped(now_ms, self.clock.phase());
        }
        if surface_size != self.size {
            self.resize(surface_size, now_ms);
        }

        if self.needs_clear {
            surface.fill_background(self.palette.background());
            self.needs_clear = false;
        }
        surface.fill_background(
            self.palette
                .background()
                .with_alpha(self.config.motion.background_tint_alpha),
        );

        self.z_off += self.config.motion.noise_step;

        let previous = self.clock.phase();
        let phase = self.clock.observe(now_ms, &self.config.timing);
        if phase != previous {
            tracing::debug!(?previous, ?phase, now_ms, "phase transition");
            events.on_phase(phase, now_ms);
        }

        let mut formed_now = false;
        if phase == Phase::Formed && !self.formed_fired {
            self.formed_fired = true;
            formed_now = true;
            tracing::info!(now_ms, "logo formed");
            events.on_formed(now_ms);
        }

        let ctx = StepCtx {
            now_ms,
            elapsed_ms: self.clock.elapsed(now_ms),
            phase,
            z_off: self.z_off,
            surface: self.size,
            timing: &self.config.timing,
            motion: &self.config.motion,
        };

        let mut drawn = 0;
        let mut fading = 0;
        for p in &mut self.particles {
            if phase == Phase::Formed {
                p.start_fade_out(now_ms);
            }
            p.update(&ctx, self.noise.as_ref());
            if p.show(&ctx, self.noise.as_ref(), surface) {
                drawn += 1;
            }
            if p.fade_start_ms().is_some() {
                fading += 1;
            }
        }
        surface.end_frame();

        let report = FrameReport {
            now_ms,
            elapsed_ms: ctx.elapsed_ms,
            phase,
            formed_now,
            skipped: false,
            drawn,
            fading,
            parked: self.particles.iter().filter(|p| p.is_parked()).count(),
        };
        events.on_frame(&report);
        report
    }

    /// Validated configuration this controller was built with.
    pub fn config(&self) -> &LogoConfig {
        &self.config
    }

    /// Parsed palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Surface size of the current run.
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Last observed phase.
    pub fn phase(&self) -> Phase {
        self.clock.phase()
    }

    /// Elapsed-time clock of the current run.
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// All particles, indexed by [`ParticleId`].
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Particle `id`, if it exists in this run.
    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id.0 as usize)
    }

    /// Target points sampled for the current run.
    pub fn targets(&self) -> &TargetPointSet {
        &self.targets
    }

    /// Whether the formed signal has fired in this run.
    pub fn formed_fired(&self) -> bool {
        self.formed_fired
    }

    /// Global noise offset; advances once per drawn frame.
    pub fn z_offset(&self) -> f64 {
        self.z_off
    }

    /// Alpha particle `id` would be drawn with at `now_ms`.
    pub fn render_alpha(&self, id: ParticleId, now_ms: TimeMs) -> Option<f64> {
        self.particle(id)
            .map(|p| p.render_alpha(now_ms, &self.config.timing, &self.config.motion))
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/controller.rs"]
mod tests;
