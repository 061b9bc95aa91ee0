//! Particle state and per-phase motion.
//!
//! A particle integrates `acceleration -> velocity -> position` every frame. What feeds the
//! acceleration depends on the animation phase:
//!
//! - **Dispersed**: a flow-field force sampled from coherent noise, speed cap ramping from
//!   `intro_start_speed` to `base_max_speed`, wrapping at the surface edges.
//! - **Forming**: a smoothed seek toward the assigned target; snapping onto it inside the
//!   arrival threshold.
//! - **Formed**: nothing; the speed cap is zero.
//!
//! Acceleration is damped rather than cleared after each step.

use rand::Rng;

use crate::animation::phase::Phase;
use crate::config::{MotionConfig, Timing};
use crate::flow::{NoiseSource, flow_force};
use crate::foundation::core::{SurfaceSize, TimeMs, Vec2};
use crate::foundation::math::{constrain, limit, map_range, with_magnitude};
use crate::palette::Palette;
use crate::palette::color::Hsba;
use crate::render::surface::RenderSurface;

/// Stable identifier of a particle within one animation run.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ParticleId(pub u32);

/// Everything a particle needs to know about the current frame.
#[derive(Clone, Copy, Debug)]
pub struct StepCtx<'a> {
    /// Host time of this frame.
    pub now_ms: TimeMs,
    /// Time since the animation started.
    pub elapsed_ms: f64,
    /// Phase observed for this frame.
    pub phase: Phase,
    /// Global noise offset, advanced once per frame.
    pub z_off: f64,
    /// Surface the particle lives on.
    pub surface: SurfaceSize,
    /// Phase and fade durations.
    pub timing: &'a Timing,
    /// Motion constants.
    pub motion: &'a MotionConfig,
}

/// One particle: motion state, target and fade bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    id: ParticleId,
    position: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    size: f64,
    base_color: Hsba,
    target: Option<Vec2>,
    reached: bool,
    fade_start_ms: Option<TimeMs>,
    noise_seed: f64,
    parked: bool,
}

impl Particle {
    /// Particle at rest at `position`.
    pub fn new(
        id: ParticleId,
        position: Vec2,
        size: f64,
        base_color: Hsba,
        target: Option<Vec2>,
        noise_seed: f64,
    ) -> Self {
        Self {
            id,
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            size,
            base_color,
            target,
            reached: false,
            fade_start_ms: None,
            noise_seed,
            parked: false,
        }
    }

    /// Random particle anywhere on a surface of `surface` size.
    pub fn spawn<R: Rng + ?Sized>(
        id: ParticleId,
        rng: &mut R,
        surface: SurfaceSize,
        palette: &Palette,
        target: Option<Vec2>,
        motion: &MotionConfig,
    ) -> Self {
        let half = surface.half_extent();
        let position = Vec2::new(
            uniform(rng, -half.x, half.x),
            uniform(rng, -half.y, half.y),
        );
        let size = uniform(rng, motion.size_range[0], motion.size_range[1]);
        let color = palette.pick(rng);
        let noise_seed = uniform(rng, 0.0, motion.noise_seed_range);
        Self::new(id, position, size, color, target, noise_seed)
    }

    /// Stable id within the run.
    pub fn id(&self) -> ParticleId {
        self.id
    }

    /// Position in centered coordinates.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Velocity in pixels per frame.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Accumulated acceleration after damping.
    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    /// Diameter in pixels.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Color before shimmer and fade.
    pub fn base_color(&self) -> Hsba {
        self.base_color
    }

    /// Assigned target point, if any.
    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    /// Snapped onto its target; permanent for the run.
    pub fn has_reached_target(&self) -> bool {
        self.reached
    }

    /// When the fade-out began.
    pub fn fade_start_ms(&self) -> Option<TimeMs> {
        self.fade_start_ms
    }

    /// Per-particle offset into the shimmer noise.
    pub fn noise_seed(&self) -> f64 {
        self.noise_seed
    }

    /// `true` once the fade has completed and the particle was moved off-surface.
    pub fn is_parked(&self) -> bool {
        self.parked
    }

    /// Start the fade timer at `now_ms`.
    ///
    /// Only particles that reached their target fade, and the start time is set at most once.
    /// Returns `true` if the timer was started by this call.
    pub fn start_fade_out(&mut self, now_ms: TimeMs) -> bool {
        if self.fade_start_ms.is_some() || !self.reached {
            return false;
        }
        self.fade_start_ms = Some(now_ms);
        true
    }

    /// Advance one frame.
    pub fn update(&mut self, ctx: &StepCtx<'_>, noise: &dyn NoiseSource) {
        let m = ctx.motion;

        if let Some(start) = self.fade_start_ms
            && ctx.now_ms - start > ctx.timing.particle_fade_ms
        {
            self.position = m.parked();
            self.parked = true;
            return;
        }

        let max_speed = match ctx.phase {
            Phase::Dispersed => {
                self.acceleration += flow_force(
                    noise,
                    self.position,
                    ctx.z_off + self.noise_seed,
                    m.flow_field_scale,
                    m.flow_angle_range,
                    m.flow_force,
                );
                map_range(
                    ctx.elapsed_ms,
                    0.0,
                    ctx.timing.intro_ms,
                    m.intro_start_speed,
                    m.base_max_speed,
                )
            }
            Phase::Forming => self.seek(ctx),
            Phase::Formed => 0.0,
        };

        self.velocity = limit(self.velocity + self.acceleration, max_speed);
        self.position += self.velocity;
        self.acceleration *= m.acceleration_damping;

        if ctx.phase == Phase::Dispersed {
            self.wrap(ctx.surface.half_extent());
        }
    }

    /// Forming-phase steering. Returns the speed cap for this frame.
    fn seek(&mut self, ctx: &StepCtx<'_>) -> f64 {
        let m = ctx.motion;
        if self.reached {
            return 0.0;
        }
        // Untargeted particles get no steering force and keep coasting on their residual
        // (damped) acceleration under the base cap.
        let Some(target) = self.target else {
            return m.base_max_speed;
        };

        let speed = map_range(
            ctx.elapsed_ms - ctx.timing.intro_ms,
            0.0,
            ctx.timing.form_ms,
            m.forming_speed_start,
            m.forming_speed_end,
        );
        let steer = target - self.position;
        if steer.hypot() < m.arrival_threshold {
            self.position = target;
            self.velocity = Vec2::ZERO;
            self.acceleration = Vec2::ZERO;
            self.reached = true;
            return 0.0;
        }

        let desired = with_magnitude(steer, speed);
        self.acceleration += (desired - self.velocity) * m.steer_gain;
        speed
    }

    fn wrap(&mut self, half: Vec2) {
        if self.position.x < -half.x {
            self.position.x = half.x;
        }
        if self.position.x > half.x {
            self.position.x = -half.x;
        }
        if self.position.y < -half.y {
            self.position.y = half.y;
        }
        if self.position.y > half.y {
            self.position.y = -half.y;
        }
    }

    /// Alpha the particle would be drawn with at `now_ms`.
    ///
    /// `max_alpha` until the fade starts, then linearly down to zero over the fade duration.
    pub fn render_alpha(&self, now_ms: TimeMs, timing: &Timing, motion: &MotionConfig) -> f64 {
        if self.parked {
            return 0.0;
        }
        match self.fade_start_ms {
            None => motion.max_alpha,
            Some(start) => {
                let progress = map_range(now_ms - start, 0.0, timing.particle_fade_ms, 1.0, 0.0);
                constrain(progress * motion.max_alpha, 0.0, motion.max_alpha)
            }
        }
    }

    /// Base color with noise-driven saturation/brightness shimmer and the given alpha.
    pub fn shimmer_color(
        &self,
        z_off: f64,
        alpha: f64,
        motion: &MotionConfig,
        noise: &dyn NoiseSource,
    ) -> Hsba {
        let t = z_off * motion.shimmer_time_scale;
        let amp = motion.shimmer_amplitude;
        let ds = map_range(noise.noise2(self.noise_seed, t), 0.0, 1.0, -amp, amp);
        let db = map_range(
            noise.noise2(self.noise_seed, t + motion.shimmer_brightness_offset),
            0.0,
            1.0,
            -amp,
            amp,
        );
        let c = self.base_color;
        Hsba::new(
            c.h,
            constrain(c.s + ds, 0.0, 100.0),
            constrain(c.b + db, 0.0, 100.0),
            alpha,
        )
    }

    /// Draw the particle. Returns `false` when it was too transparent to draw.
    pub fn show(
        &self,
        ctx: &StepCtx<'_>,
        noise: &dyn NoiseSource,
        surface: &mut dyn RenderSurface,
    ) -> bool {
        let alpha = self.render_alpha(ctx.now_ms, ctx.timing, ctx.motion);
        if alpha <= ctx.motion.min_render_alpha {
            return false;
        }
        let color = self.shimmer_color(ctx.z_off, alpha, ctx.motion, noise);
        surface.fill_circle(ctx.surface.to_surface(self.position), self.size, color);
        true
    }
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo { rng.gen_range(lo..hi) } else { lo }
}

#[cfg(test)]
#[path = "../../tests/unit/particle/particle.rs"]
mod tests;
