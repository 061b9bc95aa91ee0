//! Animation configuration.
//!
//! Every field has a default matching the reference animation, so an empty JSON object is a
//! valid configuration.

use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::core::Vec2;
use crate::foundation::error::{LogoError, LogoResult};
use crate::palette::PaletteDef;

/// Phase and fade durations in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Length of the dispersed phase.
    pub intro_ms: f64,
    /// Length of the forming phase.
    pub form_ms: f64,
    /// Fade-out length for particles that arrived at their target.
    pub particle_fade_ms: f64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            intro_ms: 3000.0,
            form_ms: 4000.0,
            particle_fade_ms: 1000.0,
        }
    }
}

/// Motion and shading constants.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Speed cap at the end of the dispersed phase and for untargeted coasting.
    pub base_max_speed: f64,
    /// Speed cap at the start of the dispersed phase.
    pub intro_start_speed: f64,
    /// Spatial frequency of the flow field.
    pub flow_field_scale: f64,
    /// Radians per unit of noise for the flow direction.
    pub flow_angle_range: f64,
    /// Magnitude of the flow force added per frame.
    pub flow_force: f64,
    /// Steering gain applied to `desired - velocity`.
    pub steer_gain: f64,
    /// Desired seek speed at the start of the forming phase.
    pub forming_speed_start: f64,
    /// Desired seek speed at the end of the forming phase.
    pub forming_speed_end: f64,
    /// Distance below which a particle snaps onto its target.
    pub arrival_threshold: f64,
    /// Per-frame acceleration decay.
    pub acceleration_damping: f64,
    /// Noise offset advance per frame.
    pub noise_step: f64,
    /// Particle diameter range `[lo, hi)`.
    pub size_range: [f64; 2],
    /// Per-particle noise seed range `[0, hi)`.
    pub noise_seed_range: f64,
    /// Alpha ceiling for particle rendering.
    pub max_alpha: f64,
    /// Particles at or below this alpha are not drawn.
    pub min_render_alpha: f64,
    /// Saturation/brightness jitter amplitude in percent.
    pub shimmer_amplitude: f64,
    /// Time scale applied to the noise offset for shimmer.
    pub shimmer_time_scale: f64,
    /// Noise-space offset separating brightness from saturation jitter.
    pub shimmer_brightness_offset: f64,
    /// Alpha of the per-frame background tint (motion trails).
    pub background_tint_alpha: f64,
    /// Off-surface position for fully faded particles.
    pub parked_position: [f64; 2],
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            base_max_speed: 2.0,
            intro_start_speed: 1.0,
            flow_field_scale: 0.005,
            flow_angle_range: 720.0,
            flow_force: 0.1,
            steer_gain: 0.1,
            forming_speed_start: 3.0,
            forming_speed_end: 0.5,
            arrival_threshold: 5.0,
            acceleration_damping: 0.9,
            noise_step: 0.005,
            size_range: [2.0, 5.0],
            noise_seed_range: 10_000.0,
            max_alpha: 0.8,
            min_render_alpha: 0.01,
            shimmer_amplitude: 10.0,
            shimmer_time_scale: 0.5,
            shimmer_brightness_offset: 1000.0,
            background_tint_alpha: 0.1,
            parked_position: [-10_000.0, -10_000.0],
        }
    }
}

impl MotionConfig {
    /// Off-surface position for fully faded particles.
    pub fn parked(&self) -> Vec2 {
        Vec2::new(self.parked_position[0], self.parked_position[1])
    }
}

/// Font used for the off-screen glyph mask.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FontSpec {
    /// Font family name; generic families are used as fallbacks.
    pub family: String,
    /// Font size as a fraction of the shorter surface side.
    pub scale: f64,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "Arial".to_owned(),
            scale: 0.15,
        }
    }
}

impl FontSpec {
    /// Font size in pixels for a surface whose shorter side is `min_side`.
    pub fn size_px(&self, min_side: u32) -> f64 {
        f64::from(min_side) * self.scale
    }
}

/// Full animation configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Logo text rendered into the glyph mask.
    pub text: String,
    /// Font used for the glyph mask.
    pub font: FontSpec,
    /// Number of particles.
    pub particle_count: usize,
    /// Grid stride used when sampling the glyph mask.
    pub sample_gap: u32,
    /// Phase and fade durations.
    pub timing: Timing,
    /// Particle motion and rendering constants.
    pub motion: MotionConfig,
    /// Background and particle colors as hex strings.
    pub palette: PaletteDef,
    /// Seed for particle creation. `None` seeds from the system clock.
    pub seed: Option<u64>,
    /// UI element ids revealed when the logo is formed.
    pub reveal_elements: Vec<String>,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            text: "MOODSCAPE".to_owned(),
            font: FontSpec::default(),
            particle_count: 300,
            sample_gap: 10,
            timing: Timing::default(),
            motion: MotionConfig::default(),
            palette: PaletteDef::default(),
            seed: None,
            reveal_elements: vec![
                "moodscape-title".to_owned(),
                "moodscape-slogan".to_owned(),
                "enter-button-container".to_owned(),
            ],
        }
    }
}

impl LogoConfig {
    /// Load a JSON configuration file and validate it.
    pub fn from_path(path: &Path) -> LogoResult<Self> {
        let f = File::open(path)
            .map_err(|e| LogoError::config(format!("open '{}': {e}", path.display())))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| LogoError::serde(format!("parse '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a JSON string and validate it.
    pub fn from_json(json: &str) -> LogoResult<Self> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|e| LogoError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject non-finite or out-of-range values and unparsable colors.
    pub fn validate(&self) -> LogoResult<()> {
        let t = &self.timing;
        for (name, v) in [
            ("timing.intro_ms", t.intro_ms),
            ("timing.form_ms", t.form_ms),
            ("timing.particle_fade_ms", t.particle_fade_ms),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(LogoError::validation(format!("{name} must be > 0")));
            }
        }
        if self.sample_gap == 0 {
            return Err(LogoError::validation("sample_gap must be > 0"));
        }
        if !self.font.scale.is_finite() || self.font.scale <= 0.0 {
            return Err(LogoError::validation("font.scale must be > 0"));
        }

        let m = &self.motion;
        let finite = [
            m.base_max_speed,
            m.intro_start_speed,
            m.flow_field_scale,
            m.flow_angle_range,
            m.flow_force,
            m.steer_gain,
            m.forming_speed_start,
            m.forming_speed_end,
            m.arrival_threshold,
            m.acceleration_damping,
            m.noise_step,
            m.size_range[0],
            m.size_range[1],
            m.noise_seed_range,
            m.max_alpha,
            m.min_render_alpha,
            m.shimmer_amplitude,
            m.shimmer_time_scale,
            m.shimmer_brightness_offset,
            m.background_tint_alpha,
            m.parked_position[0],
            m.parked_position[1],
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(LogoError::validation("motion constants must be finite"));
        }
        if m.size_range[0] <= 0.0 || m.size_range[0] >= m.size_range[1] {
            return Err(LogoError::validation(
                "motion.size_range must satisfy 0 < lo < hi",
            ));
        }
        if m.noise_seed_range <= 0.0 {
            return Err(LogoError::validation("motion.noise_seed_range must be > 0"));
        }
        if !(0.0..=1.0).contains(&m.acceleration_damping) {
            return Err(LogoError::validation(
                "motion.acceleration_damping must be in [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&m.max_alpha) {
            return Err(LogoError::validation("motion.max_alpha must be in [0, 1]"));
        }
        if m.arrival_threshold <= 0.0 {
            return Err(LogoError::validation("motion.arrival_threshold must be > 0"));
        }

        if self.palette.particle_colors.is_empty() {
            return Err(LogoError::validation(
                "palette must contain at least one particle color",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
