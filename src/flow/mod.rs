//! Coherent noise and its use as a flow field.

use noise::{NoiseFn, Perlin};

use crate::foundation::core::Vec2;
use crate::foundation::math::from_angle;

/// Deterministic coherent noise with outputs in `[0, 1]`.
///
/// Implementations must be continuous and smooth in their inputs and return the same value
/// for the same coordinates.
pub trait NoiseSource {
    /// 2D sample in `[0, 1]`.
    fn noise2(&self, x: f64, y: f64) -> f64;
    /// 3D sample in `[0, 1]`.
    fn noise3(&self, x: f64, y: f64, z: f64) -> f64;
}

/// Perlin noise remapped from `[-1, 1]` to `[0, 1]`.
#[derive(Clone)]
pub struct PerlinNoise {
    noise: Perlin,
    seed: u32,
}

impl PerlinNoise {
    /// Perlin source with the given seed.
    pub fn new(seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
            seed,
        }
    }

    /// Seed the source was built with.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

fn to_unit(v: f64) -> f64 {
    ((v + 1.0) * 0.5).clamp(0.0, 1.0)
}

impl NoiseSource for PerlinNoise {
    fn noise2(&self, x: f64, y: f64) -> f64 {
        to_unit(self.noise.get([x, y]))
    }

    fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        to_unit(self.noise.get([x, y, z]))
    }
}

/// Flow-field force at `position`.
///
/// The direction angle is `noise(x * scale, y * scale, z) * angle_range` radians; `z` carries
/// both the global time offset and the per-particle seed.
pub fn flow_force(
    noise: &dyn NoiseSource,
    position: Vec2,
    z: f64,
    scale: f64,
    angle_range: f64,
    magnitude: f64,
) -> Vec2 {
    let n = noise.noise3(position.x * scale, position.y * scale, z);
    from_angle(n * angle_range) * magnitude
}

#[cfg(test)]
#[path = "../../tests/unit/flow/field.rs"]
mod tests;
