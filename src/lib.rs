//! Logoreveal animates a logo reveal with particles.
//!
//! A swarm drifts through a noise flow field, converges onto points sampled from the rendered
//! logo text, then fades out while the surrounding UI is revealed. The engine is headless:
//!
//! - Configure a [`LogoConfig`] (JSON, every field defaulted)
//! - Build an [`AnimationController`] with a [`NoiseSource`] and a [`GlyphRasterizer`]
//! - Call `setup` once, `tick` every frame against any [`RenderSurface`], and `resize` on size
//!   changes
//!
//! [`HeadlessHost`] runs that loop at a fixed frame rate on a [`CpuSurface`] and produces
//! [`FrameRGBA`] frames.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Animation phases, controller and UI events.
pub mod animation;
/// Configuration model and validation.
pub mod config;
/// Coherent noise and flow-field forces.
pub mod flow;
/// Hex palette parsing and HSB colors.
pub mod palette;
/// Particle state and per-phase motion.
pub mod particle;
/// Drawing surfaces, frame sinks and the headless host.
pub mod render;
/// Text rasterization and target-point sampling.
pub mod sampling;

pub use crate::foundation::core::{Point, SurfaceSize, TimeMs, Vec2};
pub use crate::foundation::error::{LogoError, LogoResult};
pub use crate::foundation::math::{constrain, limit, map_range, with_magnitude};

pub use crate::animation::{
    AnimationClock, AnimationController, FrameReport, LogoEvents, NoEvents, Phase, UiReveal,
};
pub use crate::config::{FontSpec, LogoConfig, MotionConfig, Timing};
pub use crate::flow::{NoiseSource, PerlinNoise, flow_force};
pub use crate::palette::color::Hsba;
pub use crate::palette::{Palette, PaletteDef};
pub use crate::particle::{Particle, ParticleId, StepCtx};
pub use crate::render::{
    CpuSurface, DrawCommand, FrameRGBA, FrameSink, HeadlessHost, HostOpts, InMemorySink,
    PngSequenceSink, RecordingSurface, RenderStats, RenderSurface, SinkConfig,
};
pub use crate::sampling::{
    AlphaMask, GlyphRasterizer, SvgTextRasterizer, TargetPointSet, TextPointSampler,
};
