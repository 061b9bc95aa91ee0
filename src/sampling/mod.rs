//! Text-to-point sampling.
//!
//! Text is rasterized into an off-screen [`AlphaMask`] by a [`GlyphRasterizer`] (the host's
//! text primitive), then [`TextPointSampler`] walks a fixed-stride grid over the mask and keeps
//! every cell whose alpha is non-zero.
//!
//! The grid is walked column-major (`x` outer, `y` inner), so the same mask always yields the
//! same ordered point sequence.

pub(crate) mod svg_text;

use crate::config::FontSpec;
use crate::foundation::core::{SurfaceSize, Vec2};
use crate::foundation::error::{LogoError, LogoResult};

/// Single-channel 8-bit alpha buffer, row-major, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

impl AlphaMask {
    /// Fully transparent mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alpha: vec![0; (width as usize) * (height as usize)],
        }
    }

    /// Wrap an existing alpha buffer.
    pub fn from_raw(width: u32, height: u32, alpha: Vec<u8>) -> LogoResult<Self> {
        if alpha.len() != (width as usize) * (height as usize) {
            return Err(LogoError::raster(format!(
                "alpha buffer has {} bytes, expected {}x{}",
                alpha.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            alpha,
        })
    }

    /// Extract the alpha channel from an RGBA8 buffer (straight or premultiplied).
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> LogoResult<Self> {
        if rgba.len() != (width as usize) * (height as usize) * 4 {
            return Err(LogoError::raster(format!(
                "rgba buffer has {} bytes, expected {}x{}x4",
                rgba.len(),
                width,
                height
            )));
        }
        let alpha = rgba.chunks_exact(4).map(|px| px[3]).collect();
        Ok(Self {
            width,
            height,
            alpha,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Alpha at `(x, y)`; zero outside the mask.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.alpha[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set alpha at `(x, y)`; ignored outside the mask.
    pub fn set_alpha(&mut self, x: u32, y: u32, a: u8) {
        if x < self.width && y < self.height {
            self.alpha[(y as usize) * (self.width as usize) + (x as usize)] = a;
        }
    }

    /// Number of non-transparent pixels.
    pub fn coverage(&self) -> usize {
        self.alpha.iter().filter(|&&a| a > 0).count()
    }
}

/// Host text primitive: renders `text` centered on an off-screen buffer of `size`.
///
/// Implementations draw the glyphs filled and unstroked; only the alpha channel is read back.
pub trait GlyphRasterizer {
    /// Render `text` and return its alpha coverage at exactly `size`.
    fn rasterize(
        &mut self,
        text: &str,
        size: SurfaceSize,
        font_family: &str,
        font_size_px: f64,
    ) -> LogoResult<AlphaMask>;
}

/// Ordered target points in canvas-centered coordinates.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TargetPointSet {
    points: Vec<Vec2>,
}

impl TargetPointSet {
    /// Point set in the given order.
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Set with no points.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Points in sampling order.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no points were sampled.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point assigned to particle `index`, cycling through the set.
    ///
    /// Returns `None` for an empty set.
    pub fn cyclic(&self, index: usize) -> Option<Vec2> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.points[index % self.points.len()])
    }
}

/// Fixed-stride grid sampler over a glyph mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextPointSampler {
    gap: u32,
}

impl Default for TextPointSampler {
    fn default() -> Self {
        Self { gap: 10 }
    }
}

impl TextPointSampler {
    /// Sampler with grid stride `gap` (clamped to at least 1).
    pub fn new(gap: u32) -> Self {
        Self { gap: gap.max(1) }
    }

    /// Grid stride in pixels.
    pub fn gap(&self) -> u32 {
        self.gap
    }

    /// Keep every grid cell whose alpha is non-zero, centered on the mask.
    pub fn sample_mask(&self, mask: &AlphaMask) -> TargetPointSet {
        let size = SurfaceSize::new(mask.width(), mask.height());
        let step = self.gap as usize;
        let mut points = Vec::new();
        for x in (0..mask.width()).step_by(step) {
            for y in (0..mask.height()).step_by(step) {
                if mask.alpha_at(x, y) > 0 {
                    points.push(size.to_centered(x, y));
                }
            }
        }
        TargetPointSet::new(points)
    }

    /// Rasterize `text` for a surface of `size` and sample it.
    ///
    /// Never fails: an empty surface or a rasterizer error yields an empty set.
    #[tracing::instrument(skip(self, rasterizer, font))]
    pub fn sample_text(
        &self,
        rasterizer: &mut dyn GlyphRasterizer,
        text: &str,
        size: SurfaceSize,
        font: &FontSpec,
    ) -> TargetPointSet {
        if size.is_empty() || text.is_empty() {
            tracing::info!(points = 0, "generated text points");
            return TargetPointSet::empty();
        }

        let font_size_px = font.size_px(size.min_side());
        let mask = match rasterizer.rasterize(text, size, &font.family, font_size_px) {
            Ok(mask) => mask,
            Err(err) => {
                tracing::warn!(%err, "text rasterization failed; no target points");
                return TargetPointSet::empty();
            }
        };

        if mask.coverage() == 0 {
            tracing::warn!(family = %font.family, "text rendered no glyph pixels; no target points");
        }
        let set = self.sample_mask(&mask);
        tracing::info!(points = set.len(), "generated text points");
        set
    }
}

pub use svg_text::SvgTextRasterizer;

#[cfg(test)]
#[path = "../../tests/unit/sampling/sampler.rs"]
mod tests;
