//! Drawing surfaces and headless frame production.

pub(crate) mod composite;
pub(crate) mod cpu;
pub(crate) mod pipeline;
pub(crate) mod sink;
pub(crate) mod surface;

use std::path::Path;

use crate::foundation::error::{LogoError, LogoResult};

pub use cpu::CpuSurface;
pub use pipeline::{HeadlessHost, HostOpts, RenderStats};
pub use sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig};
pub use surface::{DrawCommand, RecordingSurface, RenderSurface};

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha copy of the pixel data.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if self.premultiplied {
            composite::unpremultiply_in_place(&mut out);
        }
        out
    }

    /// Write the frame as a PNG, creating parent directories as needed.
    pub fn save_png(&self, path: &Path) -> LogoResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                LogoError::surface(format!("create output dir '{}': {e}", parent.display()))
            })?;
        }
        image::save_buffer_with_format(
            path,
            &self.to_straight_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| LogoError::surface(format!("write png '{}': {e}", path.display())))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
