use vello_cpu::kurbo::Shape as _;

use crate::foundation::core::{Point, SurfaceSize};
use crate::foundation::error::{LogoError, LogoResult};
use crate::palette::color::Hsba;
use crate::render::FrameRGBA;
use crate::render::composite::{fill, over_in_place, tint_in_place};
use crate::render::surface::RenderSurface;

const CIRCLE_TOLERANCE: f64 = 0.1;

/// Persistent software canvas.
///
/// Pixels persist between frames so that translucent background fills leave motion trails.
/// Circles are batched into a `vello_cpu` render context and composited over the canvas when
/// the batch is flushed: at the end of a frame, before a background fill, or on readback. The
/// context is reset after each flush and reused for the next batch.
pub struct CpuSurface {
    size: SurfaceSize,
    width: u16,
    height: u16,
    /// Premultiplied RGBA8, row-major.
    frame: Vec<u8>,
    scratch: Option<vello_cpu::Pixmap>,
    ctx: Option<vello_cpu::RenderContext>,
    /// Circles drawn into `ctx` since the last flush.
    batched: usize,
}

impl CpuSurface {
    /// Transparent surface of `size`.
    pub fn new(size: SurfaceSize) -> LogoResult<Self> {
        let (width, height) = dims_u16(size)?;
        Ok(Self {
            size,
            width,
            height,
            frame: vec![0; (size.width as usize) * (size.height as usize) * 4],
            scratch: None,
            ctx: None,
            batched: 0,
        })
    }

    /// Reallocate for `size`, dropping current contents.
    pub fn resize(&mut self, size: SurfaceSize) -> LogoResult<()> {
        *self = Self::new(size)?;
        Ok(())
    }

    /// Composite any batched circles onto the canvas.
    pub fn flush(&mut self) {
        if self.batched == 0 {
            return;
        }
        let Some(ctx) = self.ctx.as_mut() else {
            return;
        };
        ctx.flush();

        let (width, height) = (self.width, self.height);
        let scratch = self
            .scratch
            .get_or_insert_with(|| vello_cpu::Pixmap::new(width, height));
        fill(scratch.data_as_u8_slice_mut(), [0, 0, 0, 0]);
        ctx.render_to_pixmap(scratch);

        ctx.reset();
        self.batched = 0;

        if let Err(err) = over_in_place(&mut self.frame, scratch.data_as_u8_slice()) {
            tracing::warn!(%err, "dropping circle batch");
        }
    }

    /// Circles waiting to be composited.
    pub fn batched_circles(&self) -> usize {
        self.batched
    }

    /// Current canvas contents (premultiplied).
    pub fn snapshot(&mut self) -> FrameRGBA {
        self.flush();
        FrameRGBA {
            width: self.size.width,
            height: self.size.height,
            data: self.frame.clone(),
            premultiplied: true,
        }
    }

    /// Premultiplied pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&mut self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.flush();
        let i = ((y as usize) * (self.size.width as usize) + (x as usize)) * 4;
        let px = &self.frame[i..i + 4];
        Some([px[0], px[1], px[2], px[3]])
    }
}

impl RenderSurface for CpuSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn fill_background(&mut self, color: Hsba) {
        self.flush();
        let premul = color.to_rgba8_premul();
        if premul[3] == 255 {
            fill(&mut self.frame, premul);
        } else {
            tint_in_place(&mut self.frame, premul);
        }
    }

    fn fill_circle(&mut self, center: Point, diameter: f64, color: Hsba) {
        if self.size.is_empty() || diameter <= 0.0 {
            return;
        }
        let (width, height) = (self.width, self.height);
        let ctx = self
            .ctx
            .get_or_insert_with(|| vello_cpu::RenderContext::new(width, height));

        let [r, g, b, a] = color.to_rgba8();
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        let circle = vello_cpu::kurbo::Circle::new((center.x, center.y), diameter / 2.0);
        ctx.fill_path(&circle.to_path(CIRCLE_TOLERANCE));
        self.batched += 1;
    }

    fn end_frame(&mut self) {
        self.flush();
    }
}

fn dims_u16(size: SurfaceSize) -> LogoResult<(u16, u16)> {
    let width: u16 = size
        .width
        .try_into()
        .map_err(|_| LogoError::surface("surface width exceeds u16"))?;
    let height: u16 = size
        .height
        .try_into()
        .map_err(|_| LogoError::surface("surface height exceeds u16"))?;
    Ok((width, height))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
