use crate::foundation::core::{Point, SurfaceSize};
use crate::palette::color::Hsba;

/// Drawing primitives the animation needs from its host.
///
/// Coordinates are surface pixels with the origin at the top-left corner.
pub trait RenderSurface {
    /// Current size in pixels.
    fn size(&self) -> SurfaceSize;

    /// Cover the whole surface with `color`. An alpha below 1 tints what is already there.
    fn fill_background(&mut self, color: Hsba);

    /// Fill an unstroked circle.
    fn fill_circle(&mut self, center: Point, diameter: f64, color: Hsba);

    /// Called once after the last draw call of a frame.
    fn end_frame(&mut self) {}
}

/// A single recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// `fill_background` with this color.
    Background(Hsba),
    /// `fill_circle` call.
    Circle {
        /// Center in surface pixels.
        center: Point,
        /// Diameter in pixels.
        diameter: f64,
        /// Fill color.
        color: Hsba,
    },
}

/// Surface that records draw calls instead of producing pixels.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    size: SurfaceSize,
    frames: Vec<Vec<DrawCommand>>,
    current: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Recorder reporting `size`.
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            frames: Vec::new(),
            current: Vec::new(),
        }
    }

    /// Change the reported size; recorded frames are kept.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    /// Commands of every completed frame, oldest first.
    pub fn frames(&self) -> &[Vec<DrawCommand>] {
        &self.frames
    }

    /// Commands of the most recently completed frame.
    pub fn last_frame(&self) -> &[DrawCommand] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Circles of the most recently completed frame.
    pub fn last_circles(&self) -> impl Iterator<Item = (Point, f64, Hsba)> + '_ {
        self.last_frame().iter().filter_map(|c| match *c {
            DrawCommand::Circle {
                center,
                diameter,
                color,
            } => Some((center, diameter, color)),
            DrawCommand::Background(_) => None,
        })
    }

    /// Forget all recorded commands.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.current.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn fill_background(&mut self, color: Hsba) {
        self.current.push(DrawCommand::Background(color));
    }

    fn fill_circle(&mut self, center: Point, diameter: f64, color: Hsba) {
        self.current.push(DrawCommand::Circle {
            center,
            diameter,
            color,
        });
    }

    fn end_frame(&mut self) {
        self.frames.push(std::mem::take(&mut self.current));
    }
}
