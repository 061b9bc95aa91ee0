pub use kurbo::{Point, Vec2};

/// Host timestamp in milliseconds.
///
/// Absolute values are opaque; only differences against the animation start are meaningful.
pub type TimeMs = f64;

/// Render surface dimensions in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SurfaceSize {
    /// Create a size from width and height.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Return `true` when either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Half of the surface extent, i.e. the bounds of canvas-centered coordinates.
    pub fn half_extent(self) -> Vec2 {
        Vec2::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Length of the shorter side.
    pub fn min_side(self) -> u32 {
        self.width.min(self.height)
    }

    /// Map a canvas-centered coordinate to surface pixel space.
    pub fn to_surface(self, centered: Vec2) -> Point {
        (centered + self.half_extent()).to_point()
    }

    /// Map a surface pixel coordinate to canvas-centered space.
    pub fn to_centered(self, x: u32, y: u32) -> Vec2 {
        Vec2::new(f64::from(x), f64::from(y)) - self.half_extent()
    }
}
