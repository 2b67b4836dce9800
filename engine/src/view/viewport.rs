//! Viewport and Pointer Mapping
//!
//! Converts between window pixel positions (origin top-left, y down) and
//! normalized device coordinates in `[-1, 1]` (origin centre, y up).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Linearly remap `x` from `[in_min, in_max]` to `[out_min, out_max]`.
#[inline]
pub fn remap(x: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Window pixel position to normalized device coordinates.
    pub fn to_ndc(&self, pixel: Vec2) -> Vec2 {
        let flipped_y = self.height - pixel.y;
        Vec2::new(
            remap(pixel.x, 0.0, self.width, -1.0, 1.0),
            remap(flipped_y, 0.0, self.height, -1.0, 1.0),
        )
    }

    /// Normalized device coordinates to a window pixel position.
    pub fn from_ndc(&self, ndc: Vec2) -> Vec2 {
        let x = remap(ndc.x, -1.0, 1.0, 0.0, self.width);
        let y = remap(ndc.y, -1.0, 1.0, 0.0, self.height);
        Vec2::new(x, self.height - y)
    }
}
