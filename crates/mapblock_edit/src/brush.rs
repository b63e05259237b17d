//! Brush footprint computation

use crate::{Rectangle, surface::SurfaceDescriptor};

pub const MIN_BRUSH_SIZE: i32 = 1;
pub const MAX_BRUSH_SIZE: i32 = 16;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BrushSettings {
    size: i32,
    /// Brush operations are ignored while disabled
    pub enabled: bool,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            size: MIN_BRUSH_SIZE,
            enabled: false,
        }
    }
}

impl BrushSettings {
    pub fn new(size: i32, enabled: bool) -> Self {
        Self {
            size: size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE),
            enabled,
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn set_size(&mut self, size: i32) {
        self.size = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
    }

    /// Surface local cells touched by a brush at `(x, y)`.
    ///
    /// With `half = (2 * size - 1) / 2` the area spans `x - half` up to
    /// `x + max(half, 1)` exclusive, clipped to the surface. Even sizes are
    /// not centered. The result is never smaller than one cell.
    pub fn area(&self, surface: &SurfaceDescriptor, x: i32, y: i32) -> Rectangle {
        let half = (self.size * 2 - 1) / 2;
        let min_x = x.saturating_sub(half).max(0);
        let min_y = y.saturating_sub(half).max(0);
        let max_x = x.saturating_add(half.max(1)).min(surface.cell_width);
        let max_y = y.saturating_add(half.max(1)).min(surface.cell_height);
        Rectangle::from(min_x, min_y, max_x.saturating_sub(min_x).max(1), max_y.saturating_sub(min_y).max(1))
    }
}
