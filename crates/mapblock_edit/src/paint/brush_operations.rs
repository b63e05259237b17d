use crate::{
    EngineError, Rectangle, Result,
    refresh::RepaintSink,
    surface::SurfaceDescriptor,
};

use super::{PaintController, PendingHover};

impl PaintController {
    /// Surface local cells the brush covers at `(x, y)` on `surface`.
    pub fn brush_area(&self, surface: &SurfaceDescriptor, x: i32, y: i32) -> Rectangle {
        self.brush.area(surface, x, y)
    }

    /// Commits a brush stroke: sets every cell under the brush to `blocked`
    /// and repaints the area from the grid.
    ///
    /// Fails with [`EngineError::NoMapBlock`] when nothing is loaded; does
    /// nothing while brush mode is off.
    pub fn on_brushed<S: RepaintSink + ?Sized>(&mut self, surface: &SurfaceDescriptor, x: i32, y: i32, blocked: bool, sink: &mut S) -> Result<()> {
        if self.map_block.is_none() {
            log::warn!("Brush on {} ignored: no map block loaded, reload required", surface.id);
            return Err(EngineError::NoMapBlock);
        }
        if !self.brush.enabled {
            return Ok(());
        }
        self.clear_last_hovered_brush(sink);

        let area = self.brush_area(surface, x, y);
        let offset = self.tile_offset(surface);
        if let Some(map_block) = &mut self.map_block {
            map_block.fill_rect(area.translated(offset), blocked);
        }
        log::debug!("Brushed {area} on {} (blocked: {blocked})", surface.id);

        self.refresh(surface, area, false, sink);
        Ok(())
    }

    /// Draws the brush preview at `(x, y)` without touching the grid.
    pub fn on_brush_hover<S: RepaintSink + ?Sized>(&mut self, surface: &SurfaceDescriptor, x: i32, y: i32, sink: &mut S) {
        if !self.brush.enabled {
            return;
        }
        self.clear_last_hovered_brush(sink);

        let area = self.brush_area(surface, x, y);
        self.refresh(surface, area, true, sink);
        self.last_hover = Some(PendingHover { surface: *surface, x, y });
    }

    /// Repaints the last preview from committed state. No-op without one.
    pub fn clear_last_hovered_brush<S: RepaintSink + ?Sized>(&mut self, sink: &mut S) {
        let Some(hover) = self.last_hover.take() else {
            return;
        };
        if !hover.is_pending() {
            return;
        }
        let area = self.brush_area(&hover.surface, hover.x, hover.y);
        self.refresh(&hover.surface, area, false, sink);
    }
}
