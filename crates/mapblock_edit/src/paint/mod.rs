//! Brush painting on a map block.
//!
//! The [`PaintController`] owns the active map block and translates brush
//! events on surfaces into cell writes and [`RefreshRequest`](crate::RefreshRequest)s.
//! Operations are split over the sibling modules the same way the editor
//! groups them: brush strokes, refreshes and file handling.

mod brush_operations;
mod file_operations;
mod refresh_operations;

pub use file_operations::MIN_CREATE_SIZE;

use crate::{
    EngineError, MapBlock, Position, Result,
    brush::BrushSettings,
    options::EditorOptions,
    refresh::RepaintSink,
    surface::{SurfaceDescriptor, SurfaceId, WorldPoint},
};

/// Brush preview drawn by the last hover, repainted from committed state
/// before anything else is drawn over it.
#[derive(Copy, Clone, Debug, PartialEq)]
struct PendingHover {
    surface: SurfaceDescriptor,
    x: i32,
    y: i32,
}

impl PendingHover {
    fn is_pending(&self) -> bool {
        self.x >= 0 && self.y >= 0
    }
}

/// Editing state for one map block session.
#[derive(Debug, Default)]
pub struct PaintController {
    map_block: Option<MapBlock>,
    brush: BrushSettings,
    map_origin: WorldPoint,
    last_hover: Option<PendingHover>,
}

impl PaintController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            brush: options.brush(),
            map_origin: options.map_origin,
            ..Default::default()
        }
    }

    pub fn map_block(&self) -> Option<&MapBlock> {
        self.map_block.as_ref()
    }

    pub fn map_block_mut(&mut self) -> Option<&mut MapBlock> {
        self.map_block.as_mut()
    }

    /// Removes the active map block, dropping any pending hover with it.
    pub fn take_map_block(&mut self) -> Option<MapBlock> {
        self.last_hover = None;
        self.map_block.take()
    }

    pub fn brush(&self) -> &BrushSettings {
        &self.brush
    }

    pub fn set_brush_size(&mut self, size: i32) {
        self.brush.set_size(size);
    }

    pub fn set_brush_mode(&mut self, enabled: bool) {
        self.brush.enabled = enabled;
    }

    pub fn brush_mode(&self) -> bool {
        self.brush.enabled
    }

    pub fn map_origin(&self) -> WorldPoint {
        self.map_origin
    }

    pub fn set_map_origin(&mut self, map_origin: WorldPoint) {
        self.map_origin = map_origin;
    }

    /// Grid translation for surface local cells of `surface`.
    pub fn tile_offset(&self, surface: &SurfaceDescriptor) -> Position {
        surface.tile_offset(self.map_origin)
    }

    /// Surface and cell of the preview still on screen, if any.
    pub fn hovered(&self) -> Option<(SurfaceId, Position)> {
        self.last_hover
            .filter(PendingHover::is_pending)
            .map(|hover| (hover.surface.id, Position::new(hover.x, hover.y)))
    }

    /// Makes `map_block` the active grid and repaints every surface from it.
    ///
    /// Invalid map blocks are rejected and leave the controller untouched.
    /// The pending hover is dropped without a repaint since all surfaces are
    /// refreshed anyway.
    pub fn reload<S: RepaintSink + ?Sized>(&mut self, map_block: MapBlock, surfaces: &[SurfaceDescriptor], sink: &mut S) -> Result<()> {
        if !map_block.is_valid() {
            log::error!("Map block is invalid");
            return Err(EngineError::InvalidMapBlock);
        }
        log::info!("Reloading map block {}x{}", map_block.width(), map_block.height());
        self.map_block = Some(map_block);
        self.last_hover = None;
        self.refresh_all(surfaces, sink);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RefreshRequest;

    fn surface() -> SurfaceDescriptor {
        SurfaceDescriptor::new(SurfaceId(3), 16, 16, WorldPoint::ZERO)
    }

    #[test]
    fn test_reload_rejects_invalid_block() {
        let mut controller = PaintController::new();
        let mut requests: Vec<RefreshRequest> = Vec::new();
        let result = controller.reload(MapBlock::default(), &[surface()], &mut requests);
        assert!(matches!(result, Err(EngineError::InvalidMapBlock)));
        assert!(controller.map_block().is_none());
        assert!(requests.is_empty());
    }

    #[test]
    fn test_reload_keeps_previous_block_on_failure() {
        let mut controller = PaintController::new();
        let mut requests: Vec<RefreshRequest> = Vec::new();
        controller.reload(MapBlock::new(16, 16).unwrap(), &[surface()], &mut requests).unwrap();
        controller.set_brush_mode(true);
        controller.on_brush_hover(&surface(), 2, 2, &mut requests);
        assert!(controller.hovered().is_some());

        assert!(controller.reload(MapBlock::default(), &[surface()], &mut requests).is_err());
        assert_eq!(controller.map_block().map(MapBlock::width), Some(16));
        assert!(controller.hovered().is_some());
    }

    #[test]
    fn test_reload_refreshes_all_surfaces() {
        let mut controller = PaintController::new();
        let mut requests: Vec<RefreshRequest> = Vec::new();
        let second = SurfaceDescriptor::new(SurfaceId(4), 8, 4, WorldPoint::new(16.0, 0.0, 0.0));
        controller.reload(MapBlock::new(32, 16).unwrap(), &[surface(), second], &mut requests).unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].surface, SurfaceId(4));
        assert_eq!(requests[1].cells.len(), 32);
    }

    #[test]
    fn test_from_options() {
        let options = EditorOptions {
            brush_size: 4,
            brush_mode: true,
            map_origin: WorldPoint::new(5.0, 0.0, 5.0),
            ..Default::default()
        };
        let controller = PaintController::from_options(&options);
        assert_eq!(controller.brush().size(), 4);
        assert!(controller.brush_mode());
        assert_eq!(controller.map_origin(), WorldPoint::new(5.0, 0.0, 5.0));
        assert!(controller.map_block().is_none());
    }
}
