use crate::{
    CellClass, Rectangle, RefreshRequest,
    refresh::RepaintSink,
    surface::SurfaceDescriptor,
};

use super::PaintController;

impl PaintController {
    /// Builds the request for `area` (surface local cells).
    ///
    /// Returns `None` when no map block is loaded.
    pub fn refresh_request(&self, surface: &SurfaceDescriptor, area: Rectangle, hover: bool) -> Option<RefreshRequest> {
        let map_block = self.map_block.as_ref()?;
        let offset = self.tile_offset(surface);
        let cells = area
            .cells()
            .map(|pos| {
                if hover {
                    CellClass::HoverPreview
                } else {
                    CellClass::from_blocked(map_block.is_blocked_at(pos.saturating_add(offset)))
                }
            })
            .collect();
        Some(RefreshRequest {
            surface: surface.id,
            area,
            cells,
        })
    }

    pub(crate) fn refresh<S: RepaintSink + ?Sized>(&self, surface: &SurfaceDescriptor, area: Rectangle, hover: bool, sink: &mut S) {
        if let Some(request) = self.refresh_request(surface, area, hover) {
            sink.repaint(&request);
        }
    }

    /// Repaints every cell of every surface from committed state.
    pub fn refresh_all<S: RepaintSink + ?Sized>(&self, surfaces: &[SurfaceDescriptor], sink: &mut S) {
        for surface in surfaces {
            let area = Rectangle::from(0, 0, surface.cell_width, surface.cell_height);
            self.refresh(surface, area, false, sink);
        }
    }
}
