use crate::{Position, Rectangle, surface::SurfaceId};

/// Per cell classification handed to the renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellClass {
    Blocked,
    Free,
    HoverPreview,
}

impl CellClass {
    pub fn from_blocked(blocked: bool) -> Self {
        if blocked { CellClass::Blocked } else { CellClass::Free }
    }

    /// Splat weights for the blocked, free and brush layers.
    pub fn weights(self) -> [f32; 3] {
        match self {
            CellClass::Blocked => [1.0, 0.0, 0.0],
            CellClass::Free => [0.0, 1.0, 0.0],
            CellClass::HoverPreview => [0.0, 0.0, 1.0],
        }
    }
}

/// A surface region to repaint.
///
/// `area` is in surface local cells, `cells` holds one entry per cell of
/// `area.cells()`, row by row (row = local y). Cells past `i32::MAX` are not
/// addressable and have no entry.
#[derive(Clone, Debug, PartialEq)]
pub struct RefreshRequest {
    pub surface: SurfaceId,
    pub area: Rectangle,
    pub cells: Vec<CellClass>,
}

impl RefreshRequest {
    /// Classification of a surface local cell, `None` outside the area.
    pub fn cell(&self, pos: impl Into<Position>) -> Option<CellClass> {
        let pos = pos.into();
        if !self.area.contains(pos) {
            return None;
        }
        let idx = (pos.y - self.area.top()) * self.area.width() + (pos.x - self.area.left());
        self.cells.get(idx as usize).copied()
    }

    pub fn is_hover(&self) -> bool {
        self.cells.iter().all(|c| *c == CellClass::HoverPreview)
    }

    /// Flattened `[row][column][layer]` weights, the shape splat map APIs take.
    pub fn weights(&self) -> Vec<f32> {
        self.cells.iter().flat_map(|c| c.weights()).collect()
    }
}

/// Receives repaint requests; implemented by the rendering side.
pub trait RepaintSink {
    fn repaint(&mut self, request: &RefreshRequest);
}

/// Collects requests, handy for hosts that batch uploads.
impl RepaintSink for Vec<RefreshRequest> {
    fn repaint(&mut self, request: &RefreshRequest) {
        self.push(request.clone());
    }
}
