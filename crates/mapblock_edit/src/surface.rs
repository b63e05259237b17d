//! Surfaces are the tiled render targets a map block is painted onto.
//!
//! The host owns them; the editor only ever reads a [`SurfaceDescriptor`]
//! per call and keeps copies, never borrows.

use serde::{Deserialize, Serialize};

use crate::Position;

/// World units per grid cell.
pub const GRID_SIZE: f32 = 1.0;

/// World space point. The map lies on the X/Z plane, Y is height.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPoint {
    pub const ZERO: WorldPoint = WorldPoint { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Host assigned surface handle, echoed back in refresh requests.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u32);

impl std::fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "surface #{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceDescriptor {
    pub id: SurfaceId,
    /// Cell columns of the surface weight map
    pub cell_width: i32,
    /// Cell rows of the surface weight map
    pub cell_height: i32,
    pub world_position: WorldPoint,
}

impl SurfaceDescriptor {
    pub fn new(id: SurfaceId, cell_width: i32, cell_height: i32, world_position: WorldPoint) -> Self {
        Self {
            id,
            cell_width,
            cell_height,
            world_position,
        }
    }

    /// Translation from surface local cells to grid cells:
    /// `floor((world_position - map_origin) / GRID_SIZE)` on X and Z.
    pub fn tile_offset(&self, map_origin: WorldPoint) -> Position {
        Position::new(
            ((self.world_position.x - map_origin.x) / GRID_SIZE).floor() as i32,
            ((self.world_position.z - map_origin.z) / GRID_SIZE).floor() as i32,
        )
    }
}
