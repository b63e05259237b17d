#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::redundant_closure_for_method_calls
)]
//! Brush editing of map blocks.
//!
//! Surfaces are tiled views on one shared grid. A [`PaintController`] maps
//! brush strokes on a surface to grid cells and reports every change as a
//! [`RefreshRequest`] for the renderer.

pub mod brush;
pub mod input;
pub mod options;
mod paint;
pub mod refresh;
pub mod surface;

pub use brush::BrushSettings;
pub use input::{PointerEvent, PointerKind, StrokeTracker, SurfaceHit};
pub use options::EditorOptions;
pub use paint::{MIN_CREATE_SIZE, PaintController};
pub use refresh::{CellClass, RefreshRequest, RepaintSink};
pub use surface::{GRID_SIZE, SurfaceDescriptor, SurfaceId, WorldPoint};

pub use mapblock_engine::{EngineError, MapBlock, Position, Rectangle, Result, Size, limits};
