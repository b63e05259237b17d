//! Pointer input to brush calls.
//!
//! Picking is done by the host; events arrive with the hit surface and the
//! hit point relative to the surface origin.

use crate::{
    PaintController, Position, Result,
    refresh::RepaintSink,
    surface::{GRID_SIZE, SurfaceDescriptor},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Drag,
    Move,
    Up,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceHit {
    pub surface: SurfaceDescriptor,
    /// Hit point relative to the surface origin on the X/Z plane, world units
    pub local: (f32, f32),
}

impl SurfaceHit {
    pub fn cell(&self) -> Position {
        Position::new((self.local.0 / GRID_SIZE).floor() as i32, (self.local.1 / GRID_SIZE).floor() as i32)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// `None` when the pointer is not over any surface
    pub hit: Option<SurfaceHit>,
    /// Erase modifier held: strokes free cells instead of blocking them
    pub erase: bool,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, hit: Option<SurfaceHit>, erase: bool) -> Self {
        Self { kind, hit, erase }
    }
}

/// Turns a pointer event stream into commits and previews.
///
/// Presses commit right away. Drags commit and moves preview only once the
/// pointer travelled at least half a cell since the last accepted position.
#[derive(Clone, Debug, Default)]
pub struct StrokeTracker {
    last_position: (f32, f32),
}

impl StrokeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle<S: RepaintSink + ?Sized>(&mut self, controller: &mut PaintController, event: &PointerEvent, sink: &mut S) -> Result<()> {
        let Some(hit) = &event.hit else {
            controller.clear_last_hovered_brush(sink);
            return Ok(());
        };
        let cell = hit.cell();
        let blocked = !event.erase;

        if event.kind == PointerKind::Down {
            return controller.on_brushed(&hit.surface, cell.x, cell.y, blocked, sink);
        }

        let dx = hit.local.0 - self.last_position.0;
        let dz = hit.local.1 - self.last_position.1;
        if (dx * dx + dz * dz).sqrt() < GRID_SIZE / 2.0 {
            return Ok(());
        }
        self.last_position = hit.local;
        match event.kind {
            PointerKind::Drag => controller.on_brushed(&hit.surface, cell.x, cell.y, blocked, sink),
            PointerKind::Move => {
                controller.on_brush_hover(&hit.surface, cell.x, cell.y, sink);
                Ok(())
            }
            PointerKind::Up | PointerKind::Down => Ok(()),
        }
    }
}
