use mapblock_edit::{
    CellClass, MapBlock, PaintController, PointerEvent, PointerKind, Position, RefreshRequest, StrokeTracker, SurfaceDescriptor, SurfaceHit, SurfaceId, WorldPoint,
};
use pretty_assertions::assert_eq;

fn setup() -> (PaintController, SurfaceDescriptor, Vec<RefreshRequest>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let surface = SurfaceDescriptor::new(SurfaceId(7), 16, 16, WorldPoint::ZERO);
    let mut controller = PaintController::new();
    let mut sink = Vec::new();
    controller.reload(MapBlock::new(16, 16).unwrap(), &[surface], &mut sink).unwrap();
    controller.set_brush_mode(true);
    sink.clear();
    (controller, surface, sink)
}

fn event(kind: PointerKind, surface: SurfaceDescriptor, x: f32, z: f32, erase: bool) -> PointerEvent {
    PointerEvent::new(kind, Some(SurfaceHit { surface, local: (x, z) }), erase)
}

#[test]
fn test_press_commits_immediately() {
    let (mut controller, surface, mut sink) = setup();
    let mut tracker = StrokeTracker::new();

    // no travel since the origin, still committed
    tracker.handle(&mut controller, &event(PointerKind::Down, surface, 0.1, 0.1, false), &mut sink).unwrap();
    assert!(controller.map_block().unwrap().is_blocked(0, 0));
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_drag_needs_half_a_cell() {
    let (mut controller, surface, mut sink) = setup();
    let mut tracker = StrokeTracker::new();

    tracker.handle(&mut controller, &event(PointerKind::Drag, surface, 0.3, 0.3, false), &mut sink).unwrap();
    assert_eq!(controller.map_block().unwrap().blocked_count(), 0);
    assert!(sink.is_empty());

    tracker.handle(&mut controller, &event(PointerKind::Drag, surface, 2.5, 3.5, false), &mut sink).unwrap();
    assert!(controller.map_block().unwrap().is_blocked(2, 3));

    // measured from the last accepted position, not the previous event
    tracker.handle(&mut controller, &event(PointerKind::Drag, surface, 2.8, 3.5, false), &mut sink).unwrap();
    assert_eq!(controller.map_block().unwrap().blocked_count(), 1);
}

#[test]
fn test_erase_modifier() {
    let (mut controller, surface, mut sink) = setup();
    controller.map_block_mut().unwrap().set_blocked(4, 4, true);
    let mut tracker = StrokeTracker::new();

    tracker.handle(&mut controller, &event(PointerKind::Down, surface, 4.5, 4.5, true), &mut sink).unwrap();
    assert!(!controller.map_block().unwrap().is_blocked(4, 4));
    assert_eq!(sink[0].cells, vec![CellClass::Free]);
}

#[test]
fn test_move_previews() {
    let (mut controller, surface, mut sink) = setup();
    let mut tracker = StrokeTracker::new();

    tracker.handle(&mut controller, &event(PointerKind::Move, surface, 5.2, 6.7, false), &mut sink).unwrap();
    assert_eq!(controller.hovered(), Some((SurfaceId(7), Position::new(5, 6))));
    assert_eq!(controller.map_block().unwrap().blocked_count(), 0);
    assert!(sink[0].is_hover());

    tracker.handle(&mut controller, &event(PointerKind::Up, surface, 9.0, 9.0, false), &mut sink).unwrap();
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_leaving_surfaces_clears_hover() {
    let (mut controller, surface, mut sink) = setup();
    let mut tracker = StrokeTracker::new();

    tracker.handle(&mut controller, &event(PointerKind::Move, surface, 3.0, 3.0, false), &mut sink).unwrap();
    tracker.handle(&mut controller, &PointerEvent::new(PointerKind::Move, None, false), &mut sink).unwrap();
    assert_eq!(controller.hovered(), None);
    assert_eq!(sink.len(), 2);
    assert_eq!(sink[1].area, sink[0].area);
    assert_eq!(sink[1].cells, vec![CellClass::Free]);
}

#[test]
fn test_stroke_without_map_block() {
    let surface = SurfaceDescriptor::new(SurfaceId(1), 4, 4, WorldPoint::ZERO);
    let mut controller = PaintController::new();
    controller.set_brush_mode(true);
    let mut sink: Vec<RefreshRequest> = Vec::new();
    let mut tracker = StrokeTracker::new();

    let result = tracker.handle(&mut controller, &event(PointerKind::Down, surface, 1.0, 1.0, false), &mut sink);
    assert!(result.is_err());
    assert!(sink.is_empty());
}
