use glam::Vec2;
use orbit_quiz_core::{
    BodyId, Catalog, GameState, GestureController, GestureMode, GestureQueue, GestureSignal,
    PointerEvent, PointerKind, PointerSample, SceneConfig, SceneLayout,
};

struct Rig {
    state: GameState,
    layout: SceneLayout,
    gestures: GestureController,
}

impl Rig {
    fn new() -> Self {
        let catalog = Catalog::solar_system();
        let anchors: Vec<BodyId> = catalog.ids().iter().map(|id| BodyId((id.0 + 1) % 9)).collect();
        let mut state = GameState::with_anchors(&catalog, &anchors);
        state.set_marker_visible(true);
        Self {
            state,
            layout: SceneLayout::new(&catalog, SceneConfig::default()),
            gestures: GestureController::new(),
        }
    }

    fn send(&mut self, event: PointerEvent) -> Vec<GestureSignal> {
        self.gestures
            .handle(&event, &mut self.state, &mut self.layout, |s: &GameState, id| {
                s.can_drag(id)
            })
            .into_vec()
    }
}

fn touch(id: i32, x: f32, y: f32) -> PointerSample {
    PointerSample::new(id, PointerKind::Touch, x, y)
}

fn mouse(x: f32, y: f32) -> PointerSample {
    PointerSample::new(1, PointerKind::Mouse, x, y)
}

fn down_on(sample: PointerSample, label: usize) -> PointerEvent {
    PointerEvent::Down {
        sample,
        label: Some(BodyId(label)),
    }
}

fn down(sample: PointerSample) -> PointerEvent {
    PointerEvent::Down {
        sample,
        label: None,
    }
}

#[test]
fn drag_lifecycle_pauses_orbits() {
    let mut rig = Rig::new();
    let started = rig.send(down_on(mouse(10.0, 20.0), 2));
    assert_eq!(
        started,
        vec![GestureSignal::DragStarted {
            label: BodyId(2),
            pointer_id: 1,
            pos: Vec2::new(10.0, 20.0)
        }]
    );
    assert!(rig.layout.is_orbit_paused());
    assert!(rig.state.find_label(BodyId(2)).unwrap().dragging);

    let moved = rig.send(PointerEvent::Move(mouse(50.0, 60.0)));
    assert_eq!(
        moved,
        vec![GestureSignal::DragMoved {
            label: BodyId(2),
            pos: Vec2::new(50.0, 60.0)
        }]
    );
    assert_eq!(rig.state.find_label(BodyId(2)).unwrap().pointer, Vec2::new(50.0, 60.0));

    let ended = rig.send(PointerEvent::Up(mouse(70.0, 80.0)));
    assert_eq!(
        ended,
        vec![GestureSignal::DragEnded {
            label: BodyId(2),
            drop: Some(Vec2::new(70.0, 80.0))
        }]
    );
    assert!(!rig.layout.is_orbit_paused());
    assert!(!rig.state.any_dragging());
    assert_eq!(rig.gestures.mode(), GestureMode::Idle);
}

#[test]
fn cancel_ends_drag_without_a_drop_point() {
    let mut rig = Rig::new();
    rig.send(down_on(mouse(0.0, 0.0), 4));
    let ended = rig.send(PointerEvent::Cancel(mouse(5.0, 5.0)));
    assert_eq!(
        ended,
        vec![GestureSignal::DragEnded {
            label: BodyId(4),
            drop: None
        }]
    );
    assert!(!rig.state.any_dragging());
}

#[test]
fn other_pointers_do_not_move_the_drag() {
    let mut rig = Rig::new();
    rig.send(down_on(touch(1, 0.0, 0.0), 0));
    assert!(rig.send(PointerEvent::Move(touch(2, 9.0, 9.0))).is_empty());
    assert!(rig.send(PointerEvent::Up(touch(2, 9.0, 9.0))).is_empty());
    assert_eq!(rig.gestures.dragging_label(), Some(BodyId(0)));
}

#[test]
fn second_drag_is_rejected_while_one_is_active() {
    let mut rig = Rig::new();
    rig.send(down_on(mouse(0.0, 0.0), 0));
    let second = PointerSample::new(7, PointerKind::Pen, 3.0, 3.0);
    assert!(rig.send(down_on(second, 1)).is_empty());
    assert!(!rig.state.find_label(BodyId(1)).unwrap().dragging);
}

#[test]
fn drag_needs_tracking_and_an_unlocked_label() {
    let mut rig = Rig::new();
    rig.state.set_marker_visible(false);
    assert!(rig.send(down_on(mouse(0.0, 0.0), 3)).is_empty());

    rig.state.set_marker_visible(true);
    rig.gestures.set_drag_enabled(false);
    assert!(rig.send(down_on(mouse(0.0, 0.0), 3)).is_empty());
    rig.gestures.set_drag_enabled(true);
    assert_eq!(rig.send(down_on(mouse(0.0, 0.0), 3)).len(), 1);
}

#[test]
fn pinch_doubles_zoom_when_fingers_spread_twice_as_far() {
    let mut rig = Rig::new();
    let baseline = rig.layout.set_zoom(1.5);
    assert!(rig.send(down(touch(1, 100.0, 100.0))).is_empty());
    let started = rig.send(down(touch(2, 200.0, 100.0)));
    assert_eq!(
        started,
        vec![GestureSignal::PinchStarted {
            baseline_zoom: baseline
        }]
    );
    assert!(rig.gestures.is_pinching());

    let zoomed = rig.send(PointerEvent::Move(touch(2, 300.0, 100.0)));
    assert_eq!(zoomed, vec![GestureSignal::Zoomed { zoom: 3.0 }]);
    assert_eq!(rig.layout.zoom(), baseline * 2.0);

    let ended = rig.send(PointerEvent::Up(touch(1, 100.0, 100.0)));
    assert_eq!(ended, vec![GestureSignal::PinchEnded { zoom: 3.0 }]);
    assert_eq!(rig.gestures.mode(), GestureMode::Idle);
}

#[test]
fn pinch_zoom_is_clamped_to_range() {
    let mut rig = Rig::new();
    rig.layout.set_zoom(5.0);
    rig.send(down(touch(1, 0.0, 0.0)));
    rig.send(down(touch(2, 100.0, 0.0)));
    rig.send(PointerEvent::Move(touch(2, 200.0, 0.0)));
    assert_eq!(rig.layout.zoom(), rig.layout.zoom_range().max);
}

#[test]
fn mouse_pointers_never_pinch() {
    let mut rig = Rig::new();
    rig.send(down(mouse(0.0, 0.0)));
    rig.send(down(PointerSample::new(2, PointerKind::Mouse, 50.0, 0.0)));
    assert!(!rig.gestures.is_pinching());
    assert_eq!(rig.gestures.tracked_touches(), 0);
}

#[test]
fn no_pinch_while_a_label_is_dragging() {
    let mut rig = Rig::new();
    rig.send(down_on(touch(1, 0.0, 0.0), 5));
    assert!(rig.state.any_dragging());
    let signals = rig.send(down(touch(2, 100.0, 0.0)));
    assert!(signals.is_empty());
    assert!(!rig.gestures.is_pinching());

    let zoom = rig.layout.zoom();
    rig.send(PointerEvent::Move(touch(2, 300.0, 0.0)));
    assert_eq!(rig.layout.zoom(), zoom);
}

#[test]
fn no_drag_while_pinching() {
    let mut rig = Rig::new();
    rig.send(down(touch(1, 0.0, 0.0)));
    rig.send(down(touch(2, 100.0, 0.0)));
    assert!(rig.gestures.is_pinching());

    let signals = rig.send(down_on(touch(3, 50.0, 50.0), 6));
    assert!(signals.is_empty());
    assert!(!rig.state.any_dragging());
    assert!(rig.gestures.is_pinching());
}

#[test]
fn third_finger_does_not_restart_pinch() {
    let mut rig = Rig::new();
    rig.send(down(touch(1, 0.0, 0.0)));
    rig.send(down(touch(2, 100.0, 0.0)));
    rig.send(down(touch(3, 50.0, 50.0)));
    let ended = rig.send(PointerEvent::Up(touch(3, 50.0, 50.0)));
    assert!(ended.is_empty());
    assert!(rig.gestures.is_pinching());
}

#[test]
fn reset_touches_leaves_pinch() {
    let mut rig = Rig::new();
    rig.send(down(touch(1, 0.0, 0.0)));
    rig.send(down(touch(2, 100.0, 0.0)));
    rig.gestures.reset_touches();
    assert_eq!(rig.gestures.mode(), GestureMode::Idle);
    assert_eq!(rig.gestures.tracked_touches(), 0);
}

#[test]
fn queue_preserves_arrival_order() {
    let mut queue = GestureQueue::new();
    queue.push(down(mouse(0.0, 0.0)));
    queue.push(PointerEvent::Up(mouse(1.0, 1.0)));
    assert_eq!(queue.len(), 2);
    let drained = queue.drain();
    assert!(matches!(drained[0], PointerEvent::Down { .. }));
    assert!(matches!(drained[1], PointerEvent::Up(_)));
    assert!(queue.is_empty());
}
