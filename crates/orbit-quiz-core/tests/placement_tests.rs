use glam::Vec2;
use orbit_quiz_core::{place_labels, BodyId, Catalog, GameState, ScreenAnchor, ScreenAnchors};

fn anchors() -> ScreenAnchors {
    ScreenAnchors::from_anchors(
        (0..9)
            .map(|i| ScreenAnchor {
                id: BodyId(i),
                pos: Vec2::new(50.0 * i as f32, 200.0),
                visible: true,
            })
            .collect(),
    )
}

#[test]
fn labels_hidden_while_marker_is_lost() {
    let catalog = Catalog::solar_system();
    let mut state = GameState::with_anchors(&catalog, &catalog.ids());
    let placed = place_labels(&mut state, &catalog, &anchors(), 1.0, 34.0);
    assert!(placed.iter().all(|p| !p.visible));
    assert!(state.labels().iter().all(|l| !l.visible));
}

#[test]
fn label_is_raised_by_its_body_offset_scaled_with_zoom() {
    let catalog = Catalog::solar_system();
    let mut state = GameState::with_anchors(&catalog, &catalog.ids());
    state.set_marker_visible(true);
    let placed = place_labels(&mut state, &catalog, &anchors(), 4.0, 34.0);
    let jupiter = catalog.index_of("jupiter").unwrap();
    let p = placed.iter().find(|p| p.id == jupiter).unwrap();
    let offset = catalog.get(jupiter).unwrap().label_offset;
    assert!(p.visible);
    assert_eq!(p.pos, Vec2::new(50.0 * jupiter.0 as f32, 200.0 - offset * 2.0));
    assert!(state.find_label(jupiter).unwrap().visible);
}

#[test]
fn labels_sharing_an_anchor_stack_downward() {
    // labels 0 and 1 both shown at anchor 1
    let catalog = Catalog::solar_system();
    let mut ids = catalog.ids();
    ids[0] = BodyId(1);
    let mut state = GameState::with_anchors(&catalog, &ids);
    state.set_marker_visible(true);
    let placed = place_labels(&mut state, &catalog, &anchors(), 1.0, 34.0);
    let first = placed.iter().find(|p| p.id == BodyId(0)).unwrap();
    let second = placed.iter().find(|p| p.id == BodyId(1)).unwrap();
    assert_eq!(first.pos.x, second.pos.x);
    assert_eq!((second.pos.y - first.pos.y).abs(), 34.0);
}
