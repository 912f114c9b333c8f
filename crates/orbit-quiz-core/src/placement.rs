//! Screen placement of the name labels for the current frame.

use crate::catalog::{BodyId, Catalog};
use crate::constants::DEFAULT_LABEL_OFFSET_PX;
use crate::scene::ScreenAnchors;
use crate::state::GameState;
use fnv::FnvHashMap;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    pub id: BodyId,
    pub pos: Vec2,
    pub visible: bool,
    pub dragging: bool,
    pub locked: bool,
}

/// Places every label and records the result in each label's `visible` hint.
///
/// Labels sharing an anchor stack downward, locked ones first. Offsets grow
/// with `sqrt(zoom)` so labels keep clear of bigger bodies.
pub fn place_labels(
    state: &mut GameState,
    catalog: &Catalog,
    anchors: &ScreenAnchors,
    zoom: f32,
    stack_spacing: f32,
) -> Vec<LabelPlacement> {
    let zoom_factor = zoom.max(0.0).sqrt();
    let tracking = state.marker_visible;

    let mut by_anchor: FnvHashMap<BodyId, Vec<(bool, BodyId)>> = FnvHashMap::default();
    for label in state.labels.iter() {
        if label.dragging || !tracking || anchors.get(label.display_anchor).is_none() {
            continue;
        }
        by_anchor
            .entry(label.display_anchor)
            .or_default()
            .push((label.locked, label.id));
    }
    let mut stack_index: FnvHashMap<BodyId, usize> = FnvHashMap::default();
    for group in by_anchor.values_mut() {
        // stable: catalog order within locked/unlocked
        group.sort_by_key(|(locked, _)| !*locked);
        for (i, (_, id)) in group.iter().enumerate() {
            stack_index.insert(*id, i);
        }
    }

    let mut out = Vec::with_capacity(state.labels.len());
    for label in state.labels.iter_mut() {
        let mut pos = label.pointer;
        let mut visible = false;
        if label.dragging {
            visible = true;
        } else if let Some(anchor) = anchors.get(label.display_anchor).filter(|_| tracking) {
            let offset = catalog
                .get(label.display_anchor)
                .map(|b| b.label_offset)
                .unwrap_or(DEFAULT_LABEL_OFFSET_PX);
            let index = stack_index.get(&label.id).copied().unwrap_or(0) as f32;
            pos = Vec2::new(
                anchor.pos.x,
                anchor.pos.y - offset * zoom_factor + index * stack_spacing * zoom_factor,
            );
            visible = true;
        }
        label.visible = visible;
        out.push(LabelPlacement {
            id: label.id,
            pos,
            visible,
            dragging: label.dragging,
            locked: label.locked,
        });
    }
    out
}
