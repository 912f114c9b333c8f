//! Session state for the matching activity.
//!
//! `GameState` owns every [`Label`]. Outside this crate it is read-only apart
//! from the tracking flag; labels change only through the gesture controller
//! (`dragging`, pointer coordinates) and the match resolver (`locked`,
//! `display_anchor`).

use crate::catalog::{BodyId, Catalog};
use crate::derangement::derange;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// Body this label names.
    pub id: BodyId,
    pub text: String,
    /// Body the label is currently shown next to.
    pub display_anchor: BodyId,
    pub locked: bool,
    pub dragging: bool,
    pub pointer: Vec2,
    pub visible: bool,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) completed: bool,
    pub(crate) correct_count: usize,
    pub(crate) labels: Vec<Label>,
    pub(crate) marker_visible: bool,
    pub(crate) total_count: usize,
}

impl GameState {
    /// Fresh session with labels scattered by a derangement of the catalog.
    pub fn new_session<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Self {
        let anchors = derange(&catalog.ids(), rng);
        Self::with_anchors(catalog, &anchors)
    }

    /// Session with an explicit display anchor per catalog entry.
    pub fn with_anchors(catalog: &Catalog, anchors: &[BodyId]) -> Self {
        let labels = catalog
            .iter()
            .zip(anchors)
            .map(|((id, body), &display_anchor)| Label {
                id,
                text: body.name.clone(),
                display_anchor,
                locked: false,
                dragging: false,
                pointer: Vec2::ZERO,
                visible: false,
            })
            .collect::<Vec<_>>();
        log::info!("[state] new session with {} labels", labels.len());
        Self {
            completed: false,
            correct_count: 0,
            total_count: catalog.len(),
            labels,
            marker_visible: false,
        }
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn marker_visible(&self) -> bool {
        self.marker_visible
    }

    pub fn set_marker_visible(&mut self, visible: bool) {
        self.marker_visible = visible;
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn find_label(&self, id: BodyId) -> Option<&Label> {
        self.labels.iter().find(|l| l.id == id)
    }

    pub(crate) fn find_label_mut(&mut self, id: BodyId) -> Option<&mut Label> {
        self.labels.iter_mut().find(|l| l.id == id)
    }

    pub fn any_dragging(&self) -> bool {
        self.labels.iter().any(|l| l.dragging)
    }

    pub fn locked_count(&self) -> usize {
        self.labels.iter().filter(|l| l.locked).count()
    }

    /// Default drag gate: unlocked label, marker tracked, session running.
    pub fn can_drag(&self, id: BodyId) -> bool {
        let allowed = self
            .find_label(id)
            .map(|l| !l.locked && self.marker_visible && !self.completed)
            .unwrap_or(false);
        log::debug!(
            "[drag] can_drag({}): {} | visible={} completed={}",
            id.0,
            allowed,
            self.marker_visible,
            self.completed
        );
        allowed
    }
}
