//! Pointer gesture state machine: one label drag or one two-finger pinch.
//!
//! Raw pointer events are queued by the host and fed through
//! [`GestureController::handle`]; the transition table below is the only place
//! that starts or ends a drag or a pinch.
//!
//! | mode        | event                          | next        |
//! |-------------|--------------------------------|-------------|
//! | Idle        | down on label, `can_drag`      | Dragging    |
//! | Idle        | second touch down, no drag     | Pinching    |
//! | Dragging    | move/up/cancel of same pointer | self / Idle |
//! | Pinching    | move of tracked touch          | Pinching    |
//! | Pinching    | fewer than two touches         | Idle        |

use crate::catalog::BodyId;
use crate::scene::SceneLayout;
use crate::state::GameState;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Pen,
    Touch,
}

impl PointerKind {
    /// Maps a DOM `pointerType` string; unknown types behave like a mouse.
    pub fn from_dom(pointer_type: &str) -> Self {
        match pointer_type {
            "touch" => PointerKind::Touch,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Mouse,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub pointer_id: i32,
    pub kind: PointerKind,
    pub pos: Vec2,
}

impl PointerSample {
    pub fn new(pointer_id: i32, kind: PointerKind, x: f32, y: f32) -> Self {
        Self {
            pointer_id,
            kind,
            pos: Vec2::new(x, y),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// `label` is set when the pointer went down on a label's hit area.
    Down {
        sample: PointerSample,
        label: Option<BodyId>,
    },
    Move(PointerSample),
    Up(PointerSample),
    Cancel(PointerSample),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureMode {
    Idle,
    Dragging {
        label: BodyId,
        pointer_id: i32,
    },
    Pinching {
        baseline_distance: f32,
        baseline_zoom: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureSignal {
    DragStarted {
        label: BodyId,
        pointer_id: i32,
        pos: Vec2,
    },
    DragMoved {
        label: BodyId,
        pos: Vec2,
    },
    /// `drop` is `None` for a cancelled pointer.
    DragEnded {
        label: BodyId,
        drop: Option<Vec2>,
    },
    PinchStarted {
        baseline_zoom: f32,
    },
    Zoomed {
        zoom: f32,
    },
    PinchEnded {
        zoom: f32,
    },
}

pub type GestureSignals = SmallVec<[GestureSignal; 2]>;

/// FIFO of pointer events waiting to be applied.
#[derive(Debug, Default)]
pub struct GestureQueue {
    events: Vec<PointerEvent>,
}

impl GestureQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<PointerEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[derive(Clone, Copy, Debug)]
struct TrackedTouch {
    pointer_id: i32,
    pos: Vec2,
}

#[derive(Debug)]
pub struct GestureController {
    mode: GestureMode,
    touches: SmallVec<[TrackedTouch; 4]>,
    drag_enabled: bool,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureController {
    pub fn new() -> Self {
        Self {
            mode: GestureMode::Idle,
            touches: SmallVec::new(),
            drag_enabled: true,
        }
    }

    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self.mode, GestureMode::Pinching { .. })
    }

    pub fn dragging_label(&self) -> Option<BodyId> {
        match self.mode {
            GestureMode::Dragging { label, .. } => Some(label),
            _ => None,
        }
    }

    pub fn tracked_touches(&self) -> usize {
        self.touches.len()
    }

    /// Disabling stops new drags; a drag in progress still finishes.
    pub fn set_drag_enabled(&mut self, enabled: bool) {
        self.drag_enabled = enabled;
    }

    pub fn drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    /// Forgets tracked touches and leaves any pinch (marker lost).
    pub fn reset_touches(&mut self) {
        self.touches.clear();
        if self.is_pinching() {
            self.mode = GestureMode::Idle;
        }
    }

    /// Applies one pointer event. `can_drag` gates drag starts on top of the
    /// controller's own exclusivity rules.
    pub fn handle<F>(
        &mut self,
        event: &PointerEvent,
        state: &mut GameState,
        layout: &mut SceneLayout,
        can_drag: F,
    ) -> GestureSignals
    where
        F: Fn(&GameState, BodyId) -> bool,
    {
        let mut out = GestureSignals::new();
        match *event {
            PointerEvent::Down { sample, label } => {
                if let Some(label) = label {
                    self.try_start_drag(label, sample, state, layout, &can_drag, &mut out);
                }
                self.touch_down(sample, state, layout, &mut out);
            }
            PointerEvent::Move(sample) => {
                if let GestureMode::Dragging { label, pointer_id } = self.mode {
                    if pointer_id == sample.pointer_id {
                        if let Some(l) = state.find_label_mut(label) {
                            l.pointer = sample.pos;
                        }
                        out.push(GestureSignal::DragMoved {
                            label,
                            pos: sample.pos,
                        });
                    }
                }
                self.touch_move(sample, layout, &mut out);
            }
            PointerEvent::Up(sample) => {
                self.finish_drag(sample, Some(sample.pos), state, layout, &mut out);
                self.touch_up(sample, layout, &mut out);
            }
            PointerEvent::Cancel(sample) => {
                self.finish_drag(sample, None, state, layout, &mut out);
                self.touch_up(sample, layout, &mut out);
            }
        }
        out
    }

    fn try_start_drag<F>(
        &mut self,
        label: BodyId,
        sample: PointerSample,
        state: &mut GameState,
        layout: &mut SceneLayout,
        can_drag: &F,
        out: &mut GestureSignals,
    ) where
        F: Fn(&GameState, BodyId) -> bool,
    {
        if !self.drag_enabled || self.mode != GestureMode::Idle || state.any_dragging() {
            return;
        }
        if !can_drag(state, label) {
            return;
        }
        let Some(l) = state.find_label_mut(label) else {
            log::warn!("[drag] unknown label {}", label.0);
            return;
        };
        l.dragging = true;
        l.pointer = sample.pos;
        layout.set_orbit_paused(true);
        self.mode = GestureMode::Dragging {
            label,
            pointer_id: sample.pointer_id,
        };
        log::debug!(
            "[drag] start {} @ ({:.0}, {:.0})",
            label.0,
            sample.pos.x,
            sample.pos.y
        );
        out.push(GestureSignal::DragStarted {
            label,
            pointer_id: sample.pointer_id,
            pos: sample.pos,
        });
    }

    fn finish_drag(
        &mut self,
        sample: PointerSample,
        drop: Option<Vec2>,
        state: &mut GameState,
        layout: &mut SceneLayout,
        out: &mut GestureSignals,
    ) {
        let GestureMode::Dragging { label, pointer_id } = self.mode else {
            return;
        };
        if pointer_id != sample.pointer_id {
            return;
        }
        self.mode = GestureMode::Idle;
        if let Some(l) = state.find_label_mut(label) {
            l.dragging = false;
            if let Some(pos) = drop {
                l.pointer = pos;
            }
        }
        layout.set_orbit_paused(false);
        log::debug!("[drag] end {} @ {:?}", label.0, drop);
        out.push(GestureSignal::DragEnded { label, drop });
    }

    fn touch_down(
        &mut self,
        sample: PointerSample,
        state: &GameState,
        layout: &SceneLayout,
        out: &mut GestureSignals,
    ) {
        if sample.kind != PointerKind::Touch || !state.marker_visible() || state.completed() {
            return;
        }
        match self
            .touches
            .iter_mut()
            .find(|t| t.pointer_id == sample.pointer_id)
        {
            Some(t) => t.pos = sample.pos,
            None => self.touches.push(TrackedTouch {
                pointer_id: sample.pointer_id,
                pos: sample.pos,
            }),
        }
        if self.touches.len() != 2 || self.mode != GestureMode::Idle || state.any_dragging() {
            return;
        }
        let baseline_zoom = layout.zoom();
        self.mode = GestureMode::Pinching {
            baseline_distance: self.touch_distance(),
            baseline_zoom,
        };
        log::debug!("[pinch] start at zoom {:.2}", baseline_zoom);
        out.push(GestureSignal::PinchStarted { baseline_zoom });
    }

    fn touch_move(&mut self, sample: PointerSample, layout: &mut SceneLayout, out: &mut GestureSignals) {
        let Some(t) = self
            .touches
            .iter_mut()
            .find(|t| t.pointer_id == sample.pointer_id)
        else {
            return;
        };
        t.pos = sample.pos;
        let GestureMode::Pinching {
            baseline_distance,
            baseline_zoom,
        } = self.mode
        else {
            return;
        };
        if self.touches.len() < 2 || baseline_distance <= 0.0 {
            return;
        }
        let ratio = self.touch_distance() / baseline_distance;
        let zoom = layout.set_zoom(baseline_zoom * ratio);
        out.push(GestureSignal::Zoomed { zoom });
    }

    fn touch_up(&mut self, sample: PointerSample, layout: &SceneLayout, out: &mut GestureSignals) {
        let before = self.touches.len();
        self.touches.retain(|t| t.pointer_id != sample.pointer_id);
        if self.touches.len() == before {
            return;
        }
        if self.is_pinching() && self.touches.len() < 2 {
            self.mode = GestureMode::Idle;
            let zoom = layout.zoom();
            log::debug!("[pinch] end at zoom {:.2}", zoom);
            out.push(GestureSignal::PinchEnded { zoom });
        }
    }

    fn touch_distance(&self) -> f32 {
        match (self.touches.first(), self.touches.get(1)) {
            (Some(a), Some(b)) => a.pos.distance(b.pos),
            _ => 0.0,
        }
    }
}
