//! One play-through of the activity.
//!
//! `QuizSession` is the single owner of the game and layout state. The host
//! feeds it tracking edges, pointer events, slider input and frame ticks, and
//! renders the [`SessionSignal`]s it returns.

use crate::camera::Projection;
use crate::catalog::{BodyId, Catalog};
use crate::completion::{CompletionEvent, CompletionFlow, CompletionPhase};
use crate::config::{QuizConfig, RotationRanges, SceneConfig, SliderRange};
use crate::confetti::Confetti;
use crate::gallery::CollectibleStore;
use crate::gesture::{GestureController, GestureMode, GestureQueue, GestureSignal, PointerEvent};
use crate::persistence::KeyValueStore;
use crate::placement::{place_labels, LabelPlacement};
use crate::preferences::{self, SliderKey};
use crate::resolver::{resolve_drop, DropOutcome};
use crate::scene::{RotationUpdate, SceneLayout, ScreenAnchors};
use crate::state::GameState;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;

/// Something the presentation layer should show.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionSignal {
    DragStarted { label: BodyId, pointer_id: i32 },
    /// Transient miss feedback on the dropped label.
    Incorrect { label: BodyId },
    /// Success stamp at a screen position.
    Stamp { pos: Vec2 },
    Progress { correct: usize, total: usize },
    Completed { countdown_secs: u32 },
    Countdown { seconds_left: u32 },
    Rewarded { item: Option<String> },
    ZoomChanged { zoom: f32 },
}

/// Per-frame input from the host loop.
pub struct FrameInput<'a> {
    pub now_seconds: f64,
    /// Seconds since the previous frame.
    pub dt: f64,
    /// Wall clock, recorded with an awarded reward.
    pub wall_clock_ms: f64,
    /// `None` until the renderer has a camera.
    pub projection: Option<&'a dyn Projection>,
    pub viewport: Vec2,
}

pub struct QuizSession<C, P> {
    catalog: Catalog,
    quiz: QuizConfig,
    state: GameState,
    layout: SceneLayout,
    gestures: GestureController,
    completion: CompletionFlow,
    anchors: ScreenAnchors,
    queue: GestureQueue,
    confetti: Confetti,
    collectibles: C,
    prefs: P,
    rng: StdRng,
    viewport: Vec2,
    torn_down: bool,
}

impl<C: CollectibleStore, P: KeyValueStore> QuizSession<C, P> {
    /// New session: labels deranged with `rng`, sliders seeded from `prefs`.
    pub fn new(
        catalog: Catalog,
        scene: SceneConfig,
        quiz: QuizConfig,
        collectibles: C,
        prefs: P,
        mut rng: StdRng,
    ) -> Self {
        let state = GameState::new_session(&catalog, &mut rng);
        let mut layout = SceneLayout::new(&catalog, scene);
        seed_layout(&mut layout, &prefs);
        let completion = CompletionFlow::new(quiz.countdown_secs);
        Self {
            catalog,
            quiz,
            state,
            layout,
            gestures: GestureController::new(),
            completion,
            anchors: ScreenAnchors::new(),
            queue: GestureQueue::new(),
            confetti: Confetti::new(),
            collectibles,
            prefs,
            rng,
            viewport: Vec2::ZERO,
            torn_down: false,
        }
    }

    // ---------------- tracking ----------------

    pub fn marker_found(&mut self) -> Vec<SessionSignal> {
        if self.torn_down {
            return Vec::new();
        }
        self.state.set_marker_visible(true);
        log::info!("[tracking] marker found");
        let zoom = self.layout.fit_core_bodies_to_marker();
        vec![SessionSignal::ZoomChanged { zoom }]
    }

    pub fn marker_lost(&mut self) {
        self.state.set_marker_visible(false);
        self.gestures.reset_touches();
        log::info!("[tracking] marker lost");
    }

    // ---------------- input ----------------

    pub fn push_pointer(&mut self, event: PointerEvent) {
        if !self.torn_down {
            self.queue.push(event);
        }
    }

    /// Applies every queued pointer event in arrival order.
    pub fn pump_input(&mut self) -> Vec<SessionSignal> {
        let mut out = Vec::new();
        for event in self.queue.drain() {
            let signals = self.gestures.handle(
                &event,
                &mut self.state,
                &mut self.layout,
                |state: &GameState, id| state.can_drag(id),
            );
            for signal in signals {
                self.apply_gesture(signal, &mut out);
            }
        }
        out
    }

    /// Queues `event` and applies it right away.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Vec<SessionSignal> {
        self.push_pointer(event);
        self.pump_input()
    }

    fn apply_gesture(&mut self, signal: GestureSignal, out: &mut Vec<SessionSignal>) {
        match signal {
            GestureSignal::DragStarted {
                label, pointer_id, ..
            } => out.push(SessionSignal::DragStarted { label, pointer_id }),
            GestureSignal::DragMoved { .. } | GestureSignal::PinchStarted { .. } => {}
            GestureSignal::DragEnded { label, drop } => self.resolve(label, drop, out),
            GestureSignal::Zoomed { zoom } => out.push(SessionSignal::ZoomChanged { zoom }),
            GestureSignal::PinchEnded { zoom } => {
                preferences::save(&mut self.prefs, SliderKey::Zoom, zoom);
                out.push(SessionSignal::ZoomChanged { zoom });
            }
        }
    }

    fn resolve(&mut self, label: BodyId, drop: Option<Vec2>, out: &mut Vec<SessionSignal>) {
        match resolve_drop(&mut self.state, label, drop, &self.anchors, &self.quiz) {
            DropOutcome::Ignored | DropOutcome::AlreadyLocked => {}
            DropOutcome::Incorrect => out.push(SessionSignal::Incorrect { label }),
            DropOutcome::Locked {
                anchor,
                all_matched,
                ..
            } => {
                out.push(SessionSignal::Stamp { pos: anchor.pos });
                out.push(SessionSignal::Progress {
                    correct: self.state.correct_count(),
                    total: self.state.total_count(),
                });
                if all_matched {
                    self.complete(out);
                }
            }
        }
    }

    fn complete(&mut self, out: &mut Vec<SessionSignal>) {
        if let Some(CompletionEvent::Started { seconds }) =
            self.completion.begin(&mut self.state, &mut self.gestures)
        {
            let duration = seconds as f32;
            self.confetti
                .start(&mut self.rng, self.viewport.x, self.viewport.y, duration);
            out.push(SessionSignal::Completed {
                countdown_secs: seconds,
            });
            // a zero-length countdown rewards straight away
            if seconds == 0 {
                self.tick_completion(0.0, 0.0, out);
            }
        }
    }

    fn tick_completion(&mut self, dt: f64, wall_clock_ms: f64, out: &mut Vec<SessionSignal>) {
        let events = self
            .completion
            .tick(dt, &mut self.collectibles, &mut self.rng, wall_clock_ms);
        for event in events {
            match event {
                CompletionEvent::Started { .. } => {}
                CompletionEvent::Tick { seconds_left } => {
                    out.push(SessionSignal::Countdown { seconds_left })
                }
                CompletionEvent::Rewarded { item } => out.push(SessionSignal::Rewarded { item }),
            }
        }
    }

    // ---------------- frame ----------------

    /// Advances orbits, reprojects anchors, applies queued input and runs the
    /// completion countdown.
    pub fn frame(&mut self, input: FrameInput<'_>) -> Vec<SessionSignal> {
        if self.torn_down {
            return Vec::new();
        }
        if input.viewport != self.viewport {
            self.viewport = input.viewport;
            self.confetti.resize(input.viewport.x, input.viewport.y);
        }
        self.layout.advance(input.now_seconds);
        match input.projection {
            Some(camera) => self.layout.project_into(
                camera,
                input.viewport.x,
                input.viewport.y,
                &mut self.anchors,
            ),
            None => self.anchors.clear(),
        }
        let mut out = self.pump_input();
        self.tick_completion(input.dt, input.wall_clock_ms, &mut out);
        self.confetti.step(&mut self.rng, input.dt as f32);
        out
    }

    /// Label positions for the current anchors.
    pub fn placements(&mut self) -> Vec<LabelPlacement> {
        let zoom = self.layout.zoom();
        place_labels(
            &mut self.state,
            &self.catalog,
            &self.anchors,
            zoom,
            self.quiz.label_stack_spacing,
        )
    }

    // ---------------- sliders ----------------

    pub fn set_zoom(&mut self, value: f32) -> f32 {
        let applied = self.layout.set_zoom(value);
        preferences::save(&mut self.prefs, SliderKey::Zoom, applied);
        applied
    }

    pub fn set_orbit_scale(&mut self, value: f32) -> f32 {
        let applied = self.layout.set_orbit_scale(value);
        preferences::save(&mut self.prefs, SliderKey::Orbit, applied);
        applied
    }

    pub fn set_planet_scale(&mut self, value: f32) -> f32 {
        let applied = self.layout.set_planet_scale(value);
        preferences::save(&mut self.prefs, SliderKey::Planet, applied);
        applied
    }

    pub fn set_orbit_speed(&mut self, value: f32) -> f32 {
        let applied = self.layout.set_orbit_speed(value);
        preferences::save(&mut self.prefs, SliderKey::Speed, applied);
        applied
    }

    pub fn set_rotation(&mut self, update: RotationUpdate) -> Vec3 {
        let applied = self.layout.set_rotation_degrees(update);
        preferences::save(&mut self.prefs, SliderKey::RotationX, applied.x);
        preferences::save(&mut self.prefs, SliderKey::RotationY, applied.y);
        preferences::save(&mut self.prefs, SliderKey::RotationZ, applied.z);
        applied
    }

    /// Current value and range of one slider.
    pub fn slider(&self, key: SliderKey) -> (f32, SliderRange) {
        let rotation = self.layout.rotation_degrees();
        let RotationRanges { x, y, z } = self.layout.rotation_range();
        match key {
            SliderKey::Zoom => (self.layout.zoom(), self.layout.zoom_range()),
            SliderKey::Orbit => (self.layout.orbit_scale(), self.layout.orbit_scale_range()),
            SliderKey::Planet => (self.layout.planet_scale(), self.layout.planet_scale_range()),
            SliderKey::Speed => (self.layout.orbit_speed(), self.layout.orbit_speed_range()),
            SliderKey::RotationX => (rotation.x, x),
            SliderKey::RotationY => (rotation.y, y),
            SliderKey::RotationZ => (rotation.z, z),
        }
    }

    // ---------------- lifecycle ----------------

    /// Stops the countdown and the confetti and drops pending input. The
    /// session ignores everything afterwards.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.completion.teardown();
        self.confetti.stop();
        self.queue.drain();
        log::info!("[session] torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    // ---------------- accessors ----------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn layout(&self) -> &SceneLayout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut SceneLayout {
        &mut self.layout
    }

    pub fn anchors(&self) -> &ScreenAnchors {
        &self.anchors
    }

    pub fn gesture_mode(&self) -> GestureMode {
        self.gestures.mode()
    }

    pub fn completion_phase(&self) -> CompletionPhase {
        self.completion.phase()
    }

    pub fn confetti(&self) -> &Confetti {
        &self.confetti
    }

    pub fn collectibles(&self) -> &C {
        &self.collectibles
    }

    pub fn prefs(&self) -> &P {
        &self.prefs
    }
}

fn seed_layout<P: KeyValueStore + ?Sized>(layout: &mut SceneLayout, prefs: &P) {
    let zoom = preferences::load(prefs, SliderKey::Zoom, &layout.zoom_range());
    let orbit = preferences::load(prefs, SliderKey::Orbit, &layout.orbit_scale_range());
    let planet = preferences::load(prefs, SliderKey::Planet, &layout.planet_scale_range());
    let speed = preferences::load(prefs, SliderKey::Speed, &layout.orbit_speed_range());
    let ranges = layout.rotation_range();
    layout.set_zoom(zoom);
    layout.set_orbit_scale(orbit);
    layout.set_planet_scale(planet);
    layout.set_orbit_speed(speed);
    layout.set_rotation_degrees(RotationUpdate {
        x: Some(preferences::load(prefs, SliderKey::RotationX, &ranges.x)),
        y: Some(preferences::load(prefs, SliderKey::RotationY, &ranges.y)),
        z: Some(preferences::load(prefs, SliderKey::RotationZ, &ranges.z)),
    });
}
