//! End-of-activity flow: countdown, then one reward draw.
//!
//! Time is fed in by the frame loop, so nothing fires once the session is torn
//! down and the loop stops calling [`CompletionFlow::tick`].

use crate::gallery::CollectibleStore;
use crate::gesture::GestureController;
use crate::state::GameState;
use rand::RngCore;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionPhase {
    Running,
    Counting { seconds_left: u32 },
    Rewarded,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CompletionEvent {
    Started { seconds: u32 },
    Tick { seconds_left: u32 },
    /// `None` when the reward pool is empty.
    Rewarded { item: Option<String> },
}

pub type CompletionEvents = SmallVec<[CompletionEvent; 2]>;

#[derive(Debug)]
pub struct CompletionFlow {
    phase: CompletionPhase,
    countdown_secs: u32,
    elapsed: f64,
}

impl CompletionFlow {
    pub fn new(countdown_secs: u32) -> Self {
        Self {
            phase: CompletionPhase::Running,
            countdown_secs,
            elapsed: 0.0,
        }
    }

    pub fn phase(&self) -> CompletionPhase {
        self.phase
    }

    pub fn countdown_secs(&self) -> u32 {
        self.countdown_secs
    }

    pub fn is_counting(&self) -> bool {
        matches!(self.phase, CompletionPhase::Counting { .. })
    }

    /// Marks the session complete and starts the countdown. Runs once per
    /// session; later calls return `None`.
    pub fn begin(
        &mut self,
        state: &mut GameState,
        gestures: &mut GestureController,
    ) -> Option<CompletionEvent> {
        if state.completed || self.phase != CompletionPhase::Running {
            return None;
        }
        state.completed = true;
        gestures.set_drag_enabled(false);
        self.elapsed = 0.0;
        self.phase = CompletionPhase::Counting {
            seconds_left: self.countdown_secs,
        };
        log::info!("[completion] all labels matched, countdown {}s", self.countdown_secs);
        Some(CompletionEvent::Started {
            seconds: self.countdown_secs,
        })
    }

    /// Advances the countdown by `dt` seconds. Emits a tick whenever the
    /// whole-second display changes and the reward once it reaches zero.
    pub fn tick(
        &mut self,
        dt: f64,
        store: &mut dyn CollectibleStore,
        rng: &mut dyn RngCore,
        won_at_ms: f64,
    ) -> CompletionEvents {
        let mut out = CompletionEvents::new();
        let CompletionPhase::Counting { seconds_left } = self.phase else {
            return out;
        };
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        let whole = self.elapsed.floor().min(u32::MAX as f64) as u32;
        let left = self.countdown_secs.saturating_sub(whole);
        if left == 0 {
            let item = store.award_random(rng, won_at_ms);
            self.phase = CompletionPhase::Rewarded;
            log::info!("[completion] reward {:?}", item);
            out.push(CompletionEvent::Rewarded { item });
        } else if left < seconds_left {
            self.phase = CompletionPhase::Counting { seconds_left: left };
            out.push(CompletionEvent::Tick { seconds_left: left });
        }
        out
    }

    /// Session teardown: a pending countdown never fires.
    pub fn teardown(&mut self) {
        if self.is_counting() {
            log::info!("[completion] countdown cancelled");
            self.phase = CompletionPhase::Cancelled;
        }
    }
}
