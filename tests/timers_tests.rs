// Host-side tests for the pending timer bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod timers {
    include!("../src/timers.rs");
}

use timers::PendingTimers;

#[test]
fn finished_timers_are_forgotten() {
    let mut timers = PendingTimers::new();
    assert!(timers.track(3));
    assert!(timers.track(7));
    timers.finish(3);
    assert_eq!(timers.len(), 1);
    timers.finish(42);
    assert_eq!(timers.len(), 1);
}

#[test]
fn closing_returns_pending_handles_and_refuses_new_ones() {
    let mut timers = PendingTimers::new();
    timers.track(1);
    timers.track(2);
    timers.finish(1);
    assert_eq!(timers.close(), vec![2]);
    assert!(timers.is_closed());
    assert!(timers.is_empty());
    assert!(!timers.track(5));
    assert!(timers.is_empty());
    assert!(timers.close().is_empty());
}
