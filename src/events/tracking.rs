use super::Wiring;
use crate::constants::{EVENT_TARGET_FOUND, EVENT_TARGET_LOST};
use crate::dom;
use web_sys as web;

/// Marker found/lost edges from the tracking entity.
pub fn wire_tracking(w: &Wiring, target: &web::Element) {
    let found = w.clone();
    dom::add_event_listener(target.as_ref(), EVENT_TARGET_FOUND, move |_: web::Event| {
        let signals = found.session.borrow_mut().marker_found();
        found.overlay.set_tracking(true);
        found.present(&signals);
    });

    let lost = w.clone();
    dom::add_event_listener(target.as_ref(), EVENT_TARGET_LOST, move |_: web::Event| {
        lost.session.borrow_mut().marker_lost();
        lost.overlay.set_tracking(false);
        lost.present(&[]);
    });
}
