use super::Wiring;
use crate::constants::{LABEL_ID_ATTR, LABEL_SELECTOR};
use crate::dom;
use crate::input;
use orbit_quiz_core::{BodyId, PointerEvent, PointerKind, PointerSample, SessionSignal};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy)]
enum Phase {
    Down,
    Move,
    Up,
    Cancel,
}

/// Window-level pointer listeners. Label drags and two-finger pinches share
/// the same stream; the session tells them apart.
pub fn wire_pointer_handlers(w: &Wiring) {
    let Some(window) = web::window() else { return };
    let target: &web::EventTarget = window.as_ref();
    for (name, phase) in [
        ("pointerdown", Phase::Down),
        ("pointermove", Phase::Move),
        ("pointerup", Phase::Up),
        ("pointercancel", Phase::Cancel),
    ] {
        let w = w.clone();
        dom::add_event_listener(target, name, move |ev: web::PointerEvent| {
            on_pointer(&w, phase, &ev);
        });
    }
}

fn on_pointer(w: &Wiring, phase: Phase, ev: &web::PointerEvent) {
    let p = input::client_point(ev.client_x(), ev.client_y());
    let sample = PointerSample::new(
        ev.pointer_id(),
        PointerKind::from_dom(&ev.pointer_type()),
        p.x,
        p.y,
    );
    let event = match phase {
        Phase::Down => {
            let label = label_under(ev);
            if label.is_some() {
                ev.prevent_default();
            }
            PointerEvent::Down { sample, label }
        }
        Phase::Move => PointerEvent::Move(sample),
        Phase::Up => PointerEvent::Up(sample),
        Phase::Cancel => PointerEvent::Cancel(sample),
    };
    let signals = w.session.borrow_mut().handle_pointer(event);
    for signal in &signals {
        if let SessionSignal::DragStarted { label, pointer_id } = signal {
            if let Some(el) = w.overlay.label(*label) {
                _ = el.set_pointer_capture(*pointer_id);
            }
            log::debug!("[drag] capture label={} pointer={}", label.0, pointer_id);
        }
    }
    w.present(&signals);
}

fn label_under(ev: &web::PointerEvent) -> Option<BodyId> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let label = target.closest(LABEL_SELECTOR).ok()??;
    input::parse_label_id(&label.get_attribute(LABEL_ID_ATTR)?).map(BodyId)
}
