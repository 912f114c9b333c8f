use super::Wiring;
use crate::constants::{SLIDER_RANGE_SUFFIX, SLIDER_VALUE_SUFFIX};
use crate::dom;
use crate::input;
use crate::Session;
use orbit_quiz_core::preferences::SliderKey;
use orbit_quiz_core::RotationUpdate;
use wasm_bindgen::JsCast;
use web_sys as web;

fn slider_name(key: SliderKey) -> &'static str {
    match key {
        SliderKey::Zoom => "zoom",
        SliderKey::Orbit => "orbit",
        SliderKey::Planet => "planet",
        SliderKey::Speed => "speed",
        SliderKey::RotationX => "rotation-x",
        SliderKey::RotationY => "rotation-y",
        SliderKey::RotationZ => "rotation-z",
    }
}

fn readout(key: SliderKey, value: f32) -> String {
    match key {
        SliderKey::RotationX | SliderKey::RotationY | SliderKey::RotationZ => {
            input::format_degrees(value)
        }
        _ => input::format_scale(value),
    }
}

fn slider_input(document: &web::Document, key: SliderKey) -> Option<(web::HtmlInputElement, String)> {
    let (range_id, value_id) = input::slider_ids(slider_name(key), SLIDER_RANGE_SUFFIX, SLIDER_VALUE_SUFFIX);
    let el = document
        .get_element_by_id(&range_id)?
        .dyn_into::<web::HtmlInputElement>()
        .ok()?;
    Some((el, value_id))
}

fn apply(session: &mut Session, key: SliderKey, value: f32) -> f32 {
    match key {
        SliderKey::Zoom => session.set_zoom(value),
        SliderKey::Orbit => session.set_orbit_scale(value),
        SliderKey::Planet => session.set_planet_scale(value),
        SliderKey::Speed => session.set_orbit_speed(value),
        SliderKey::RotationX => {
            session
                .set_rotation(RotationUpdate {
                    x: Some(value),
                    ..Default::default()
                })
                .x
        }
        SliderKey::RotationY => {
            session
                .set_rotation(RotationUpdate {
                    y: Some(value),
                    ..Default::default()
                })
                .y
        }
        SliderKey::RotationZ => {
            session
                .set_rotation(RotationUpdate {
                    z: Some(value),
                    ..Default::default()
                })
                .z
        }
    }
}

fn show(document: &web::Document, el: &web::HtmlInputElement, value_id: &str, key: SliderKey, value: f32) {
    el.set_value(&value.to_string());
    dom::set_text(document, value_id, &readout(key, value));
}

/// Configures every slider from the session's ranges and applies user input.
pub fn wire_sliders(w: &Wiring) {
    for key in SliderKey::ALL {
        let Some((el, value_id)) = slider_input(&w.document, key) else {
            log::warn!("[prefs] no slider for {:?}", key);
            continue;
        };
        let (value, range) = w.session.borrow().slider(key);
        el.set_min(&range.min.to_string());
        el.set_max(&range.max.to_string());
        el.set_step(&range.step.to_string());
        show(&w.document, &el, &value_id, key, value);

        let w = w.clone();
        let target = el.clone();
        dom::add_event_listener(el.as_ref(), "input", move |_: web::Event| {
            let Some(value) = input::parse_slider_value(&target.value()) else {
                return;
            };
            let applied = apply(&mut w.session.borrow_mut(), key, value);
            dom::set_text(&w.document, &value_id, &readout(key, applied));
            if applied != value {
                target.set_value(&applied.to_string());
            }
            w.present(&[]);
        });
    }
}

/// Mirrors the session zoom into the zoom slider after a pinch or a refit.
pub fn sync_zoom(w: &Wiring) {
    let Some((el, value_id)) = slider_input(&w.document, SliderKey::Zoom) else {
        return;
    };
    let (value, _) = w.session.borrow().slider(SliderKey::Zoom);
    show(&w.document, &el, &value_id, SliderKey::Zoom, value);
}
