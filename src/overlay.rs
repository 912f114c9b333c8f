//! DOM overlay: status pills, draggable name labels, feedback and the
//! completion/reward modals.

use crate::constants::*;
use crate::dom;
use crate::input;
use crate::timers::PendingTimers;
use glam::Vec2;
use orbit_quiz_core::{BodyId, Catalog, LabelPlacement, SessionSignal};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Overlay {
    document: web::Document,
    /// Indexed by `BodyId`.
    labels: Vec<web::HtmlElement>,
    stamp_layer: Option<web::Element>,
    timers: Rc<RefCell<PendingTimers>>,
}

impl Overlay {
    /// Creates one label button per catalog body inside the labels layer.
    pub fn new(document: &web::Document, catalog: &Catalog) -> anyhow::Result<Self> {
        let layer = document
            .get_element_by_id(LABELS_LAYER_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", LABELS_LAYER_ID))?;
        layer.set_inner_html("");
        let mut labels = Vec::with_capacity(catalog.len());
        for (id, body) in catalog.iter() {
            let el = document
                .create_element("button")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?
                .dyn_into::<web::HtmlElement>()
                .map_err(|_| anyhow::anyhow!("label is not an HtmlElement"))?;
            _ = el.set_attribute("type", "button");
            el.set_class_name(LABEL_CLASS);
            el.set_text_content(Some(&body.name));
            _ = el.set_attribute(LABEL_ID_ATTR, &id.0.to_string());
            _ = el.style().set_property("visibility", "hidden");
            _ = layer.append_child(&el);
            labels.push(el);
        }
        Ok(Self {
            document: document.clone(),
            labels,
            stamp_layer: document.get_element_by_id(STAMP_LAYER_ID),
            timers: Rc::new(RefCell::new(PendingTimers::new())),
        })
    }

    pub fn label(&self, id: BodyId) -> Option<&web::HtmlElement> {
        self.labels.get(id.0)
    }

    pub fn set_tracking(&self, tracking: bool) {
        let text = if tracking { STATUS_TRACKING } else { STATUS_SCANNING };
        dom::set_text(&self.document, STATUS_PILL_ID, text);
        if let Some(el) = self.document.get_element_by_id(STATUS_PILL_ID) {
            _ = el.class_list().toggle_with_force(STATUS_LOST_CLASS, !tracking);
        }
        dom::set_hidden(&self.document, ZOOM_CONTROLS_ID, !tracking);
        dom::set_hidden(&self.document, ROTATION_CONTROLS_ID, !tracking);
    }

    pub fn set_progress(&self, correct: usize, total: usize) {
        dom::set_text(&self.document, PROGRESS_PILL_ID, &input::progress_text(correct, total));
    }

    pub fn render_labels(&self, placements: &[LabelPlacement]) {
        for p in placements {
            let Some(el) = self.label(p.id) else { continue };
            let style = el.style();
            if p.visible {
                _ = style.set_property("left", &input::css_px(p.pos.x));
                _ = style.set_property("top", &input::css_px(p.pos.y));
                _ = style.set_property("opacity", "1");
                _ = style.set_property("visibility", "visible");
            } else {
                _ = style.set_property("opacity", "0");
                _ = style.set_property("visibility", "hidden");
                _ = el.class_list().remove_1(INCORRECT_CLASS);
            }
            let cl = el.class_list();
            _ = cl.toggle_with_force(DRAGGING_CLASS, p.dragging);
            _ = cl.toggle_with_force(LOCKED_CLASS, p.locked);
        }
    }

    pub fn show_incorrect(&self, id: BodyId) {
        let Some(el) = self.label(id) else { return };
        _ = el.class_list().add_1(INCORRECT_CLASS);
        let el = el.clone();
        self.after(INCORRECT_FEEDBACK_MS, move || {
            _ = el.class_list().remove_1(INCORRECT_CLASS);
        });
    }

    pub fn show_stamp(&self, pos: Vec2) {
        let Some(layer) = &self.stamp_layer else { return };
        let Ok(stamp) = self.document.create_element("div") else { return };
        stamp.set_class_name(STAMP_CLASS);
        stamp.set_text_content(Some(STAMP_GLYPH));
        if let Ok(html) = stamp.clone().dyn_into::<web::HtmlElement>() {
            let style = html.style();
            _ = style.set_property("left", &input::css_px(pos.x));
            _ = style.set_property("top", &input::css_px(pos.y));
        }
        _ = layer.append_child(&stamp);
        self.after(STAMP_LIFETIME_MS, move || stamp.remove());
    }

    pub fn show_completion(&self, countdown_secs: u32) {
        dom::set_text(&self.document, COMPLETION_MESSAGE_ID, SUCCESS_TEXT);
        self.set_countdown(countdown_secs);
        dom::set_hidden(&self.document, COMPLETION_MODAL_ID, false);
    }

    pub fn set_countdown(&self, seconds_left: u32) {
        dom::set_text(&self.document, COMPLETION_COUNTDOWN_ID, &seconds_left.to_string());
    }

    /// Swaps the completion modal for the reward modal.
    pub fn show_reward(&self, item: Option<&str>) {
        dom::set_hidden(&self.document, COMPLETION_MODAL_ID, true);
        if let Some(src) = item {
            if let Some(img) = self
                .document
                .get_element_by_id(REWARD_IMAGE_ID)
                .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
            {
                img.set_src(src);
            }
            dom::set_hidden(&self.document, REWARD_FIGURE_ID, false);
        }
        dom::set_hidden(&self.document, REWARD_MODAL_ID, false);
        dom::set_hidden(&self.document, ACTION_BUTTONS_ID, false);
    }

    /// Presents one session signal. Drag start is handled by the pointer
    /// wiring, zoom changes by the slider panel.
    pub fn apply(&self, signal: &SessionSignal) {
        match signal {
            SessionSignal::Incorrect { label } => self.show_incorrect(*label),
            SessionSignal::Stamp { pos } => self.show_stamp(*pos),
            SessionSignal::Progress { correct, total } => self.set_progress(*correct, *total),
            SessionSignal::Completed { countdown_secs } => self.show_completion(*countdown_secs),
            SessionSignal::Countdown { seconds_left } => self.set_countdown(*seconds_left),
            SessionSignal::Rewarded { item } => self.show_reward(item.as_deref()),
            SessionSignal::DragStarted { .. } | SessionSignal::ZoomChanged { .. } => {}
        }
    }
}

impl Overlay {
    /// Runs `f` once after `ms` milliseconds unless the overlay is torn down
    /// first.
    fn after(&self, ms: i32, f: impl FnOnce() + 'static) {
        let Some(w) = web::window() else { return };
        if self.timers.borrow().is_closed() {
            return;
        }
        let handle = Rc::new(Cell::new(0));
        let timers = self.timers.clone();
        let fired = handle.clone();
        let cb = Closure::once_into_js(move || {
            timers.borrow_mut().finish(fired.get());
            f();
        });
        match w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms) {
            Ok(id) => {
                handle.set(id);
                self.timers.borrow_mut().track(id);
            }
            Err(e) => log::debug!("[overlay] setTimeout failed: {:?}", e),
        }
    }

    /// Clears every pending feedback timer; later feedback is not scheduled.
    pub fn teardown(&self) {
        let handles = self.timers.borrow_mut().close();
        if let Some(w) = web::window() {
            for id in handles {
                w.clear_timeout_with_handle(id);
            }
        }
    }
}
