pub mod pointer;
pub mod sliders;
pub mod tracking;

pub use pointer::wire_pointer_handlers;
pub use sliders::wire_sliders;
pub use tracking::wire_tracking;

use crate::overlay::Overlay;
use crate::Session;
use orbit_quiz_core::SessionSignal;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Handles shared by every DOM listener.
#[derive(Clone)]
pub struct Wiring {
    pub document: web::Document,
    pub session: Rc<RefCell<Session>>,
    pub overlay: Rc<Overlay>,
}

impl Wiring {
    /// Shows `signals` and re-lays the labels.
    pub fn present(&self, signals: &[SessionSignal]) {
        for signal in signals {
            self.overlay.apply(signal);
            if let SessionSignal::ZoomChanged { .. } = signal {
                sliders::sync_zoom(self);
            }
        }
        let placements = self.session.borrow_mut().placements();
        self.overlay.render_labels(&placements);
    }
}
