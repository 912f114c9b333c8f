use crate::camera;
use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom;
use crate::input;
use crate::overlay::Overlay;
use crate::render;
use crate::Session;
use glam::Vec2;
use instant::Instant;
use orbit_quiz_core::{FrameInput, Projection};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: Rc<RefCell<Session>>,
    pub overlay: Rc<Overlay>,
    pub scene: web::Element,
    pub target: web::Element,
    pub confetti: Option<render::ConfettiCanvas>,

    pub started: Instant,
    pub last_instant: Instant,
    pub viewport: Vec2,
    pub pose_scratch: Vec<f32>,
    pub renderer_missing_logged: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = input::clamp_dt((now - self.last_instant).as_secs_f64(), MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let viewport = dom::viewport_size();
        if viewport != self.viewport {
            self.viewport = viewport;
            if let Some(c) = &mut self.confetti {
                c.resize(viewport);
            }
        }

        let camera = camera::scene_camera(&self.scene);
        let (signals, placements) = {
            let mut session = self.session.borrow_mut();
            if session.is_torn_down() {
                return;
            }
            if session.state().marker_visible() {
                if let Some(pose) = camera::marker_pose(&self.target) {
                    session.layout_mut().set_anchor_transform(pose);
                }
            }
            let signals = session.frame(FrameInput {
                now_seconds: (now - self.started).as_secs_f64(),
                dt,
                wall_clock_ms: js_sys::Date::now(),
                projection: camera.as_ref().map(|c| c as &dyn Projection),
                viewport,
            });
            if !render::push_pose(session.layout(), &mut self.pose_scratch)
                && !self.renderer_missing_logged
            {
                log::warn!("[scene] no renderer bridge on the page; bodies will not move");
                self.renderer_missing_logged = true;
            }
            if let Some(c) = &mut self.confetti {
                c.draw(session.confetti());
            }
            (signals, session.placements())
        };

        for signal in &signals {
            self.overlay.apply(signal);
        }
        self.overlay.render_labels(&placements);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if frame_ctx_tick.borrow().session.borrow().is_torn_down() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
