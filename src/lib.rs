#![cfg(target_arch = "wasm32")]
use instant::Instant;
use orbit_quiz_core::{Catalog, Gallery, QuizConfig, QuizSession, SceneConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod storage;
mod timers;

use constants::*;
use storage::CookieStore;

pub type Session = QuizSession<Gallery<CookieStore>, CookieStore>;

static LOOP_STARTED: AtomicBool = AtomicBool::new(false);

fn wire_action_buttons(document: &web::Document) {
    dom::add_click_listener(document, RETRY_BUTTON_ID, || {
        if let Some(w) = web::window() {
            _ = w.location().reload();
        }
    });
    dom::add_click_listener(document, CLOSE_BUTTON_ID, || {
        if let Some(w) = web::window() {
            _ = w.location().set_href(RETURN_URL);
        }
    });
}

/// Cancels the countdown and pending overlay timers when the page goes away
/// so no reward is granted for an abandoned session.
fn wire_teardown(session: &Rc<RefCell<Session>>, overlay: &Rc<overlay::Overlay>) {
    let Some(window) = web::window() else { return };
    for event in ["pagehide", "beforeunload"] {
        let session = session.clone();
        let overlay = overlay.clone();
        dom::add_event_listener(window.as_ref(), event, move |_: web::Event| {
            if let Ok(mut s) = session.try_borrow_mut() {
                s.teardown();
            }
            overlay.teardown();
        });
    }
}

fn start_frame_loop(ctx: &Rc<RefCell<frame::FrameContext>>) {
    if LOOP_STARTED.swap(true, Ordering::SeqCst) {
        return;
    }
    log::info!("[scene] render loop started");
    frame::start_loop(ctx.clone());
}

fn render_started(scene: &web::Element) -> bool {
    js_sys::Reflect::get(scene.as_ref(), &JsValue::from_str("renderStarted"))
        .map(|v| v.is_truthy())
        .unwrap_or(false)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-quiz starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let scene = document
        .get_element_by_id(SCENE_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", SCENE_ID))?;
    let target = document
        .get_element_by_id(TARGET_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", TARGET_ID))?;

    let catalog = Catalog::solar_system();
    let quiz = QuizConfig::default();
    let prefs = CookieStore::new(&document)?;
    let gallery = Gallery::new(prefs.clone(), quiz.reward_pool.clone());
    let overlay = Rc::new(overlay::Overlay::new(&document, &catalog)?);

    let session: Rc<RefCell<Session>> = Rc::new(RefCell::new(QuizSession::new(
        catalog,
        SceneConfig::default(),
        quiz,
        gallery,
        prefs,
        StdRng::from_entropy(),
    )));
    {
        let s = session.borrow();
        overlay.set_tracking(false);
        overlay.set_progress(s.state().correct_count(), s.state().total_count());
    }

    let wiring = events::Wiring {
        document: document.clone(),
        session: session.clone(),
        overlay: overlay.clone(),
    };
    events::wire_sliders(&wiring);
    events::wire_pointer_handlers(&wiring);
    events::wire_tracking(&wiring, &target);
    wire_action_buttons(&document);
    wire_teardown(&session, &overlay);

    let confetti = document
        .get_element_by_id(CONFETTI_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        .and_then(|canvas| match render::ConfettiCanvas::new(canvas) {
            Ok(c) => Some(c),
            Err(e) => {
                log::warn!("[completion] confetti disabled: {:?}", e);
                None
            }
        });

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        overlay,
        scene: scene.clone(),
        target,
        confetti,
        started: now,
        last_instant: now,
        viewport: glam::Vec2::ZERO,
        pose_scratch: Vec::new(),
        renderer_missing_logged: false,
    }));

    if render_started(&scene) {
        start_frame_loop(&frame_ctx);
    } else {
        let ctx = frame_ctx.clone();
        dom::add_event_listener(scene.as_ref(), EVENT_RENDER_START, move |_: web::Event| {
            start_frame_loop(&ctx);
        });
    }

    Ok(())
}
