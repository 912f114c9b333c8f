use crate::constants::BODY_POSE_STRIDE;
use orbit_quiz_core::{Confetti, SceneLayout};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    /// Mesh update hook provided by the page's three.js scene.
    #[wasm_bindgen(js_namespace = orbitQuizRenderer, js_name = applyPose, catch)]
    fn apply_pose(root: &[f32], bodies: &[f32], sun_radius: f32) -> Result<(), JsValue>;
}

/// Pushes the root matrix, the per-body `[x, y, z, radius]` poses and the sun
/// radius to the renderer. Returns false when the renderer is not on the page.
pub fn push_pose(layout: &SceneLayout, scratch: &mut Vec<f32>) -> bool {
    let root = layout.root_matrix().to_cols_array();
    scratch.clear();
    scratch.reserve(BODY_POSE_STRIDE * 10);
    for (_, pos, radius) in layout.body_poses() {
        scratch.extend_from_slice(&[pos.x, pos.y, pos.z, radius]);
    }
    match apply_pose(&root, scratch.as_slice(), layout.sun_radius()) {
        Ok(()) => true,
        Err(e) => {
            log::debug!("[scene] renderer unavailable: {:?}", e);
            false
        }
    }
}

pub struct ConfettiCanvas {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
    was_active: bool,
}

impl ConfettiCanvas {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("unexpected context type"))?;
        Ok(Self {
            canvas,
            ctx,
            dpr: 1.0,
            was_active: false,
        })
    }

    pub fn resize(&mut self, css_size: glam::Vec2) {
        self.dpr = crate::dom::sync_canvas_backing_size(&self.canvas, css_size);
    }

    pub fn draw(&mut self, confetti: &Confetti) {
        let active = confetti.is_active();
        if !active && !self.was_active {
            return;
        }
        self.was_active = active;
        let ctx = &self.ctx;
        _ = ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
        ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64 / self.dpr,
            self.canvas.height() as f64 / self.dpr,
        );
        if !active {
            return;
        }
        for p in confetti.pieces() {
            let s = p.size as f64;
            ctx.save();
            _ = ctx.translate(p.x as f64, p.y as f64);
            _ = ctx.rotate(p.rotation as f64);
            ctx.set_global_alpha(p.opacity as f64);
            ctx.set_fill_style(&JsValue::from_str(p.color_css()));
            ctx.fill_rect(-s / 2.0, -s / 2.0, s, s * 0.6);
            ctx.restore();
        }
    }
}
