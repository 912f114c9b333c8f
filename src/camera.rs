use crate::input;
use glam::Mat4;
use orbit_quiz_core::MatrixCamera;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Follows a property path on a JS object, stopping at `undefined`/`null`.
fn lookup(root: &JsValue, path: &[&str]) -> Option<JsValue> {
    let mut cur = root.clone();
    for key in path {
        cur = js_sys::Reflect::get(&cur, &JsValue::from_str(key)).ok()?;
        if cur.is_undefined() || cur.is_null() {
            return None;
        }
    }
    Some(cur)
}

/// Reads a three.js `Matrix4` at `path` (its `elements` array).
fn matrix_at(root: &JsValue, path: &[&str]) -> Option<Mat4> {
    let elements = lookup(root, path)?;
    let values: Vec<f32> = js_sys::Array::from(&elements)
        .iter()
        .map(|v| v.as_f64().unwrap_or(f64::NAN) as f32)
        .collect();
    input::mat4_from_elements(&values)
}

/// Projection of the AR scene's active camera; `None` until the renderer has
/// created it.
pub fn scene_camera(scene: &web::Element) -> Option<MatrixCamera> {
    let scene: &JsValue = scene.unchecked_ref();
    let projection = matrix_at(scene, &["camera", "projectionMatrix", "elements"])?;
    let view = matrix_at(scene, &["camera", "matrixWorldInverse", "elements"])?;
    Some(MatrixCamera { view, projection })
}

/// World matrix of the tracked marker entity.
pub fn marker_pose(target: &web::Element) -> Option<Mat4> {
    matrix_at(target.unchecked_ref(), &["object3D", "matrixWorld", "elements"])
}
