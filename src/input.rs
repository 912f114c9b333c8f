use glam::{Mat4, Vec2};

/// Column-major 4x4 matrix from a three.js `elements` array.
#[inline]
pub fn mat4_from_elements(elements: &[f32]) -> Option<Mat4> {
    let cols: &[f32; 16] = elements.get(..16)?.try_into().ok()?;
    let m = Mat4::from_cols_array(cols);
    m.is_finite().then_some(m)
}

/// Slider input value; empty or non-numeric text yields `None`.
#[inline]
pub fn parse_slider_value(raw: &str) -> Option<f32> {
    raw.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Label index stored in a label element's `data-id`.
#[inline]
pub fn parse_label_id(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok()
}

#[inline]
pub fn format_scale(value: f32) -> String {
    format!("{:.2}x", value)
}

#[inline]
pub fn format_degrees(value: f32) -> String {
    format!("{}°", value.round() as i32)
}

#[inline]
pub fn progress_text(correct: usize, total: usize) -> String {
    format!("Aciertos: {}/{}", correct, total)
}

/// CSS pixel offset for an absolutely positioned overlay element.
#[inline]
pub fn css_px(value: f32) -> String {
    format!("{}px", value)
}

/// Value of `key` inside a `document.cookie` string, still URI-encoded.
pub fn cookie_value<'a>(cookies: &'a str, key: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|item| item.strip_prefix(key)?.strip_prefix('='))
        .filter(|v| !v.is_empty())
}

/// `document.cookie` assignment for an already URI-encoded value.
pub fn cookie_assignment(key: &str, encoded: &str, max_age_secs: u32, path: &str, same_site: &str) -> String {
    format!(
        "{}={}; path={}; max-age={}; SameSite={}",
        key, encoded, path, max_age_secs, same_site
    )
}

/// Cookie that expires immediately.
pub fn cookie_removal(key: &str, path: &str) -> String {
    format!("{}=; path={}; max-age=0", key, path)
}

/// Frame delta in seconds, clamped to `[0, max_dt]`. Non-finite deltas count
/// as zero.
#[inline]
pub fn clamp_dt(dt_sec: f64, max_dt: f64) -> f64 {
    if dt_sec.is_finite() {
        dt_sec.clamp(0.0, max_dt)
    } else {
        0.0
    }
}

/// `(input id, readout id)` of a slider.
#[inline]
pub fn slider_ids(name: &str, range_suffix: &str, value_suffix: &str) -> (String, String) {
    (format!("{}{}", name, range_suffix), format!("{}{}", name, value_suffix))
}

/// Pointer position relative to the viewport origin.
#[inline]
pub fn client_point(client_x: i32, client_y: i32) -> Vec2 {
    Vec2::new(client_x as f32, client_y as f32)
}
