//! Persisted slider positions used to seed the layout.

use crate::config::SliderRange;
use crate::persistence::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SliderKey {
    Zoom,
    Orbit,
    Planet,
    Speed,
    RotationX,
    RotationY,
    RotationZ,
}

impl SliderKey {
    pub const ALL: [SliderKey; 7] = [
        SliderKey::Zoom,
        SliderKey::Orbit,
        SliderKey::Planet,
        SliderKey::Speed,
        SliderKey::RotationX,
        SliderKey::RotationY,
        SliderKey::RotationZ,
    ];

    pub fn storage_key(self) -> &'static str {
        match self {
            SliderKey::Zoom => "av_slider_zoom",
            SliderKey::Orbit => "av_slider_orbit",
            SliderKey::Planet => "av_slider_planet",
            SliderKey::Speed => "av_slider_speed",
            SliderKey::RotationX => "av_slider_rotation_x",
            SliderKey::RotationY => "av_slider_rotation_y",
            SliderKey::RotationZ => "av_slider_rotation_z",
        }
    }
}

/// Stored value clamped into `range`, or `range.initial` when absent or
/// unparseable.
pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: SliderKey, range: &SliderRange) -> f32 {
    let stored = store
        .get(key.storage_key())
        .and_then(|raw| raw.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite());
    match stored {
        Some(v) => range.clamp(v),
        None => range.initial,
    }
}

/// Writes `value` with four decimals. Non-finite values are skipped.
pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, key: SliderKey, value: f32) {
    if !value.is_finite() {
        return;
    }
    store.set(key.storage_key(), &format!("{value:.4}"));
    log::debug!("[prefs] {} = {:.4}", key.storage_key(), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    const RANGE: SliderRange = SliderRange {
        min: 0.5,
        max: 3.0,
        initial: 1.0,
        step: 0.05,
    };

    #[test]
    fn missing_value_uses_initial() {
        let store = MemoryStore::new();
        assert_eq!(load(&store, SliderKey::Planet, &RANGE), 1.0);
    }

    #[test]
    fn stored_value_is_clamped() {
        let mut store = MemoryStore::new();
        store.set(SliderKey::Planet.storage_key(), "9.5");
        assert_eq!(load(&store, SliderKey::Planet, &RANGE), 3.0);
    }

    #[test]
    fn garbage_value_uses_initial() {
        let mut store = MemoryStore::new();
        store.set(SliderKey::Planet.storage_key(), "NaN");
        assert_eq!(load(&store, SliderKey::Planet, &RANGE), 1.0);
        store.set(SliderKey::Planet.storage_key(), "abc");
        assert_eq!(load(&store, SliderKey::Planet, &RANGE), 1.0);
    }

    #[test]
    fn save_round_trips_four_decimals() {
        let mut store = MemoryStore::new();
        save(&mut store, SliderKey::Zoom, 1.23456);
        assert_eq!(store.get("av_slider_zoom").as_deref(), Some("1.2346"));
        save(&mut store, SliderKey::Zoom, f32::INFINITY);
        assert_eq!(store.get("av_slider_zoom").as_deref(), Some("1.2346"));
    }
}
