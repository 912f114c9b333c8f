//! Runtime configuration for the scene engine and the matching rules.

use crate::constants::*;
use glam::Vec3;

/// Bounds and default of a UI slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    pub initial: f32,
    pub step: f32,
}

impl SliderRange {
    pub const fn from_array(values: [f32; 4]) -> Self {
        Self {
            min: values[0],
            max: values[1],
            initial: values[2],
            step: values[3],
        }
    }

    /// Clamps into `[min, max]`. NaN yields `fallback` clamped.
    #[inline]
    pub fn clamp_or(&self, value: f32, fallback: f32) -> f32 {
        let v = if value.is_nan() { fallback } else { value };
        v.clamp(self.min, self.max)
    }

    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        self.clamp_or(value, self.initial)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationRanges {
    pub x: SliderRange,
    pub y: SliderRange,
    pub z: SliderRange,
}

impl RotationRanges {
    pub fn initial(&self) -> Vec3 {
        Vec3::new(self.x.initial, self.y.initial, self.z.initial)
    }
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub base_system_scale: f32,
    pub planet_mesh_scale: f32,
    pub sun_scale: f32,
    pub base_orbit_speed_scale: f32,
    pub root_offset: Vec3,
    /// Catalog keys of the bodies framed by `fit_core_bodies_to_marker`.
    pub core_bodies: Vec<String>,
    /// Width the core bodies should span, in marker widths.
    pub core_target_width: f32,
    pub zoom: SliderRange,
    pub orbit: SliderRange,
    pub planet: SliderRange,
    pub speed: SliderRange,
    pub rotation: RotationRanges,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            base_system_scale: BASE_SYSTEM_SCALE,
            planet_mesh_scale: PLANET_MESH_SCALE,
            sun_scale: SUN_SCALE,
            base_orbit_speed_scale: BASE_ORBIT_SPEED_SCALE,
            root_offset: Vec3::from_array(ROOT_OFFSET),
            core_bodies: CORE_BODY_IDS.iter().map(|s| s.to_string()).collect(),
            core_target_width: CORE_TARGET_WIDTH,
            zoom: SliderRange::from_array(ZOOM_RANGE),
            orbit: SliderRange::from_array(ORBIT_RANGE),
            planet: SliderRange::from_array(PLANET_RANGE),
            speed: SliderRange::from_array(SPEED_RANGE),
            rotation: RotationRanges {
                x: SliderRange::from_array(ROTATION_X_RANGE),
                y: SliderRange::from_array(ROTATION_Y_RANGE),
                z: SliderRange::from_array(ROTATION_Z_RANGE),
            },
        }
    }
}

/// Where an unlocked label sitting on a freshly locked anchor goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DisplacementPolicy {
    /// Leave it stacked under the locked label.
    #[default]
    Stay,
    /// Move it to the anchor the locked label just left.
    SwapToVacated,
}

#[derive(Clone, Debug)]
pub struct QuizConfig {
    pub snap_distance: f32,
    pub countdown_secs: u32,
    pub label_stack_spacing: f32,
    pub displacement: DisplacementPolicy,
    pub reward_pool: Vec<String>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            snap_distance: SNAP_DISTANCE_PX,
            countdown_secs: COMPLETION_COUNTDOWN_SECS,
            label_stack_spacing: LABEL_STACK_SPACING_PX,
            displacement: DisplacementPolicy::default(),
            reward_pool: default_reward_pool(),
        }
    }
}
