//! Parametric layout of the solar system anchored to the tracked marker.
//!
//! The engine owns zoom, orbit/planet scales, orbit speed, rotation and the
//! simulated orbital clock. Each frame it advances the clock and projects the
//! body positions to screen space for hit-testing and label placement.
//! Setters never fail: input is clamped into the configured range and the
//! applied value is returned.

use crate::camera::{project_with, Projection};
use crate::catalog::{BodyId, Catalog};
use crate::config::{RotationRanges, SceneConfig, SliderRange};
use crate::constants::SUN_RADIUS;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use std::f32::consts::TAU;

/// Screen-space position of one body for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenAnchor {
    pub id: BodyId,
    pub pos: Vec2,
    /// Projected depth lies inside the view volume.
    pub visible: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ScreenAnchors {
    anchors: Vec<ScreenAnchor>,
}

impl ScreenAnchors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_anchors(anchors: Vec<ScreenAnchor>) -> Self {
        Self { anchors }
    }

    pub fn get(&self, id: BodyId) -> Option<&ScreenAnchor> {
        match self.anchors.get(id.0) {
            Some(a) if a.id == id => Some(a),
            _ => self.anchors.iter().find(|a| a.id == id),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScreenAnchor> {
        self.anchors.iter()
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn clear(&mut self) {
        self.anchors.clear();
    }

    /// Closest visible anchor to `point` and its distance. Ties keep the
    /// earlier catalog entry.
    pub fn nearest_visible(&self, point: Vec2) -> Option<(ScreenAnchor, f32)> {
        let mut best: Option<(ScreenAnchor, f32)> = None;
        for anchor in self.anchors.iter().filter(|a| a.visible) {
            let d = anchor.pos.distance(point);
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((*anchor, d)),
            }
        }
        best
    }
}

#[inline]
pub fn ndc_to_screen(ndc: Vec3, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        (ndc.x * 0.5 + 0.5) * width,
        (-ndc.y * 0.5 + 0.5) * height,
    )
}

/// Per-axis rotation change; `None` keeps the current angle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationUpdate {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub z: Option<f32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutState {
    pub zoom: f32,
    pub orbit_scale: f32,
    pub planet_scale: f32,
    pub orbit_speed: f32,
    pub rotation_deg: Vec3,
    pub sim_time: f64,
    pub paused: bool,
}

#[derive(Clone, Debug)]
struct BodyPose {
    id: BodyId,
    orbit_radius: f32,
    render_radius: f32,
    base_speed: f32,
    speed_factor: f32,
    phase_offset: f32,
    phase: f32,
}

impl BodyPose {
    #[inline]
    fn local_position(&self, orbit_scale: f32) -> Vec3 {
        let r = self.orbit_radius * orbit_scale;
        let (s, c) = self.phase.sin_cos();
        // orbit pivot spins about +Y with the body on its +X arm
        Vec3::new(r * c, 0.0, -r * s)
    }
}

pub struct SceneLayout {
    config: SceneConfig,
    bodies: Vec<BodyPose>,
    core: Vec<BodyId>,
    state: LayoutState,
    last_real_time: Option<f64>,
    anchor_transform: Mat4,
}

impl SceneLayout {
    pub fn new(catalog: &Catalog, config: SceneConfig) -> Self {
        let n = catalog.len().max(1) as f32;
        let bodies = catalog
            .iter()
            .map(|(id, body)| {
                let phase_offset = id.0 as f32 * TAU / n;
                BodyPose {
                    id,
                    orbit_radius: body.orbit_radius,
                    render_radius: body.render_radius,
                    base_speed: body.base_speed,
                    speed_factor: body.speed_factor,
                    phase_offset,
                    phase: phase_offset,
                }
            })
            .collect::<Vec<_>>();
        let core = config
            .core_bodies
            .iter()
            .filter_map(|key| {
                let id = catalog.index_of(key);
                if id.is_none() {
                    log::warn!("[scene] core body '{}' not in catalog", key);
                }
                id
            })
            .collect();
        let state = LayoutState {
            zoom: config.zoom.initial,
            orbit_scale: config.orbit.initial,
            planet_scale: config.planet.initial,
            orbit_speed: config.speed.initial,
            rotation_deg: config.rotation.initial(),
            sim_time: 0.0,
            paused: false,
        };
        Self {
            config,
            bodies,
            core,
            state,
            last_real_time: None,
            anchor_transform: Mat4::IDENTITY,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    // ---------------- clock ----------------

    /// Advances the simulated clock to `now_seconds` of real time and updates
    /// every body's orbital phase. The first call only samples the clock.
    pub fn advance(&mut self, now_seconds: f64) {
        if let Some(last) = self.last_real_time.replace(now_seconds) {
            if !self.state.paused {
                let dt = (now_seconds - last).max(0.0);
                self.state.sim_time += dt * self.state.orbit_speed as f64;
            }
        }
        let t = self.state.sim_time;
        let k = self.config.base_orbit_speed_scale as f64;
        for body in &mut self.bodies {
            let angle = t * body.base_speed as f64 * body.speed_factor as f64 * k;
            body.phase = (angle % std::f64::consts::TAU) as f32 + body.phase_offset;
        }
    }

    pub fn set_orbit_paused(&mut self, paused: bool) {
        self.state.paused = paused;
    }

    pub fn is_orbit_paused(&self) -> bool {
        self.state.paused
    }

    pub fn sim_time(&self) -> f64 {
        self.state.sim_time
    }

    // ---------------- pose ----------------

    /// Marker pose in world space, as reported by the tracking collaborator.
    pub fn set_anchor_transform(&mut self, transform: Mat4) {
        self.anchor_transform = transform;
    }

    pub fn anchor_transform(&self) -> Mat4 {
        self.anchor_transform
    }

    /// System root relative to the marker: offset, user rotation, zoom.
    pub fn root_matrix(&self) -> Mat4 {
        let r = self.state.rotation_deg;
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            r.x.to_radians(),
            r.y.to_radians(),
            r.z.to_radians(),
        );
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.config.base_system_scale * self.state.zoom),
            rotation,
            self.config.root_offset,
        )
    }

    /// `(id, position in root space, mesh radius)` for every body.
    pub fn body_poses(&self) -> impl Iterator<Item = (BodyId, Vec3, f32)> + '_ {
        let orbit_scale = self.state.orbit_scale;
        let radius_scale = self.config.planet_mesh_scale * self.state.planet_scale;
        self.bodies.iter().map(move |b| {
            (
                b.id,
                b.local_position(orbit_scale),
                b.render_radius * radius_scale,
            )
        })
    }

    /// Sun mesh radius in root space.
    pub fn sun_radius(&self) -> f32 {
        SUN_RADIUS * self.config.sun_scale
    }

    // ---------------- projection ----------------

    pub fn project_to_screen<P: Projection + ?Sized>(
        &self,
        camera: &P,
        viewport_width: f32,
        viewport_height: f32,
    ) -> ScreenAnchors {
        let mut out = ScreenAnchors::new();
        self.project_into(camera, viewport_width, viewport_height, &mut out);
        out
    }

    /// Projects every body into `out`, reusing its storage.
    pub fn project_into<P: Projection + ?Sized>(
        &self,
        camera: &P,
        viewport_width: f32,
        viewport_height: f32,
        out: &mut ScreenAnchors,
    ) {
        out.anchors.clear();
        let view_projection = camera.view_projection();
        let model = self.anchor_transform * self.root_matrix();
        let orbit_scale = self.state.orbit_scale;
        for body in &self.bodies {
            let world = model.transform_point3(body.local_position(orbit_scale));
            let anchor = match project_with(&view_projection, world) {
                Some(ndc) if ndc.is_finite() => ScreenAnchor {
                    id: body.id,
                    pos: ndc_to_screen(ndc, viewport_width, viewport_height),
                    visible: (-1.0..=1.0).contains(&ndc.z),
                },
                _ => ScreenAnchor {
                    id: body.id,
                    pos: Vec2::ZERO,
                    visible: false,
                },
            };
            out.anchors.push(anchor);
        }
    }

    // ---------------- sliders ----------------

    pub fn set_zoom(&mut self, scale: f32) -> f32 {
        self.state.zoom = self.config.zoom.clamp_or(scale, self.state.zoom);
        self.state.zoom
    }

    pub fn zoom(&self) -> f32 {
        self.state.zoom
    }

    pub fn zoom_range(&self) -> SliderRange {
        self.config.zoom
    }

    pub fn set_orbit_scale(&mut self, scale: f32) -> f32 {
        self.state.orbit_scale = self.config.orbit.clamp_or(scale, self.state.orbit_scale);
        self.state.orbit_scale
    }

    pub fn orbit_scale(&self) -> f32 {
        self.state.orbit_scale
    }

    pub fn orbit_scale_range(&self) -> SliderRange {
        self.config.orbit
    }

    pub fn set_planet_scale(&mut self, scale: f32) -> f32 {
        self.state.planet_scale = self.config.planet.clamp_or(scale, self.state.planet_scale);
        self.state.planet_scale
    }

    pub fn planet_scale(&self) -> f32 {
        self.state.planet_scale
    }

    pub fn planet_scale_range(&self) -> SliderRange {
        self.config.planet
    }

    pub fn set_orbit_speed(&mut self, scale: f32) -> f32 {
        self.state.orbit_speed = self.config.speed.clamp_or(scale, self.state.orbit_speed);
        self.state.orbit_speed
    }

    pub fn orbit_speed(&self) -> f32 {
        self.state.orbit_speed
    }

    pub fn orbit_speed_range(&self) -> SliderRange {
        self.config.speed
    }

    /// Applies the given axes, each clamped to its own range, and returns the
    /// full applied rotation in degrees.
    pub fn set_rotation_degrees(&mut self, update: RotationUpdate) -> Vec3 {
        let ranges = self.config.rotation;
        let current = self.state.rotation_deg;
        let axis = |range: SliderRange, value: Option<f32>, current: f32| match value {
            Some(v) => range.clamp_or(v, current),
            None => current,
        };
        self.state.rotation_deg = Vec3::new(
            axis(ranges.x, update.x, current.x),
            axis(ranges.y, update.y, current.y),
            axis(ranges.z, update.z, current.z),
        );
        self.state.rotation_deg
    }

    pub fn rotation_degrees(&self) -> Vec3 {
        self.state.rotation_deg
    }

    pub fn rotation_range(&self) -> RotationRanges {
        self.config.rotation
    }

    /// Zoom at which the core bodies span `core_target_width` of the marker.
    /// Depends only on orbit and planet scales, so repeated calls agree.
    pub fn fit_core_bodies_to_marker(&mut self) -> f32 {
        let orbit_scale = self.state.orbit_scale;
        let radius_scale = self.config.planet_mesh_scale * self.state.planet_scale;
        let extent = self
            .core
            .iter()
            .filter_map(|id| self.bodies.get(id.0))
            .map(|b| b.orbit_radius * orbit_scale + b.render_radius * radius_scale)
            .fold(0.0_f32, f32::max);
        let unit_span = 2.0 * extent * self.config.base_system_scale;
        if unit_span <= f32::EPSILON {
            return self.state.zoom;
        }
        let applied = self.set_zoom(self.config.core_target_width / unit_span);
        log::info!("[scene] fit core bodies -> zoom {:.3}", applied);
        applied
    }
}
