use glam::{Mat4, Vec2, Vec3};
use orbit_quiz_core::{
    Camera, Catalog, MatrixCamera, Projection, RotationUpdate, SceneConfig, SceneLayout,
};

fn layout() -> SceneLayout {
    SceneLayout::new(&Catalog::solar_system(), SceneConfig::default())
}

fn front_camera() -> Camera {
    Camera {
        eye: Vec3::new(0.0, 0.0, 2.0),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: 1.0,
        fovy_radians: 60f32.to_radians(),
        znear: 0.01,
        zfar: 100.0,
    }
}

#[test]
fn setters_clamp_and_are_idempotent() {
    let mut scene = layout();
    let inputs = [-100.0, -1.0, 0.0, 0.3, 1.0, 2.7, 4.0, 9.0, 1e6];
    for &v in &inputs {
        let cases: [(fn(&mut SceneLayout, f32) -> f32, _); 4] = [
            (SceneLayout::set_zoom, scene.zoom_range()),
            (SceneLayout::set_orbit_scale, scene.orbit_scale_range()),
            (SceneLayout::set_planet_scale, scene.planet_scale_range()),
            (SceneLayout::set_orbit_speed, scene.orbit_speed_range()),
        ];
        for (set, range) in cases {
            let applied = set(&mut scene, v);
            assert!(applied >= range.min && applied <= range.max);
            assert_eq!(set(&mut scene, applied), applied);
        }
    }
}

#[test]
fn rotation_axes_clamp_independently() {
    let mut scene = layout();
    let applied = scene.set_rotation_degrees(RotationUpdate {
        x: Some(500.0),
        y: None,
        z: Some(-720.0),
    });
    assert_eq!(applied, Vec3::new(180.0, 0.0, -180.0));
    let again = scene.set_rotation_degrees(RotationUpdate {
        x: Some(applied.x),
        y: Some(applied.y),
        z: Some(applied.z),
    });
    assert_eq!(again, applied);
    let only_y = scene.set_rotation_degrees(RotationUpdate {
        y: Some(45.0),
        ..Default::default()
    });
    assert_eq!(only_y, Vec3::new(180.0, 45.0, -180.0));
}

#[test]
fn nan_keeps_current_value() {
    let mut scene = layout();
    let zoom = scene.set_zoom(2.0);
    assert_eq!(scene.set_zoom(f32::NAN), zoom);
}

#[test]
fn ranges_report_defaults() {
    let scene = layout();
    let zoom = scene.zoom_range();
    assert_eq!((zoom.min, zoom.max, zoom.initial), (0.1, 8.0, 1.5));
    let orbit = scene.orbit_scale_range();
    assert_eq!((orbit.min, orbit.max, orbit.initial), (2.0, 5.0, 2.5));
    let planet = scene.planet_scale_range();
    assert_eq!((planet.min, planet.max, planet.initial), (0.5, 3.0, 1.0));
    let speed = scene.orbit_speed_range();
    assert_eq!((speed.min, speed.max, speed.initial), (0.0, 3.0, 0.7));
    assert_eq!(scene.rotation_degrees(), Vec3::new(-5.0, 0.0, 0.0));
    assert_eq!(scene.zoom(), 1.5);
}

#[test]
fn fit_to_marker_is_idempotent() {
    let mut scene = layout();
    let first = scene.fit_core_bodies_to_marker();
    let second = scene.fit_core_bodies_to_marker();
    assert_eq!(first, second);
    let range = scene.zoom_range();
    assert!(first >= range.min && first <= range.max);
    assert_eq!(scene.zoom(), first);
}

#[test]
fn fit_to_marker_ignores_current_zoom() {
    let mut a = layout();
    let mut b = layout();
    b.set_zoom(6.0);
    assert_eq!(a.fit_core_bodies_to_marker(), b.fit_core_bodies_to_marker());
}

#[test]
fn fit_to_marker_shrinks_with_wider_orbits() {
    let mut scene = layout();
    scene.set_orbit_scale(2.0);
    let near = scene.fit_core_bodies_to_marker();
    scene.set_orbit_scale(5.0);
    let far = scene.fit_core_bodies_to_marker();
    assert!(far < near);
}

#[test]
fn paused_clock_does_not_advance() {
    let mut scene = layout();
    scene.advance(10.0);
    assert_eq!(scene.sim_time(), 0.0);
    scene.advance(11.0);
    let t1 = scene.sim_time();
    assert!((t1 - 0.7).abs() < 1e-6);

    scene.set_orbit_paused(true);
    scene.advance(15.0);
    assert_eq!(scene.sim_time(), t1);

    scene.set_orbit_paused(false);
    scene.advance(16.0);
    assert!((scene.sim_time() - (t1 + 0.7)).abs() < 1e-6);
}

#[test]
fn zero_speed_freezes_orbits() {
    let mut scene = layout();
    scene.set_orbit_speed(0.0);
    scene.advance(0.0);
    let before: Vec<Vec3> = scene.body_poses().map(|(_, p, _)| p).collect();
    scene.advance(30.0);
    let after: Vec<Vec3> = scene.body_poses().map(|(_, p, _)| p).collect();
    assert_eq!(before, after);
}

#[test]
fn bodies_start_at_distinct_phases() {
    let mut scene = layout();
    scene.advance(0.0);
    let poses: Vec<Vec3> = scene.body_poses().map(|(_, p, _)| p.normalize()).collect();
    for i in 0..poses.len() {
        for j in (i + 1)..poses.len() {
            assert!(poses[i].distance(poses[j]) > 1e-3);
        }
    }
}

#[test]
fn projection_maps_origin_to_viewport_centre() {
    let camera = front_camera();
    let ndc = camera.project_ndc(Vec3::ZERO).unwrap();
    let screen = orbit_quiz_core::ndc_to_screen(ndc, 800.0, 600.0);
    assert!((screen - Vec2::new(400.0, 300.0)).length() < 1e-3);
}

#[test]
fn projection_reports_every_body_in_front_as_visible() {
    let mut scene = layout();
    scene.advance(0.0);
    let anchors = scene.project_to_screen(&front_camera(), 800.0, 600.0);
    assert_eq!(anchors.len(), 9);
    for anchor in anchors.iter() {
        assert!(anchor.visible, "{:?}", anchor);
        assert!(anchor.pos.x.is_finite() && anchor.pos.y.is_finite());
    }
}

#[test]
fn bodies_behind_the_camera_are_not_visible() {
    let mut scene = layout();
    scene.advance(0.0);
    let camera = MatrixCamera {
        view: Mat4::look_at_rh(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, 10.0), Vec3::Y),
        projection: Mat4::perspective_rh_gl(1.0, 1.0, 0.1, 50.0),
    };
    let anchors = scene.project_to_screen(&camera, 800.0, 600.0);
    assert!(anchors.iter().all(|a| !a.visible));
    assert!(anchors.nearest_visible(Vec2::new(400.0, 300.0)).is_none());
}

#[test]
fn anchor_transform_moves_projected_points() {
    let mut scene = layout();
    scene.advance(0.0);
    let camera = front_camera();
    let centred = scene.project_to_screen(&camera, 800.0, 600.0);
    scene.set_anchor_transform(Mat4::from_translation(Vec3::new(0.3, 0.0, 0.0)));
    let shifted = scene.project_to_screen(&camera, 800.0, 600.0);
    for (a, b) in centred.iter().zip(shifted.iter()) {
        assert!(b.pos.x > a.pos.x);
    }
}

#[test]
fn sun_radius_follows_the_configured_scale() {
    let catalog = Catalog::solar_system();
    let config = SceneConfig {
        sun_scale: 2.0,
        ..SceneConfig::default()
    };
    let doubled = SceneLayout::new(&catalog, config);
    assert!((doubled.sun_radius() - 2.0 * orbit_quiz_core::constants::SUN_RADIUS).abs() < 1e-6);
    assert!(layout().sun_radius() < doubled.sun_radius());
}
