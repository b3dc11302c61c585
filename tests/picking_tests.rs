// Host-side tests for ray construction and the reference picker.

use cranium::camera::Camera;
use cranium::picking::{ray_sphere, screen_to_world_ray, PickScene};
use cranium::scene::nearest;
use cranium::{CircleKind, OrbitCamera, SceneObject, Viewport};
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

const RADIUS: f32 = 2.836;

fn setup() -> (Camera, Viewport, PickScene) {
    let vp = Viewport::new(800.0, 600.0);
    let cam = Camera::from_orbit(&OrbitCamera::new(7.0), &vp, 75.0);
    let scene = PickScene {
        sphere_radius: RADIUS,
        circles: [(CircleKind::Equator, FRAC_PI_2), (CircleKind::Meridian, FRAC_PI_2)],
    };
    (cam, vp, scene)
}

#[test]
fn ray_sphere_intersection_basic() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!(matches!(t, Some(t) if (t - 3.0).abs() < 1e-5));
}

#[test]
fn ray_sphere_intersection_miss() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn ray_sphere_behind_origin() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn center_pixel_looks_at_origin() {
    let (cam, vp, _) = setup();
    let ray = screen_to_world_ray(&cam, &vp, 400.0, 300.0);
    assert!((ray.origin - Vec3::new(0.0, 0.0, 7.0)).length() < 1e-4);
    assert!(ray.dir.z < -0.999, "dir={}", ray.dir);
}

#[test]
fn circles_occlude_the_sphere_front() {
    let (cam, vp, scene) = setup();
    let ray = screen_to_world_ray(&cam, &vp, 400.0, 300.0);
    let hits = scene.pick(&ray);
    assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));
    let sphere = hits
        .iter()
        .find(|h| h.object == SceneObject::Sphere)
        .expect("sphere hit");
    assert!((sphere.distance - (7.0 - RADIUS)).abs() < 1e-3);
    assert_ne!(nearest(&hits), Some(SceneObject::Sphere));
}

#[test]
fn vertical_offset_finds_meridian() {
    let (cam, vp, scene) = setup();
    let hits = scene.pick(&screen_to_world_ray(&cam, &vp, 400.0, 250.0));
    assert_eq!(nearest(&hits), Some(SceneObject::Meridian));
    assert!(hits.iter().all(|h| h.object != SceneObject::Equator));
}

#[test]
fn horizontal_offset_finds_equator() {
    let (cam, vp, scene) = setup();
    let hits = scene.pick(&screen_to_world_ray(&cam, &vp, 500.0, 300.0));
    assert_eq!(nearest(&hits), Some(SceneObject::Equator));
}

#[test]
fn corner_misses_everything() {
    let (cam, vp, scene) = setup();
    assert!(scene.pick(&screen_to_world_ray(&cam, &vp, 5.0, 5.0)).is_empty());
}

#[test]
fn pole_camera_is_well_defined() {
    let vp = Viewport::new(400.0, 400.0);
    let orbit = OrbitCamera {
        azimuth: 0.0,
        polar: 0.0,
        distance: 7.0,
    };
    let cam = Camera::from_orbit(&orbit, &vp, 75.0);
    let ray = screen_to_world_ray(&cam, &vp, 200.0, 200.0);
    assert!(ray.dir.is_finite());
    assert!(ray.dir.y < -0.999, "dir={}", ray.dir);
}
