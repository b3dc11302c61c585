// Host-side tests for orbit bounds and zoom/distance reconciliation.

use cranium::{OrbitBounds, OrbitCamera, OrbitConfig, ZoomConfig, ZoomState};
use std::f32::consts::{FRAC_PI_2, PI};

fn zoom() -> ZoomState {
    ZoomState::new(&ZoomConfig::default(), &OrbitConfig::default())
}

#[test]
fn bounds_follow_selection() {
    let free = OrbitBounds::derive(false, false);
    assert_eq!((free.min_polar, free.max_polar), (0.0, PI));
    assert_eq!((free.min_azimuth, free.max_azimuth), (-FRAC_PI_2, FRAC_PI_2));

    let eq = OrbitBounds::derive(true, false);
    assert_eq!((eq.min_polar, eq.max_polar), (FRAC_PI_2, FRAC_PI_2));
    assert_eq!((eq.min_azimuth, eq.max_azimuth), (-FRAC_PI_2, FRAC_PI_2));

    let mer = OrbitBounds::derive(false, true);
    assert_eq!((mer.min_polar, mer.max_polar), (0.0, PI));
    assert_eq!((mer.min_azimuth, mer.max_azimuth), (0.0, 0.0));

    assert_eq!(OrbitBounds::default(), free);
}

#[test]
fn rotation_respects_bounds() {
    let free = OrbitBounds::default();
    let mut cam = OrbitCamera::new(7.0);
    for _ in 0..40 {
        cam.rotate_azimuth(0.1, &free);
    }
    assert_eq!(cam.azimuth, FRAC_PI_2);
    let pinned = OrbitBounds::derive(true, false);
    cam.rotate_polar(0.3, &pinned);
    assert_eq!(cam.polar, FRAC_PI_2);
}

#[test]
fn clamp_pulls_camera_into_range() {
    let mut cam = OrbitCamera {
        azimuth: 1.0,
        polar: 0.2,
        distance: 20.0,
    };
    assert!(cam.clamp_to(&OrbitBounds::derive(true, true), &OrbitConfig::default()));
    assert_eq!(cam.azimuth, 0.0);
    assert_eq!(cam.polar, FRAC_PI_2);
    assert_eq!(cam.distance, 10.0);
    assert!(!cam.clamp_to(&OrbitBounds::derive(true, true), &OrbitConfig::default()));
}

#[test]
fn eye_sits_on_orbit_sphere() {
    let cam = OrbitCamera::new(7.0);
    let eye = cam.eye();
    assert!((eye.length() - 7.0).abs() < 1e-5);
    assert!(eye.z > 6.99, "eye={eye}");
}

#[test]
fn percent_and_distance_map_linearly() {
    let z = zoom();
    assert_eq!(z.percent(), 100);
    assert!((z.distance() - 7.0).abs() < 1e-5);
    assert!((z.distance_for_percent(50.0) - 10.0).abs() < 1e-5);
    assert!((z.distance_for_percent(150.0) - 4.0).abs() < 1e-5);
    assert!((z.percent_for_distance(5.5) - 125.0).abs() < 1e-3);
}

#[test]
fn zoom_in_stops_at_upper_limit() {
    let mut z = zoom();
    for _ in 0..5 {
        assert!(z.zoom_in());
    }
    assert_eq!(z.percent(), 150);
    assert!(!z.zoom_in());
    assert_eq!(z.percent(), 150);
    assert!((z.distance() - 4.0).abs() < 1e-5);
}

#[test]
fn zoom_out_stops_at_lower_limit() {
    let mut z = zoom();
    for _ in 0..5 {
        assert!(z.zoom_out());
    }
    assert_eq!(z.percent(), 50);
    assert!(!z.zoom_out());
}

#[test]
fn off_grid_percent_snaps_to_next_step() {
    let mut z = zoom();
    // 7 - 0.36 = 6.64 -> 106%
    assert_eq!(z.sync_from_distance(6.64), Some(106));
    assert!(z.zoom_in());
    assert_eq!(z.percent(), 110);
    z.sync_from_distance(z.distance_for_percent(106.0));
    assert!(z.zoom_out());
    assert_eq!(z.percent(), 100);
}

#[test]
fn sync_ignores_echoes_and_jitter() {
    let mut z = zoom();
    assert_eq!(z.sync_from_distance(7.0), None);
    assert_eq!(z.sync_from_distance(7.0005), None);
    assert_eq!(z.sync_from_distance(f32::NAN), None);
    assert_eq!(z.percent(), 100);
}

#[test]
fn sync_clamps_out_of_range_distances() {
    let mut z = zoom();
    assert_eq!(z.sync_from_distance(40.0), Some(50));
    assert_eq!(z.sync_from_distance(1.0), Some(150));
}

#[test]
fn reset_returns_to_baseline() {
    let mut z = zoom();
    z.zoom_in();
    assert!(z.reset());
    assert_eq!(z.percent(), 100);
}

#[test]
fn steps_are_relative_to_an_unaligned_baseline() {
    let config = ZoomConfig {
        baseline: 105,
        ..ZoomConfig::default()
    };
    let mut z = ZoomState::new(&config, &OrbitConfig::default());
    let mut seen = Vec::new();
    for _ in 0..6 {
        z.zoom_in();
        seen.push(z.percent());
    }
    assert_eq!(seen, vec![115, 125, 135, 145, 155, 155]);
    for _ in 0..10 {
        z.zoom_out();
    }
    assert_eq!(z.percent(), 55);
}

#[test]
fn unaligned_percent_steps_back_onto_the_baseline_grid() {
    let config = ZoomConfig {
        baseline: 105,
        ..ZoomConfig::default()
    };
    let mut z = ZoomState::new(&config, &OrbitConfig::default());
    // 108% after a camera-driven change.
    assert_eq!(z.sync_from_distance(z.distance_for_percent(108.0)), Some(108));
    assert!(z.zoom_out());
    assert_eq!(z.percent(), 105);
    z.sync_from_distance(z.distance_for_percent(108.0));
    assert!(z.zoom_in());
    assert_eq!(z.percent(), 115);
}
