// Host-side tests for the clipping-plane solver and visibility predicate.

use cranium::{contains, solve, ClippingPlanePair, GeometryError};
use glam::Vec3;

#[test]
fn solves_three_four_five() {
    let pair = solve(10.0, 0.6).unwrap();
    assert!(pair.enabled);
    assert!((pair.distance - 6.0).abs() < 1e-5, "distance={}", pair.distance);
    assert!((pair.cut_radius - 8.0).abs() < 1e-5, "cut={}", pair.cut_radius);
}

#[test]
fn slab_between_planes_is_visible() {
    let pair = solve(10.0, 0.6).unwrap();
    assert!(contains(Vec3::new(3.0, 0.0, 0.0), &pair));
    assert!(contains(Vec3::new(-6.0, 5.0, 5.0), &pair));
    assert!(!contains(Vec3::new(9.0, 0.0, 0.0), &pair));
    assert!(!contains(Vec3::new(-9.0, 0.0, 0.0), &pair));
}

#[test]
fn disabled_pair_hides_nothing() {
    let pair = ClippingPlanePair::disabled();
    assert!(pair.planes().is_empty());
    assert_eq!(pair.distance, 0.0);
    assert_eq!(pair.cut_radius, 0.0);
    assert!(contains(Vec3::new(100.0, 0.0, 0.0), &pair));
}

#[test]
fn rejects_out_of_range_proportions() {
    for p in [0.0, 1.0, -0.2, 1.5, f32::NAN] {
        match solve(10.0, p) {
            Err(GeometryError::InvalidProportion(_)) => {}
            other => panic!("proportion {p} gave {other:?}"),
        }
    }
    assert_eq!(solve(-1.0, 0.5), Err(GeometryError::InvalidRadius(-1.0)));
}

#[test]
fn cut_circle_lies_on_the_sphere() {
    for r in [0.5_f32, 1.0, 2.836, 10.0, 250.0] {
        for i in 1..20 {
            let p = i as f32 / 20.0;
            let pair = solve(r, p).unwrap();
            assert!(pair.distance < r);
            let on_sphere = pair.distance.powi(2) + pair.cut_radius.powi(2);
            assert!((on_sphere - r * r).abs() <= 1e-3 * r * r, "r={r} p={p}");
        }
    }
}

#[test]
fn zero_radius_collapses() {
    let pair = solve(0.0, 0.6).unwrap();
    assert_eq!(pair.distance, 0.0);
    assert_eq!(pair.cut_radius, 0.0);
}

#[test]
fn planes_face_the_center() {
    let pair = solve(10.0, 0.6).unwrap();
    let planes = pair.planes();
    assert_eq!(planes.len(), 2);
    assert_eq!(planes[0].normal, -Vec3::X);
    assert_eq!(planes[1].normal, Vec3::X);
    for plane in &planes {
        assert!(plane.signed_distance(Vec3::ZERO) > 0.0);
    }
    let uniform = planes[1].to_uniform();
    assert_eq!(uniform.normal_constant, [1.0, 0.0, 0.0, 6.0]);
    assert_eq!(bytemuck::bytes_of(&uniform).len(), 16);
}
