//! Reference raycaster for front-ends that have no scene graph of their own.
//!
//! Produces the nearest-first hit list the controller consumes. Clipping is
//! deliberately ignored here: the controller filters sphere hits with
//! `clipping::contains`, exactly as it does for renderer-supplied hits.

use crate::camera::Camera;
use crate::constants::{CIRCLE_PICK_WIDTH, CIRCLE_RADIUS_FACTOR};
use crate::great_circle::CircleKind;
use crate::scene::{Hit, SceneObject};
use crate::viewport::Viewport;
use glam::{Quat, Vec3, Vec4};
use smallvec::SmallVec;
use std::f32::consts::TAU;

const CIRCLE_SEGMENTS: usize = 150;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Compute a world-space ray from pixel coordinates.
pub fn screen_to_world_ray(camera: &Camera, viewport: &Viewport, sx: f32, sy: f32) -> Ray {
    let width = viewport.width.max(1.0);
    let height = viewport.height.max(1.0);
    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);
    let inv = (camera.projection_matrix() * camera.view_matrix()).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    Ray {
        origin: camera.eye,
        dir: (p1 - camera.eye).normalize(),
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Distance along the ray to the closest approach with segment `a..b`, when
/// that approach is within `half_width`.
fn ray_segment(ray: &Ray, a: Vec3, b: Vec3, half_width: f32) -> Option<f32> {
    let e = b - a;
    let w0 = ray.origin - a;
    let dd = ray.dir.dot(ray.dir);
    let de = ray.dir.dot(e);
    let ee = e.dot(e);
    let dw = ray.dir.dot(w0);
    let ew = e.dot(w0);
    let denom = dd * ee - de * de;
    let u = if denom.abs() < 1e-9 || ee < 1e-12 {
        0.0
    } else {
        ((dd * ew - de * dw) / denom).clamp(0.0, 1.0)
    };
    let s = ((u * de - dw) / dd).max(0.0);
    let gap = (ray.at(s) - (a + e * u)).length();
    (gap <= half_width).then_some(s)
}

/// Nearest approach of the ray to a great circle drawn as a polyline.
pub fn ray_circle(ray: &Ray, kind: CircleKind, rotation: f32, radius: f32, half_width: f32) -> Option<f32> {
    let q = Quat::from_axis_angle(kind.rotation_axis(), rotation);
    let point = |i: usize| {
        let a = i as f32 / CIRCLE_SEGMENTS as f32 * TAU;
        q * Vec3::new(a.cos() * radius, a.sin() * radius, 0.0)
    };
    let mut best: Option<f32> = None;
    for i in 0..CIRCLE_SEGMENTS {
        if let Some(t) = ray_segment(ray, point(i), point(i + 1), half_width) {
            match best {
                Some(bt) if t >= bt => {}
                _ => best = Some(t),
            }
        }
    }
    best
}

/// What the reference picker tests against.
#[derive(Clone, Debug)]
pub struct PickScene {
    pub sphere_radius: f32,
    pub circles: [(CircleKind, f32); 2],
}

impl PickScene {
    pub fn pick(&self, ray: &Ray) -> SmallVec<[Hit; 4]> {
        let mut hits: SmallVec<[Hit; 4]> = SmallVec::new();
        if self.sphere_radius <= 0.0 {
            return hits;
        }
        if let Some(t) = ray_sphere(ray.origin, ray.dir, Vec3::ZERO, self.sphere_radius) {
            hits.push(Hit {
                object: SceneObject::Sphere,
                point: ray.at(t),
                distance: t,
            });
        }
        let circle_radius = self.sphere_radius * CIRCLE_RADIUS_FACTOR;
        for (kind, rotation) in self.circles {
            if let Some(t) = ray_circle(ray, kind, rotation, circle_radius, CIRCLE_PICK_WIDTH) {
                hits.push(Hit {
                    object: SceneObject::circle(kind),
                    point: ray.at(t),
                    distance: t,
                });
            }
        }
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}
