//! Symmetric clipping-plane pair for slicing the sphere.
//!
//! Two parallel planes sit at `±distance` along a split axis, each facing the
//! center. The slab between them is the visible region; each plane cuts the
//! sphere in a circle of radius `sqrt(r² − distance²)`.

use crate::error::GeometryError;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Half-space boundary: points with `normal · p + constant >= 0` are kept.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipPlane {
    pub normal: Vec3,
    pub constant: f32,
}

impl ClipPlane {
    #[inline]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.constant
    }

    pub fn to_uniform(self) -> ClipPlaneUniform {
        ClipPlaneUniform {
            normal_constant: [self.normal.x, self.normal.y, self.normal.z, self.constant],
        }
    }
}

/// GPU layout of a clip plane (`xyz` normal, `w` constant).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ClipPlaneUniform {
    pub normal_constant: [f32; 4],
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClippingPlanePair {
    pub distance: f32,
    pub cut_radius: f32,
    pub enabled: bool,
    pub axis: Vec3,
}

impl Default for ClippingPlanePair {
    fn default() -> Self {
        Self::disabled()
    }
}

impl ClippingPlanePair {
    /// No clipping. Distances are zeroed, not just hidden, since geometry
    /// consumers read them directly.
    pub fn disabled() -> Self {
        Self {
            distance: 0.0,
            cut_radius: 0.0,
            enabled: false,
            axis: Vec3::X,
        }
    }

    /// The ordered pair `[+distance, −distance]`, or nothing when disabled.
    pub fn planes(&self) -> SmallVec<[ClipPlane; 2]> {
        if !self.enabled {
            return SmallVec::new();
        }
        let mut planes = SmallVec::new();
        planes.push(ClipPlane {
            normal: -self.axis,
            constant: self.distance,
        });
        planes.push(ClipPlane {
            normal: self.axis,
            constant: self.distance,
        });
        planes
    }
}

/// Plane pair along the X axis.
pub fn solve(sphere_radius: f32, proportion: f32) -> Result<ClippingPlanePair, GeometryError> {
    solve_along(sphere_radius, proportion, Vec3::X)
}

pub fn solve_along(
    sphere_radius: f32,
    proportion: f32,
    axis: Vec3,
) -> Result<ClippingPlanePair, GeometryError> {
    if !(proportion.is_finite() && proportion > 0.0 && proportion < 1.0) {
        return Err(GeometryError::InvalidProportion(proportion));
    }
    if !(sphere_radius.is_finite() && sphere_radius >= 0.0) {
        return Err(GeometryError::InvalidRadius(sphere_radius));
    }
    let distance = proportion * sphere_radius;
    // Rounding can push the radicand just below zero as the proportion nears 1.
    let cut_radius = (sphere_radius * sphere_radius - distance * distance)
        .max(0.0)
        .sqrt();
    Ok(ClippingPlanePair {
        distance,
        cut_radius,
        enabled: true,
        axis: axis.try_normalize().unwrap_or(Vec3::X),
    })
}

/// Whether `point` lies in the visible (unclipped) region. Every point is
/// visible when clipping is disabled.
pub fn contains(point: Vec3, pair: &ClippingPlanePair) -> bool {
    pair.planes()
        .iter()
        .all(|plane| plane.signed_distance(point) >= 0.0)
}
