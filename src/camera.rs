//! Perspective camera description used for picking and for sizing the
//! sphere to the viewport.

use crate::orbit::OrbitCamera;
use crate::viewport::Viewport;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera looking at the origin from the orbit position.
    pub fn from_orbit(orbit: &OrbitCamera, viewport: &Viewport, fov_degrees: f32) -> Self {
        // At the poles the eye is parallel to +Y and look_at degenerates.
        let up = if orbit.polar.sin().abs() < 1e-4 {
            Vec3::NEG_Z
        } else {
            Vec3::Y
        };
        Self {
            eye: orbit.eye(),
            target: Vec3::ZERO,
            up,
            aspect: viewport.aspect(),
            fovy_radians: fov_degrees.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}
