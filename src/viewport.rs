use serde::{Deserialize, Serialize};

/// Drawing surface size in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    /// Shorter side; drag rotation is normalized by it.
    #[inline]
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }
}

/// World-space height visible at `depth` in front of a perspective camera.
#[inline]
pub fn visible_height_at_depth(fovy_radians: f32, depth: f32) -> f32 {
    2.0 * (fovy_radians / 2.0).tan() * depth.abs()
}

#[inline]
pub fn visible_width_at_depth(fovy_radians: f32, aspect: f32, depth: f32) -> f32 {
    visible_height_at_depth(fovy_radians, depth) * aspect
}

/// Largest sphere radius that fits the visible extent at `depth`, leaving
/// `margin` world units free on the tighter side. Zero when nothing fits.
pub fn fitted_sphere_radius(viewport: &Viewport, fovy_radians: f32, depth: f32, margin: f32) -> f32 {
    if viewport.is_empty() {
        return 0.0;
    }
    let h = visible_height_at_depth(fovy_radians, depth);
    let w = visible_width_at_depth(fovy_radians, viewport.aspect(), depth);
    (h / 2.0 - margin).min(w / 2.0 - margin).max(0.0)
}
