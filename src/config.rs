//! Configuration surface of the viewer.
//!
//! Every knob has a default from `constants.rs`. The web host may pass a
//! partial object; missing fields fall back to their defaults.

use crate::constants::*;
use crate::error::{ConfigError, GeometryError};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub baseline: i32,
    pub step: i32,
    pub lower_limit: i32,
    pub upper_limit: i32,
    pub sync_tolerance: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            baseline: ZOOM_BASELINE_PERCENT,
            step: ZOOM_STEP_PERCENT,
            lower_limit: ZOOM_LOWER_LIMIT,
            upper_limit: ZOOM_UPPER_LIMIT,
            sync_tolerance: ZOOM_SYNC_TOLERANCE,
        }
    }
}

impl ZoomConfig {
    pub fn min_percent(&self) -> i32 {
        self.baseline - self.lower_limit
    }

    pub fn max_percent(&self) -> i32 {
        self.baseline + self.upper_limit
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub min_distance: f32,
    pub max_distance: f32,
    pub key_rotate_step: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            key_rotate_step: KEY_ROTATE_STEP,
        }
    }
}

/// Radians of circle rotation for a pointer sweep across the short side of
/// the viewport.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    pub enabled: bool,
    pub equator_swing: f32,
    pub meridian_swing: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            equator_swing: EQUATOR_DRAG_SWING,
            meridian_swing: MERIDIAN_DRAG_SWING,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub clip_proportion: f32,
    /// When false clipping is always on and the toggle binding is not installed.
    pub clipping_toggle: bool,
    pub clipping_initially_enabled: bool,
    pub zoom: ZoomConfig,
    pub orbit: OrbitConfig,
    pub drag: DragConfig,
    pub camera_fov_degrees: f32,
    pub reference_depth: f32,
    pub sphere_margin: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            clip_proportion: DEFAULT_CLIP_PROPORTION,
            clipping_toggle: true,
            clipping_initially_enabled: false,
            zoom: ZoomConfig::default(),
            orbit: OrbitConfig::default(),
            drag: DragConfig::default(),
            camera_fov_degrees: CAMERA_FOV_DEGREES,
            reference_depth: CAMERA_REFERENCE_DEPTH,
            sphere_margin: SPHERE_MARGIN,
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let k = self.clip_proportion;
        if !(k.is_finite() && k > 0.0 && k < 1.0) {
            return Err(GeometryError::InvalidProportion(k).into());
        }
        if self.zoom.step <= 0 {
            return Err(ConfigError::ZoomStep(self.zoom.step));
        }
        let (lower, upper) = (self.zoom.lower_limit, self.zoom.upper_limit);
        if lower < 0 || upper < 0 || lower + upper == 0 {
            return Err(ConfigError::ZoomRange { lower, upper });
        }
        let (min, max) = (self.orbit.min_distance, self.orbit.max_distance);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min < max) {
            return Err(ConfigError::DistanceRange { min, max });
        }
        positive("camera_fov_degrees", self.camera_fov_degrees)?;
        positive("reference_depth", self.reference_depth)?;
        positive("orbit.key_rotate_step", self.orbit.key_rotate_step)?;
        positive("drag.equator_swing", self.drag.equator_swing)?;
        positive("drag.meridian_swing", self.drag.meridian_swing)?;
        if !(self.sphere_margin.is_finite() && self.sphere_margin >= 0.0) {
            return Err(ConfigError::NonPositive {
                name: "sphere_margin",
                value: self.sphere_margin,
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
