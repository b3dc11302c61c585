//! Orbit constraints and zoom reconciliation.
//!
//! Grabbing the equator pins the camera to the equatorial plane (azimuth
//! only); grabbing the meridian pins the azimuth (polar only). The bounds
//! are a pure function of the two selection flags and are re-derived after
//! every selection change.

use crate::config::{OrbitConfig, ZoomConfig};
use crate::constants::{AZIMUTH_MAX, AZIMUTH_MIN, POLAR_MAX, POLAR_MIN};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitBounds {
    pub min_polar: f32,
    pub max_polar: f32,
    pub min_azimuth: f32,
    pub max_azimuth: f32,
}

impl Default for OrbitBounds {
    fn default() -> Self {
        Self::derive(false, false)
    }
}

impl OrbitBounds {
    pub fn derive(equator_selected: bool, meridian_selected: bool) -> Self {
        let (min_polar, max_polar) = if equator_selected {
            (FRAC_PI_2, FRAC_PI_2)
        } else {
            (POLAR_MIN, POLAR_MAX)
        };
        let (min_azimuth, max_azimuth) = if meridian_selected {
            (0.0, 0.0)
        } else {
            (AZIMUTH_MIN, AZIMUTH_MAX)
        };
        Self {
            min_polar,
            max_polar,
            min_azimuth,
            max_azimuth,
        }
    }

    #[inline]
    pub fn clamp_polar(&self, polar: f32) -> f32 {
        polar.clamp(self.min_polar, self.max_polar)
    }

    #[inline]
    pub fn clamp_azimuth(&self, azimuth: f32) -> f32 {
        azimuth.clamp(self.min_azimuth, self.max_azimuth)
    }
}

/// Camera target the core asks the camera-control collaborator to move to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitCamera {
    pub azimuth: f32,
    pub polar: f32,
    pub distance: f32,
}

impl OrbitCamera {
    pub fn new(distance: f32) -> Self {
        Self {
            azimuth: 0.0,
            polar: FRAC_PI_2,
            distance,
        }
    }

    /// Pull the angles into `bounds` and the distance into the configured
    /// range. Returns whether anything moved.
    pub fn clamp_to(&mut self, bounds: &OrbitBounds, orbit: &OrbitConfig) -> bool {
        let before = *self;
        self.polar = bounds.clamp_polar(self.polar);
        self.azimuth = bounds.clamp_azimuth(self.azimuth);
        self.distance = self.distance.clamp(orbit.min_distance, orbit.max_distance);
        *self != before
    }

    pub fn rotate_azimuth(&mut self, delta: f32, bounds: &OrbitBounds) {
        self.azimuth = bounds.clamp_azimuth(self.azimuth + delta);
    }

    pub fn rotate_polar(&mut self, delta: f32, bounds: &OrbitBounds) {
        self.polar = bounds.clamp_polar(self.polar + delta);
    }

    /// Eye position on the orbit sphere around the origin (Y up, polar
    /// measured from +Y, azimuth around Y from +Z).
    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        Vec3::new(sp * sa, cp, sp * ca) * self.distance
    }
}

/// UI zoom percent kept in step with the camera distance.
///
/// Higher percent means a closer camera. Button zoom moves in whole steps;
/// camera-driven changes may land anywhere in range.
#[derive(Clone, Debug)]
pub struct ZoomState {
    percent: i32,
    zoom: ZoomConfig,
    min_distance: f32,
    max_distance: f32,
}

impl ZoomState {
    pub fn new(zoom: &ZoomConfig, orbit: &OrbitConfig) -> Self {
        Self {
            percent: zoom.baseline,
            zoom: zoom.clone(),
            min_distance: orbit.min_distance,
            max_distance: orbit.max_distance,
        }
    }

    pub fn percent(&self) -> i32 {
        self.percent
    }

    pub fn distance(&self) -> f32 {
        self.distance_for_percent(self.percent as f32)
    }

    pub fn distance_for_percent(&self, percent: f32) -> f32 {
        let (lo, hi) = (self.zoom.min_percent() as f32, self.zoom.max_percent() as f32);
        let t = (percent - lo) / (hi - lo);
        self.max_distance + (self.min_distance - self.max_distance) * t
    }

    pub fn percent_for_distance(&self, distance: f32) -> f32 {
        let (lo, hi) = (self.zoom.min_percent() as f32, self.zoom.max_percent() as f32);
        let t = (self.max_distance - distance) / (self.max_distance - self.min_distance);
        lo + (hi - lo) * t
    }

    /// Step to the next `baseline + n·step` above the current percent.
    /// Returns whether it moved.
    pub fn zoom_in(&mut self) -> bool {
        let (base, step) = (self.zoom.baseline, self.zoom.step);
        let next = base + ((self.percent - base).div_euclid(step) + 1) * step;
        self.set_percent(next)
    }

    pub fn zoom_out(&mut self) -> bool {
        let (base, step) = (self.zoom.baseline, self.zoom.step);
        let offset = self.percent - base;
        let prev = if offset.rem_euclid(step) == 0 {
            self.percent - step
        } else {
            base + offset.div_euclid(step) * step
        };
        self.set_percent(prev)
    }

    pub fn reset(&mut self) -> bool {
        self.set_percent(self.zoom.baseline)
    }

    fn set_percent(&mut self, percent: i32) -> bool {
        let clamped = percent.clamp(self.zoom.min_percent(), self.zoom.max_percent());
        let changed = clamped != self.percent;
        self.percent = clamped;
        if changed {
            log::debug!("[zoom] percent={}", self.percent);
        }
        changed
    }

    /// Follow a camera-driven distance change. Echoes of our own writes and
    /// float jitter within the tolerance are ignored; otherwise the new
    /// percent is returned.
    pub fn sync_from_distance(&mut self, distance: f32) -> Option<i32> {
        if !distance.is_finite() {
            return None;
        }
        let distance = distance.clamp(self.min_distance, self.max_distance);
        if (distance - self.distance()).abs() <= self.zoom.sync_tolerance {
            return None;
        }
        let percent = self.percent_for_distance(distance).round() as i32;
        self.set_percent(percent).then_some(self.percent)
    }
}
