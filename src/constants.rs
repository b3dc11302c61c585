// Default tuning for the viewer. `ViewConfig::default()` is built from these.

use std::f32::consts::PI;

// Clipping
pub const DEFAULT_CLIP_PROPORTION: f32 = 0.6; // plane offset as a fraction of the sphere radius

// Zoom (UI percent <-> camera distance)
pub const ZOOM_BASELINE_PERCENT: i32 = 100;
pub const ZOOM_STEP_PERCENT: i32 = 10;
pub const ZOOM_LOWER_LIMIT: i32 = 50; // baseline - lower is the widest view
pub const ZOOM_UPPER_LIMIT: i32 = 50; // baseline + upper is the closest view
pub const ZOOM_SYNC_TOLERANCE: f32 = 1e-3; // world units; smaller camera echoes are ignored

// Orbit camera
pub const ORBIT_MIN_DISTANCE: f32 = 4.0;
pub const ORBIT_MAX_DISTANCE: f32 = 10.0;
pub const KEY_ROTATE_STEP: f32 = 0.1; // radians per qualifying key-down

// Free orbit ranges when no great circle is grabbed
pub const POLAR_MIN: f32 = 0.0;
pub const POLAR_MAX: f32 = PI;
pub const AZIMUTH_MIN: f32 = -PI / 2.0;
pub const AZIMUTH_MAX: f32 = PI / 2.0;

// Great circle drag: radians for a pointer sweep across the short viewport side
pub const EQUATOR_DRAG_SWING: f32 = 2.0 * PI;
pub const MERIDIAN_DRAG_SWING: f32 = PI;

// Great circle overlay geometry
pub const CIRCLE_RADIUS_FACTOR: f32 = 1.01; // drawn slightly outside the surface
pub const CIRCLE_BASE_ROTATION: f32 = PI / 2.0;
pub const CIRCLE_PICK_WIDTH: f32 = 0.05; // world-space half width used by the native picker

// Camera and layout
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_REFERENCE_DEPTH: f32 = 5.0; // depth at which the sphere is sized to the viewport
pub const SPHERE_MARGIN: f32 = 1.0; // world units kept free around the sphere
