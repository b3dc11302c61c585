use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::great_circle::CircleKind;

/// Interactive objects the renderer can report under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneObject {
    Sphere,
    Equator,
    Meridian,
    /// Anything else in the scene; it still occludes what lies behind it.
    Other,
}

impl SceneObject {
    pub fn circle(kind: CircleKind) -> Self {
        match kind {
            CircleKind::Equator => SceneObject::Equator,
            CircleKind::Meridian => SceneObject::Meridian,
        }
    }
}

/// One ray intersection. Hit lists are ordered nearest first.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub object: SceneObject,
    pub point: Vec3,
    pub distance: f32,
}

/// The object intercepting the ray, if any.
#[inline]
pub fn nearest(hits: &[Hit]) -> Option<SceneObject> {
    hits.first().map(|h| h.object)
}
