//! Equator and meridian overlays and their grab/drag state.
//!
//! A circle is grabbed only when it is the nearest object under the pointer
//! at press time; the sphere occludes the far half of each circle, so at most
//! one circle can be grabbed at once. Release is capture-style: any
//! pointer-up ends the grab, wherever it happens.

use crate::constants::CIRCLE_BASE_ROTATION;
use crate::scene::{nearest, Hit, SceneObject};
use crate::viewport::Viewport;
use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CircleKind {
    Equator,
    Meridian,
}

/// Pointer movement component that drives a circle's rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragAxis {
    Horizontal,
    Vertical,
}

struct AxisMapping {
    drag: DragAxis,
    rotation_axis: Vec3,
}

const EQUATOR_AXES: AxisMapping = AxisMapping {
    drag: DragAxis::Horizontal,
    rotation_axis: Vec3::X,
};

const MERIDIAN_AXES: AxisMapping = AxisMapping {
    drag: DragAxis::Vertical,
    rotation_axis: Vec3::Y,
};

impl CircleKind {
    pub const ALL: [CircleKind; 2] = [CircleKind::Equator, CircleKind::Meridian];

    fn axes(self) -> &'static AxisMapping {
        match self {
            CircleKind::Equator => &EQUATOR_AXES,
            CircleKind::Meridian => &MERIDIAN_AXES,
        }
    }

    #[inline]
    pub fn drag_axis(self) -> DragAxis {
        self.axes().drag
    }

    #[inline]
    pub fn rotation_axis(self) -> Vec3 {
        self.axes().rotation_axis
    }

    /// Normal of the circle's plane. The unrotated circle lies in the XY plane.
    pub fn plane_normal(self, rotation: f32) -> Vec3 {
        Quat::from_axis_angle(self.rotation_axis(), rotation) * Vec3::Z
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorPhase {
    Idle,
    Grabbed,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GreatCircleState {
    pub rotation: f32,
    pub selected: bool,
    pub grab_origin: Option<Vec2>,
}

impl Default for GreatCircleState {
    fn default() -> Self {
        Self {
            rotation: CIRCLE_BASE_ROTATION,
            selected: false,
            grab_origin: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GreatCircleSelector {
    kind: CircleKind,
    state: GreatCircleState,
    hovered: bool,
    drag_enabled: bool,
    swing: f32,
}

impl GreatCircleSelector {
    /// `swing` is the rotation in radians for a pointer sweep across the
    /// short side of the viewport.
    pub fn new(kind: CircleKind, drag_enabled: bool, swing: f32) -> Self {
        Self {
            kind,
            state: GreatCircleState::default(),
            hovered: false,
            drag_enabled,
            swing,
        }
    }

    pub fn kind(&self) -> CircleKind {
        self.kind
    }

    pub fn state(&self) -> &GreatCircleState {
        &self.state
    }

    pub fn is_selected(&self) -> bool {
        self.state.selected
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn rotation(&self) -> f32 {
        self.state.rotation
    }

    pub fn phase(&self) -> SelectorPhase {
        if self.state.selected {
            SelectorPhase::Grabbed
        } else {
            SelectorPhase::Idle
        }
    }

    fn is_nearest(&self, hits: &[Hit]) -> bool {
        nearest(hits) == Some(SceneObject::circle(self.kind))
    }

    /// Grab if this circle is the nearest hit. Returns whether it grabbed.
    pub fn pointer_down(&mut self, pos: Vec2, hits: &[Hit]) -> bool {
        if self.state.selected || !self.is_nearest(hits) {
            return false;
        }
        self.state.selected = true;
        self.state.grab_origin = Some(pos);
        log::info!("[circle] grabbed {:?}", self.kind);
        true
    }

    /// Apply live drag rotation. Returns the rotation delta, if any.
    pub fn pointer_move(&mut self, pos: Vec2, viewport: &Viewport) -> Option<f32> {
        if !(self.state.selected && self.drag_enabled) {
            return None;
        }
        let origin = self.state.grab_origin.replace(pos)?;
        let span = viewport.min_side();
        if !(span > 0.0) {
            return None;
        }
        let moved = match self.kind.drag_axis() {
            DragAxis::Horizontal => pos.x - origin.x,
            DragAxis::Vertical => pos.y - origin.y,
        };
        let delta = moved / span * self.swing;
        self.state.rotation += delta;
        Some(delta)
    }

    /// Release regardless of where the pointer is. Returns whether the
    /// circle was grabbed.
    pub fn pointer_up(&mut self) -> bool {
        let was = self.state.selected;
        self.state.selected = false;
        self.state.grab_origin = None;
        if was {
            log::info!("[circle] released {:?}", self.kind);
        }
        was
    }

    /// Force `Idle`, e.g. after focus loss.
    pub fn cancel(&mut self) -> bool {
        self.hovered = false;
        self.pointer_up()
    }

    /// Hovered iff this circle is the nearest hit. Returns whether it changed.
    pub fn update_hover(&mut self, hits: &[Hit]) -> bool {
        let hovered = self.is_nearest(hits);
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    pub fn reset_rotation(&mut self) {
        self.state.rotation = CIRCLE_BASE_ROTATION;
    }
}
