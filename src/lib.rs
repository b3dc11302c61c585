//! Interaction core of the cranium viewer.
//!
//! Platform independent: the web and native front-ends forward raw input
//! events to [`VisualizationController`] and hand its [`RenderState`] to
//! their renderer.

pub mod camera;
pub mod clipping;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod great_circle;
pub mod hotkeys;
pub mod orbit;
pub mod picking;
pub mod scene;
pub mod viewport;

pub use clipping::{contains, solve, ClipPlane, ClippingPlanePair};
pub use config::{DragConfig, OrbitConfig, ViewConfig, ZoomConfig};
pub use controller::{
    Action, CircleView, CursorStyle, ImageBuffer, RenderState, ViewRenderer,
    VisualizationController,
};
pub use error::{ConfigError, GeometryError};
pub use great_circle::{CircleKind, GreatCircleSelector, GreatCircleState, SelectorPhase};
pub use hotkeys::{hotkey_label, FireMode, HotkeyDispatcher, KeyChord, Platform};
pub use orbit::{OrbitBounds, OrbitCamera, ZoomState};
pub use scene::{Hit, SceneObject};
pub use viewport::Viewport;
