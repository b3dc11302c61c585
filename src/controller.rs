//! Top-level orchestration of the viewer's interaction state.
//!
//! The controller owns every piece of mutable state (held keys, circle
//! selection, orbit camera, zoom, clipping) and mutates it only from the
//! input handlers below. Front-ends forward raw events and read back a
//! `RenderState` for the renderer.

use crate::camera::Camera;
use crate::clipping::{self, ClipPlane, ClippingPlanePair};
use crate::config::ViewConfig;
use crate::error::ConfigError;
use crate::great_circle::{CircleKind, GreatCircleSelector};
use crate::hotkeys::{hotkey_label, FireMode, HotkeyDispatcher, KeyChord, Platform};
use crate::orbit::{OrbitBounds, OrbitCamera, ZoomState};
use crate::picking::PickScene;
use crate::scene::{nearest, Hit, SceneObject};
use crate::viewport::{fitted_sphere_radius, Viewport};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::cell::RefCell;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    AzimuthPlus,
    AzimuthMinus,
    PolarPlus,
    PolarMinus,
    ZoomIn,
    ZoomOut,
    ToggleClipping,
    ExportView,
    ResetView,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorStyle {
    #[default]
    Auto,
    Grab,
    Grabbing,
}

impl CursorStyle {
    pub fn as_css(self) -> &'static str {
        match self {
            CursorStyle::Auto => "auto",
            CursorStyle::Grab => "grab",
            CursorStyle::Grabbing => "grabbing",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircleView {
    pub rotation: f32,
    pub selected: bool,
    pub hovered: bool,
}

impl From<&GreatCircleSelector> for CircleView {
    fn from(sel: &GreatCircleSelector) -> Self {
        Self {
            rotation: sel.rotation(),
            selected: sel.is_selected(),
            hovered: sel.is_hovered(),
        }
    }
}

/// Everything the renderer needs for the next frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderState {
    pub bounds: OrbitBounds,
    pub camera: OrbitCamera,
    pub zoom_percent: i32,
    pub sphere_radius: f32,
    pub clipping: ClippingPlanePair,
    pub clip_planes: SmallVec<[ClipPlane; 2]>,
    pub equator: CircleView,
    pub meridian: CircleView,
    pub sphere_hovered: bool,
    pub cursor: CursorStyle,
}

/// Opaque image produced by the renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageBuffer {
    pub bytes: Vec<u8>,
}

/// The rendering collaborator's side of "export current view".
pub trait ViewRenderer {
    fn render_to_image(&mut self, state: &RenderState) -> anyhow::Result<ImageBuffer>;
}

fn default_bindings(config: &ViewConfig) -> Vec<(&'static str, Action, FireMode)> {
    let mut bindings = vec![
        ("a", Action::AzimuthPlus, FireMode::Continuous),
        ("d", Action::AzimuthMinus, FireMode::Continuous),
        ("w", Action::PolarPlus, FireMode::Continuous),
        ("s", Action::PolarMinus, FireMode::Continuous),
        ("=", Action::ZoomIn, FireMode::Continuous),
        ("+", Action::ZoomIn, FireMode::Continuous),
        ("-", Action::ZoomOut, FireMode::Continuous),
        ("mod+e", Action::ExportView, FireMode::Once),
        ("r", Action::ResetView, FireMode::Once),
    ];
    if config.clipping_toggle {
        bindings.push(("c", Action::ToggleClipping, FireMode::Once));
    }
    bindings
}

pub struct VisualizationController {
    config: ViewConfig,
    keys: HotkeyDispatcher<Action>,
    equator: GreatCircleSelector,
    meridian: GreatCircleSelector,
    bounds: OrbitBounds,
    camera: OrbitCamera,
    zoom: ZoomState,
    viewport: Viewport,
    sphere_radius: f32,
    clipping_enabled: bool,
    clipping: ClippingPlanePair,
    sphere_hovered: bool,
    export_requested: bool,
}

impl VisualizationController {
    pub fn new(config: ViewConfig, platform: Platform) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut keys = HotkeyDispatcher::new(platform);
        for (chord, action, mode) in default_bindings(&config) {
            keys.bind(chord, action, mode);
        }
        let zoom = ZoomState::new(&config.zoom, &config.orbit);
        let camera = OrbitCamera::new(zoom.distance());
        let drag = &config.drag;
        let equator = GreatCircleSelector::new(CircleKind::Equator, drag.enabled, drag.equator_swing);
        let meridian =
            GreatCircleSelector::new(CircleKind::Meridian, drag.enabled, drag.meridian_swing);
        let clipping_enabled = !config.clipping_toggle || config.clipping_initially_enabled;
        log::info!(
            "[view] controller ready platform={:?} clipping={} drag={}",
            platform,
            clipping_enabled,
            drag.enabled
        );
        Ok(Self {
            config,
            keys,
            equator,
            meridian,
            bounds: OrbitBounds::default(),
            camera,
            zoom,
            viewport: Viewport::default(),
            sphere_radius: 0.0,
            clipping_enabled,
            clipping: ClippingPlanePair::disabled(),
            sphere_hovered: false,
            export_requested: false,
        })
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn hotkeys(&self) -> &HotkeyDispatcher<Action> {
        &self.keys
    }

    /// Add a binding on top of the defaults.
    pub fn bind(&mut self, chord: impl Into<KeyChord>, action: Action, mode: FireMode) {
        self.keys.bind(chord, action, mode);
    }

    /// Display labels for every binding, for help overlays.
    pub fn binding_labels(&self) -> Vec<(String, Action)> {
        let platform = self.keys.platform();
        self.keys
            .bindings()
            .map(|(chord, action, _)| (hotkey_label(chord, platform), *action))
            .collect()
    }

    pub fn bounds(&self) -> OrbitBounds {
        self.bounds
    }

    pub fn camera(&self) -> OrbitCamera {
        self.camera
    }

    pub fn zoom_percent(&self) -> i32 {
        self.zoom.percent()
    }

    pub fn clipping(&self) -> &ClippingPlanePair {
        &self.clipping
    }

    pub fn is_clipping_enabled(&self) -> bool {
        self.clipping_enabled
    }

    pub fn sphere_radius(&self) -> f32 {
        self.sphere_radius
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn circle(&self, kind: CircleKind) -> &GreatCircleSelector {
        match kind {
            CircleKind::Equator => &self.equator,
            CircleKind::Meridian => &self.meridian,
        }
    }

    pub fn is_sphere_hovered(&self) -> bool {
        self.sphere_hovered
    }

    pub fn cursor(&self) -> CursorStyle {
        if self.equator.is_selected() || self.meridian.is_selected() {
            CursorStyle::Grabbing
        } else if self.sphere_hovered || self.equator.is_hovered() || self.meridian.is_hovered() {
            CursorStyle::Grab
        } else {
            CursorStyle::Auto
        }
    }

    // ---------------- Keyboard ----------------

    /// Returns whether any binding fired.
    pub fn key_down(&mut self, key: &str) -> bool {
        let mut fired: SmallVec<[Action; 4]> = SmallVec::new();
        self.keys.key_down(key, |action| fired.push(*action));
        self.apply_all(&fired)
    }

    /// Key-downs that arrived in the same tick.
    pub fn key_downs(&mut self, keys: &[&str]) -> bool {
        let mut fired: SmallVec<[Action; 4]> = SmallVec::new();
        self.keys
            .key_downs(keys.iter().copied(), |action| fired.push(*action));
        self.apply_all(&fired)
    }

    /// Key-down carrying the physical key code (`KeyboardEvent.code`, winit
    /// `PhysicalKey`). Pair with [`Self::key_up_code`].
    pub fn key_down_code(&mut self, code: &str, key: &str) -> bool {
        let mut fired: SmallVec<[Action; 4]> = SmallVec::new();
        self.keys.key_down_code(code, key, |action| fired.push(*action));
        self.apply_all(&fired)
    }

    fn apply_all(&mut self, actions: &[Action]) -> bool {
        for action in actions {
            self.apply(*action);
        }
        !actions.is_empty()
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.key_up(key);
    }

    pub fn key_up_code(&mut self, code: &str) {
        self.keys.key_up_code(code);
    }

    /// Window blur: all keys up and every grab released.
    pub fn focus_lost(&mut self) {
        self.keys.release_all();
        let released = self.equator.cancel() | self.meridian.cancel();
        self.sphere_hovered = false;
        if released {
            self.refresh_bounds();
        }
        log::debug!("[view] focus lost");
    }

    pub fn apply(&mut self, action: Action) {
        let step = self.config.orbit.key_rotate_step;
        match action {
            Action::AzimuthPlus => self.camera.rotate_azimuth(step, &self.bounds),
            Action::AzimuthMinus => self.camera.rotate_azimuth(-step, &self.bounds),
            Action::PolarPlus => self.camera.rotate_polar(step, &self.bounds),
            Action::PolarMinus => self.camera.rotate_polar(-step, &self.bounds),
            Action::ZoomIn => {
                self.zoom_in();
            }
            Action::ZoomOut => {
                self.zoom_out();
            }
            Action::ToggleClipping => {
                self.toggle_clipping();
            }
            Action::ExportView => self.request_export(),
            Action::ResetView => self.reset_view(),
        }
    }

    // ---------------- Pointer ----------------

    /// Hits whose points survive clipping, nearest first. Renderer raycasts
    /// do not honour clip planes, so clipped-away surfaces are dropped here.
    fn visible_hits(&self, hits: &[Hit]) -> SmallVec<[Hit; 4]> {
        hits.iter()
            .filter(|h| clipping::contains(h.point, &self.clipping))
            .copied()
            .collect()
    }

    pub fn pointer_down(&mut self, pos: Vec2, hits: &[Hit]) {
        let visible = self.visible_hits(hits);
        let grabbed =
            self.equator.pointer_down(pos, &visible) || self.meridian.pointer_down(pos, &visible);
        if grabbed {
            self.refresh_bounds();
        }
    }

    pub fn pointer_move(&mut self, pos: Vec2, hits: &[Hit]) {
        let visible = self.visible_hits(hits);
        let viewport = self.viewport;
        for sel in [&mut self.equator, &mut self.meridian] {
            if let Some(delta) = sel.pointer_move(pos, &viewport) {
                log::trace!("[circle] {:?} rotated by {delta:.4}", sel.kind());
            }
            sel.update_hover(&visible);
        }
        self.sphere_hovered = nearest(&visible) == Some(SceneObject::Sphere);
    }

    /// Pointer released anywhere in the document.
    pub fn pointer_up(&mut self) {
        let released = self.equator.pointer_up() | self.meridian.pointer_up();
        if released {
            self.refresh_bounds();
        }
    }

    fn refresh_bounds(&mut self) {
        self.bounds = OrbitBounds::derive(self.equator.is_selected(), self.meridian.is_selected());
        if self.camera.clamp_to(&self.bounds, &self.config.orbit) {
            log::debug!(
                "[orbit] camera clamped to azimuth={:.3} polar={:.3}",
                self.camera.azimuth,
                self.camera.polar
            );
        }
    }

    // ---------------- Viewport & clipping ----------------

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let radius = fitted_sphere_radius(
            &viewport,
            self.config.camera_fov_degrees.to_radians(),
            self.config.reference_depth,
            self.config.sphere_margin,
        );
        self.set_sphere_radius(radius);
    }

    /// For hosts that size the sphere themselves. A zero radius is treated
    /// as transient and leaves the previous geometry in place.
    pub fn set_sphere_radius(&mut self, radius: f32) {
        if !(radius.is_finite() && radius > 0.0) {
            log::debug!("[view] sphere radius {radius} unusable, keeping {}", self.sphere_radius);
            return;
        }
        self.sphere_radius = radius;
        self.refresh_clipping();
    }

    fn refresh_clipping(&mut self) {
        if !self.clipping_enabled || self.sphere_radius <= 0.0 {
            self.clipping = ClippingPlanePair::disabled();
            return;
        }
        self.clipping = match clipping::solve(self.sphere_radius, self.config.clip_proportion) {
            Ok(pair) => {
                log::debug!(
                    "[clip] distance={:.3} cut_radius={:.3}",
                    pair.distance,
                    pair.cut_radius
                );
                pair
            }
            Err(e) => {
                log::warn!("[clip] {e}");
                ClippingPlanePair::disabled()
            }
        };
    }

    /// Returns whether the state changed. Ignored when the clipping toggle
    /// is not part of the configuration.
    pub fn set_clipping_enabled(&mut self, enabled: bool) -> bool {
        if !self.config.clipping_toggle {
            log::debug!("[clip] toggle not configured; clipping stays on");
            return false;
        }
        if enabled == self.clipping_enabled {
            return false;
        }
        self.clipping_enabled = enabled;
        self.refresh_clipping();
        log::info!("[clip] enabled={enabled}");
        true
    }

    pub fn toggle_clipping(&mut self) -> bool {
        self.set_clipping_enabled(!self.clipping_enabled)
    }

    // ---------------- Zoom & camera ----------------

    pub fn zoom_in(&mut self) -> bool {
        let changed = self.zoom.zoom_in();
        if changed {
            self.camera.distance = self.zoom.distance();
        }
        changed
    }

    pub fn zoom_out(&mut self) -> bool {
        let changed = self.zoom.zoom_out();
        if changed {
            self.camera.distance = self.zoom.distance();
        }
        changed
    }

    /// The camera-control collaborator moved the camera (e.g. drag zoom).
    pub fn camera_moved(&mut self, azimuth: f32, polar: f32, distance: f32) {
        self.camera.azimuth = azimuth;
        self.camera.polar = polar;
        self.camera.distance = distance;
        self.camera.clamp_to(&self.bounds, &self.config.orbit);
        if let Some(percent) = self.zoom.sync_from_distance(self.camera.distance) {
            log::debug!("[zoom] synced from camera: {percent}%");
        }
    }

    pub fn reset_view(&mut self) {
        self.zoom.reset();
        self.camera = OrbitCamera::new(self.zoom.distance());
        self.camera.clamp_to(&self.bounds, &self.config.orbit);
        self.equator.reset_rotation();
        self.meridian.reset_rotation();
        log::info!("[view] reset");
    }

    // ---------------- Export ----------------

    pub fn request_export(&mut self) {
        self.export_requested = true;
    }

    /// Consume a pending export request.
    pub fn take_export_request(&mut self) -> bool {
        std::mem::take(&mut self.export_requested)
    }

    pub fn export_view(&mut self, renderer: &mut dyn ViewRenderer) -> anyhow::Result<ImageBuffer> {
        let image = renderer.render_to_image(&self.render_state())?;
        self.finish_export(&image);
        Ok(image)
    }

    /// Export for a controller shared with the renderer. No borrow is held
    /// while the renderer runs, so it may call back into the controller.
    pub fn export_shared(
        controller: &RefCell<Self>,
        renderer: &mut dyn ViewRenderer,
    ) -> anyhow::Result<ImageBuffer> {
        let state = controller.borrow().render_state();
        let image = renderer.render_to_image(&state)?;
        controller.borrow_mut().finish_export(&image);
        Ok(image)
    }

    fn finish_export(&mut self, image: &ImageBuffer) {
        self.export_requested = false;
        log::info!("[view] exported {} bytes", image.bytes.len());
    }

    // ---------------- Output ----------------

    pub fn pick_scene(&self) -> PickScene {
        PickScene {
            sphere_radius: self.sphere_radius,
            circles: [
                (CircleKind::Equator, self.equator.rotation()),
                (CircleKind::Meridian, self.meridian.rotation()),
            ],
        }
    }

    pub fn pick_camera(&self) -> Camera {
        Camera::from_orbit(&self.camera, &self.viewport, self.config.camera_fov_degrees)
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            bounds: self.bounds,
            camera: self.camera,
            zoom_percent: self.zoom.percent(),
            sphere_radius: self.sphere_radius,
            clipping: self.clipping,
            clip_planes: self.clipping.planes(),
            equator: CircleView::from(&self.equator),
            meridian: CircleView::from(&self.meridian),
            sphere_hovered: self.sphere_hovered,
            cursor: self.cursor(),
        }
    }
}
