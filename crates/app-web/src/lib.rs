#![cfg(target_arch = "wasm32")]
//! Browser front-end: wires DOM events into the interaction core and exposes
//! a small handle for the page's rendering code.

mod dom;
mod events;
mod render;

use cranium::picking::screen_to_world_ray;
use cranium::{Hit, ViewConfig, VisualizationController};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");
    Ok(())
}

fn to_js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct CraniumView {
    controller: Rc<RefCell<VisualizationController>>,
    canvas: web::HtmlCanvasElement,
}

impl CraniumView {
    /// Hits from the page's raycaster, nearest first. When the page passes
    /// `undefined` the built-in picker is used instead.
    fn hits_at(&self, pos: Vec2, hits: JsValue) -> Result<Vec<Hit>, JsValue> {
        if hits.is_undefined() || hits.is_null() {
            let ctl = self.controller.borrow();
            let ray = screen_to_world_ray(&ctl.pick_camera(), &ctl.viewport(), pos.x, pos.y);
            return Ok(ctl.pick_scene().pick(&ray).into_vec());
        }
        #[allow(deprecated)]
        let hits = hits.into_serde().map_err(to_js_err)?;
        Ok(hits)
    }
}

#[wasm_bindgen]
impl CraniumView {
    /// `config` may be `undefined` for defaults, or a partial `ViewConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: web::HtmlCanvasElement, config: JsValue) -> Result<CraniumView, JsValue> {
        let config: ViewConfig = if config.is_undefined() || config.is_null() {
            ViewConfig::default()
        } else {
            #[allow(deprecated)]
            let parsed = config.into_serde().map_err(to_js_err)?;
            parsed
        };
        let platform = dom::detect_platform();
        let controller = VisualizationController::new(config, platform).map_err(to_js_err)?;
        let controller = Rc::new(RefCell::new(controller));

        events::wire_keyboard(controller.clone());
        events::wire_pointer_release(controller.clone(), canvas.clone());
        events::wire_resize(controller.clone(), canvas.clone());

        dom::sync_canvas_backing_size(&canvas);
        controller.borrow_mut().resize(dom::canvas_viewport(&canvas));
        log::info!("[view] attached platform={:?}", platform);
        Ok(CraniumView { controller, canvas })
    }

    pub fn pointer_down(&self, client_x: f32, client_y: f32, hits: JsValue) -> Result<(), JsValue> {
        let pos = dom::client_to_canvas_px(&self.canvas, client_x, client_y);
        let hits = self.hits_at(pos, hits)?;
        let cursor = {
            let mut ctl = self.controller.borrow_mut();
            ctl.pointer_down(pos, &hits);
            ctl.cursor()
        };
        dom::apply_cursor(&self.canvas, cursor);
        Ok(())
    }

    pub fn pointer_move(&self, client_x: f32, client_y: f32, hits: JsValue) -> Result<(), JsValue> {
        let pos = dom::client_to_canvas_px(&self.canvas, client_x, client_y);
        let hits = self.hits_at(pos, hits)?;
        let cursor = {
            let mut ctl = self.controller.borrow_mut();
            ctl.pointer_move(pos, &hits);
            ctl.cursor()
        };
        dom::apply_cursor(&self.canvas, cursor);
        Ok(())
    }

    pub fn set_sphere_radius(&self, radius: f32) {
        self.controller.borrow_mut().set_sphere_radius(radius);
    }

    pub fn set_clipping(&self, enabled: bool) -> bool {
        self.controller.borrow_mut().set_clipping_enabled(enabled)
    }

    /// Returns the zoom percent after the step.
    pub fn zoom_in(&self) -> i32 {
        let mut ctl = self.controller.borrow_mut();
        ctl.zoom_in();
        ctl.zoom_percent()
    }

    pub fn zoom_out(&self) -> i32 {
        let mut ctl = self.controller.borrow_mut();
        ctl.zoom_out();
        ctl.zoom_percent()
    }

    pub fn camera_moved(&self, azimuth: f32, polar: f32, distance: f32) {
        self.controller
            .borrow_mut()
            .camera_moved(azimuth, polar, distance);
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        let state = self.controller.borrow().render_state();
        #[allow(deprecated)]
        let value = JsValue::from_serde(&state).map_err(to_js_err)?;
        Ok(value)
    }

    pub fn take_export_request(&self) -> bool {
        self.controller.borrow_mut().take_export_request()
    }

    /// `render` receives the current state and must return a `Uint8Array`.
    pub fn export_view(&self, render: js_sys::Function) -> Result<Vec<u8>, JsValue> {
        let mut renderer = render::JsRenderer::new(render);
        let image = VisualizationController::export_shared(&self.controller, &mut renderer)
            .map_err(to_js_err)?;
        Ok(image.bytes)
    }

    /// `[[label, action], ...]` for the help overlay.
    pub fn binding_labels(&self) -> Result<JsValue, JsValue> {
        let labels = self.controller.borrow().binding_labels();
        #[allow(deprecated)]
        let value = JsValue::from_serde(&labels).map_err(to_js_err)?;
        Ok(value)
    }
}
