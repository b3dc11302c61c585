use super::{as_callback, listen};
use crate::dom;
use cranium::VisualizationController;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

// Release is listened for on the window, not the canvas: a grab ends wherever
// the button comes up. `pointercancel` is treated the same way.
pub fn wire_pointer_release(
    controller: Rc<RefCell<VisualizationController>>,
    canvas: web::HtmlCanvasElement,
) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let cursor = {
            let mut ctl = controller.borrow_mut();
            ctl.pointer_up();
            ctl.cursor()
        };
        dom::apply_cursor(&canvas, cursor);
    }) as Box<dyn FnMut(_)>);
    for event in ["pointerup", "pointercancel"] {
        listen(&window, event, as_callback(&closure));
    }
    closure.forget();
}

pub fn wire_resize(controller: Rc<RefCell<VisualizationController>>, canvas: web::HtmlCanvasElement) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        let viewport = dom::canvas_viewport(&canvas);
        controller.borrow_mut().resize(viewport);
        log::debug!("[view] resized to {}x{}", viewport.width, viewport.height);
    }) as Box<dyn FnMut()>);
    listen(&window, "resize", as_callback(&closure));
    closure.forget();
}
