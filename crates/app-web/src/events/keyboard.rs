use super::{as_callback, listen};
use cranium::VisualizationController;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

// Key state lives on the window so chords survive focus moving between
// page elements; blur counts as releasing every key. Keys are tracked by
// `KeyboardEvent.code` so a symbol that changes with Shift is released.
pub fn wire_keyboard(controller: Rc<RefCell<VisualizationController>>) {
    let Some(window) = web::window() else {
        log::warn!("[keys] no window; keyboard disabled");
        return;
    };

    let ctl = controller.clone();
    let keydown = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let code = ev.code();
        let fired = if code.is_empty() {
            ctl.borrow_mut().key_down(&ev.key())
        } else {
            ctl.borrow_mut().key_down_code(&code, &ev.key())
        };
        if fired {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    listen(&window, "keydown", as_callback(&keydown));
    keydown.forget();

    let ctl = controller.clone();
    let keyup = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let code = ev.code();
        if code.is_empty() {
            ctl.borrow_mut().key_up(&ev.key());
        } else {
            ctl.borrow_mut().key_up_code(&code);
        }
    }) as Box<dyn FnMut(_)>);
    listen(&window, "keyup", as_callback(&keyup));
    keyup.forget();

    let blur = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        controller.borrow_mut().focus_lost();
    }) as Box<dyn FnMut(_)>);
    listen(&window, "blur", as_callback(&blur));
    blur.forget();
}
