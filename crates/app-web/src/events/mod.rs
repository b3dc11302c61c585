pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_keyboard;
pub use pointer::{wire_pointer_release, wire_resize};

use wasm_bindgen::JsCast;
use web_sys as web;

/// Register `callback` for `event` on the window. A failed registration is
/// logged: losing `keyup`, `blur` or `pointerup` leaves keys or grabs held.
fn listen(window: &web::Window, event: &str, callback: &js_sys::Function) {
    if let Err(e) = window.add_event_listener_with_callback(event, callback) {
        log::warn!("[events] failed to listen for {event}: {:?}", e);
    }
}

fn as_callback<T: ?Sized>(closure: &wasm_bindgen::closure::Closure<T>) -> &js_sys::Function {
    closure.as_ref().unchecked_ref()
}
