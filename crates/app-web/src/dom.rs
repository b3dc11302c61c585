use cranium::{CursorStyle, Platform, Viewport};
use glam::Vec2;
use web_sys as web;

pub fn detect_platform() -> Platform {
    web::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .map(|ua| Platform::from_user_agent(&ua))
        .unwrap_or(Platform::Unknown)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    Viewport::new(canvas.width() as f32, canvas.height() as f32)
}

/// Client (CSS px) coordinates to canvas backing-store pixels.
#[inline]
pub fn client_to_canvas_px(canvas: &web::HtmlCanvasElement, client_x: f32, client_y: f32) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return Vec2::ZERO;
    }
    let x_css = client_x - rect.left() as f32;
    let y_css = client_y - rect.top() as f32;
    Vec2::new(
        x_css / w * canvas.width() as f32,
        y_css / h * canvas.height() as f32,
    )
}

pub fn apply_cursor(canvas: &web::HtmlCanvasElement, cursor: CursorStyle) {
    if let Err(e) = canvas.style().set_property("cursor", cursor.as_css()) {
        log::warn!("[dom] cursor update failed: {:?}", e);
    }
}
