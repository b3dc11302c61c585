//! Desktop harness for the interaction core: no scene rendering, the window
//! title mirrors the controller state so hotkeys, picking and zoom can be
//! exercised without a browser.

mod keys;

use cranium::picking::screen_to_world_ray;
use cranium::{CircleKind, CursorStyle, Platform, ViewConfig, Viewport, VisualizationController};
use glam::Vec2;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{CursorIcon, Window, WindowBuilder};

fn cursor_icon(style: CursorStyle) -> CursorIcon {
    match style {
        CursorStyle::Auto => CursorIcon::Default,
        CursorStyle::Grab => CursorIcon::Grab,
        CursorStyle::Grabbing => CursorIcon::Grabbing,
    }
}

fn status_line(ctl: &VisualizationController) -> String {
    let cam = ctl.camera();
    format!(
        "cranium | zoom {}% | az {:.2} polar {:.2} | clip {} | eq {:.2} mer {:.2}",
        ctl.zoom_percent(),
        cam.azimuth,
        cam.polar,
        if ctl.is_clipping_enabled() { "on" } else { "off" },
        ctl.circle(CircleKind::Equator).rotation(),
        ctl.circle(CircleKind::Meridian).rotation(),
    )
}

fn refresh_window(window: &Window, ctl: &mut VisualizationController, last_status: &mut String) {
    if ctl.take_export_request() {
        log::warn!("[export] no renderer attached to the native harness; request dropped");
    }
    window.set_cursor_icon(cursor_icon(ctl.cursor()));
    let status = status_line(ctl);
    if status != *last_status {
        log::debug!("[view] {status}");
        window.set_title(&status);
        *last_status = status;
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut ctl = VisualizationController::new(ViewConfig::default(), Platform::current())?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("cranium (native)")
        .build(&event_loop)?;

    let size = window.inner_size();
    ctl.resize(Viewport::new(size.width as f32, size.height as f32));
    let mut pointer = Vec2::ZERO;
    let mut last_status = String::new();

    event_loop.run(move |event, elwt| {
        let Event::WindowEvent { event, .. } = event else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                ctl.resize(Viewport::new(size.width as f32, size.height as f32));
            }
            WindowEvent::Focused(false) => ctl.focus_lost(),
            WindowEvent::KeyboardInput { event, .. } => {
                let code = keys::physical_code(&event.physical_key);
                match (event.state, code) {
                    (ElementState::Pressed, code) => {
                        let Some(name) = keys::key_name(&event.logical_key) else {
                            return;
                        };
                        match code {
                            Some(code) => ctl.key_down_code(&code, &name),
                            None => ctl.key_down(&name),
                        };
                    }
                    (ElementState::Released, Some(code)) => ctl.key_up_code(&code),
                    (ElementState::Released, None) => {
                        let Some(name) = keys::key_name(&event.logical_key) else {
                            return;
                        };
                        ctl.key_up(&name);
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                pointer = Vec2::new(position.x as f32, position.y as f32);
                let ray = screen_to_world_ray(&ctl.pick_camera(), &ctl.viewport(), pointer.x, pointer.y);
                let hits = ctl.pick_scene().pick(&ray);
                ctl.pointer_move(pointer, &hits);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    let ray =
                        screen_to_world_ray(&ctl.pick_camera(), &ctl.viewport(), pointer.x, pointer.y);
                    let hits = ctl.pick_scene().pick(&ray);
                    ctl.pointer_down(pointer, &hits);
                }
                ElementState::Released => ctl.pointer_up(),
            },
            _ => return,
        }
        refresh_window(&window, &mut ctl, &mut last_status);
    })?;
    Ok(())
}
