//! Main GUI application loop.

use log::{error, info};
use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use crate::config::{RenderConfig, WINDOW_TITLE};
use crate::controllers::frame_loop::FrameLoop;
use crate::input::gui::keymap::command_for_key;

/// Window-side state: the pixels surface and the frame loop feeding it.
struct App {
    pixels: Pixels<'static>,
    frame_loop: FrameLoop,
}

impl App {
    fn new(window: &'static Window, frame_loop: FrameLoop) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let buffer = frame_loop.buffer();
        let pixels = Pixels::new(buffer.width(), buffer.height(), surface_texture)?;

        Ok(Self { pixels, frame_loop })
    }

    /// Computes the frame and hands the RGBA bytes to the texture unchanged.
    fn render(&mut self) -> Result<(), pixels::Error> {
        let frame = self.frame_loop.render();
        self.pixels.frame_mut().copy_from_slice(frame);
        self.pixels.render()
    }

    fn resize_surface(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        if let Err(e) = self.pixels.resize_surface(width, height) {
            error!("Failed to resize surface: {e}");
        }
    }

    /// Returns `false` when the key asks to quit.
    fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if event.state != ElementState::Pressed {
            return true;
        }

        match event.physical_key {
            PhysicalKey::Code(key_code) => match command_for_key(key_code) {
                Some(command) => self.frame_loop.apply(command),
                None => true,
            },
            PhysicalKey::Unidentified(_) => true,
        }
    }
}

/// Runs the explorer window until it is closed or quit from the keyboard.
pub fn run_gui(config: &RenderConfig) -> Result<(), Box<dyn std::error::Error>> {
    let frame_loop = FrameLoop::set_up(config)?;
    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let mut app = App::new(window, frame_loop)?;
    let mut redraw_pending = true;

    info!(
        "explorer window open: {}x{}, {}",
        config.width, config.height, config.kernel
    );

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => {
                elwt.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if app.handle_key(event) {
                    redraw_pending = true;
                } else {
                    elwt.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                redraw_pending = false;

                if let Err(e) = app.render() {
                    error!("Render error: {e}");
                    elwt.exit();
                }
            }
            WindowEvent::Resized(size) => {
                app.resize_surface(size.width, size.height);
                redraw_pending = true;
            }
            _ => {}
        },
        Event::AboutToWait => {
            if redraw_pending {
                window.request_redraw();
            }
        }
        _ => {}
    })?;

    app.frame_loop.tear_down();

    Ok(())
}
