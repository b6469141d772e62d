use std::num::NonZeroU32;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};
use softbuffer::Surface;

use crate::error::ViewerError;
use crate::ui::state::{key_action, ViewerState};

pub mod render;
pub mod state;

// ---------------------------------------------------------------------------
// Application handler (winit 0.30 style)
// ---------------------------------------------------------------------------

pub struct App {
    pub state: ViewerState,
    pub window: Option<Arc<Window>>,
    pub context: Option<softbuffer::Context<Arc<Window>>>,
    pub surface: Option<Surface<Arc<Window>, Arc<Window>>>,
    /// Set when the window or surface could not be created; ends the loop.
    pub fatal: Option<ViewerError>,
}

impl App {
    pub fn new(state: ViewerState) -> Self {
        Self {
            state,
            window: None,
            context: None,
            surface: None,
            fatal: None,
        }
    }

    /// Outcome of the event loop once it has returned.
    pub fn finish(self) -> Result<(), ViewerError> {
        match self.fatal {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ViewerError> {
        let attrs = Window::default_attributes()
            .with_title("dirview")
            .with_decorations(false)
            .with_inner_size(LogicalSize::new(640u32, 480u32));
        let window = Arc::new(event_loop.create_window(attrs)?);
        let context = softbuffer::Context::new(Arc::clone(&window))?;
        let surface = Surface::new(&context, Arc::clone(&window))?;
        log::info!(
            "Window created for {:?} ({} images)",
            self.state.navigator.catalog().dir(),
            self.state.navigator.len()
        );
        log::debug!("Catalog order: {:?}", self.state.navigator.catalog().paths());

        self.state.show_current(&window);
        window.request_redraw();
        self.window = Some(window);
        self.context = Some(context);
        self.surface = Some(surface);
        Ok(())
    }

    fn redraw(&mut self) -> Result<(), ViewerError> {
        let (Some(window), Some(surface)) = (self.window.as_ref(), self.surface.as_mut()) else {
            return Ok(());
        };
        let Some((w, h)) = surface_size(window.inner_size()) else {
            return Ok(());
        };
        surface.resize(w, h)?;
        let mut buffer = surface.buffer_mut()?;
        self.state.render(&mut buffer, w.get(), h.get());
        buffer.present()?;
        Ok(())
    }
}

/// Surface dimensions for a window size. Minimised windows report a zero
/// side, which leaves nothing to draw.
fn surface_size(size: PhysicalSize<u32>) -> Option<(NonZeroU32, NonZeroU32)> {
    Some((NonZeroU32::new(size.width)?, NonZeroU32::new(size.height)?))
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.create_window(event_loop) {
            log::error!("{}", err);
            self.fatal = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(_) => {
                if let Some(ref window) = self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let Some(action) = key_action(&event.logical_key) else {
                    return;
                };
                if self.state.apply(action) {
                    event_loop.exit();
                    return;
                }
                if let Some(ref window) = self.window {
                    self.state.show_current(window);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    log::error!("{}", err);
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}
