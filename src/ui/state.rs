use winit::dpi::PhysicalSize;
use winit::keyboard::{Key, NamedKey};
use winit::window::Window;

use crate::error::ViewerError;
use crate::loader::{self, Frame};
use crate::navigator::{Navigator, RenderInstruction};
use crate::ui::render::{blit_centered, rgb, BG_COLOR};

// ---------------------------------------------------------------------------
// Key bindings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Next,
    Previous,
}

/// Map a logical key to a viewer action. Letters are case-insensitive.
pub fn key_action(key: &Key) -> Option<Action> {
    match key {
        Key::Named(NamedKey::Escape) => Some(Action::Quit),
        Key::Named(NamedKey::ArrowRight) | Key::Named(NamedKey::Space) => Some(Action::Next),
        Key::Named(NamedKey::ArrowLeft) => Some(Action::Previous),
        Key::Character(s) => {
            let mut chars = s.chars();
            let c = chars.next()?.to_ascii_lowercase();
            if chars.next().is_some() {
                return None;
            }
            match c {
                'q' => Some(Action::Quit),
                'j' => Some(Action::Next),
                'k' => Some(Action::Previous),
                _ => None,
            }
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

pub struct ViewerState {
    pub navigator: Navigator,
    /// The frame currently on screen. Survives failed navigation steps.
    pub frame: Option<Frame>,
    /// Cursor of the image held in `frame`.
    pub displayed_index: Option<usize>,
}

impl ViewerState {
    pub fn new(navigator: Navigator) -> Self {
        Self {
            navigator,
            frame: None,
            displayed_index: None,
        }
    }

    /// Apply a navigation action to the cursor. Returns true if the app should quit.
    /// The caller re-shows the current image after a move.
    pub fn apply(&mut self, action: Action) -> bool {
        let from = self.navigator.cursor();
        let to = match action {
            Action::Quit => return true,
            Action::Next => self.navigator.advance(),
            Action::Previous => self.navigator.retreat(),
        };
        log::debug!("[nav] move {} -> {} of {}", from, to, self.navigator.len());
        false
    }

    /// Decode the image under the cursor, fit it to the target frame and keep
    /// the result for the next redraw. On failure the previous frame stays.
    pub fn show_current(&mut self, window: &Window) {
        if let Some((width, height)) = self.show_with(|| target_frame(window)) {
            let _ = window.request_inner_size(PhysicalSize::new(width, height));
            window.request_redraw();
        }
    }

    /// Display-independent half of `show_current`. `frame_size` is queried
    /// after a successful decode. Returns the size the window should take, or
    /// `None` when this step leaves the previous frame on screen. The cursor
    /// is never rolled back.
    pub fn show_with(
        &mut self,
        frame_size: impl FnOnce() -> Result<(u32, u32), ViewerError>,
    ) -> Option<(u32, u32)> {
        match self.prepare_current(frame_size) {
            Ok((frame, instr)) => {
                log::debug!(
                    "[render] {} {}x{} -> {}x{}",
                    self.navigator.current().display(),
                    instr.natural_width,
                    instr.natural_height,
                    instr.width,
                    instr.height
                );
                let size = (frame.width, frame.height);
                self.frame = Some(frame);
                self.displayed_index = Some(self.navigator.cursor());
                Some(size)
            }
            Err(err @ ViewerError::DecodeFailure { .. }) => {
                log::warn!("{} (still showing index {:?})", err, self.displayed_index);
                None
            }
            Err(err) => {
                println!("{}", err);
                None
            }
        }
    }

    fn prepare_current(
        &self,
        frame_size: impl FnOnce() -> Result<(u32, u32), ViewerError>,
    ) -> Result<(Frame, RenderInstruction), ViewerError> {
        let decoded = loader::decode(self.navigator.current())?;
        let instr = RenderInstruction::fit((decoded.width(), decoded.height()), frame_size()?)?;
        Ok((decoded.scale_to(&instr), instr))
    }

    /// Render into the softbuffer framebuffer (u32 per pixel, 0x00RRGGBB).
    pub fn render(&self, buffer: &mut [u32], fb_w: u32, fb_h: u32) {
        buffer.fill(rgb(BG_COLOR[0], BG_COLOR[1], BG_COLOR[2]));
        if let Some(ref frame) = self.frame {
            blit_centered(buffer, fb_w, fb_h, &frame.pixels, frame.width, frame.height);
        }
    }
}

/// Size of the primary monitor, falling back to the window's current one
/// where the platform has no notion of a primary monitor.
fn target_frame(window: &Window) -> Result<(u32, u32), ViewerError> {
    let monitor = window
        .primary_monitor()
        .or_else(|| window.current_monitor())
        .ok_or(ViewerError::DisplayQueryFailure)?;
    let size = monitor.size();
    Ok((size.width, size.height))
}
