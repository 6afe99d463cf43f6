//! Live window presenter and input polling.
//!
//! Feature-gated behind `window`. The presenter mirrors the canvas into a
//! minifb window and polls the keyboard around each frame:
//!
//! - space toggles pause; while paused the poll loop spins on
//!   `Window::update()` until unpaused or quit,
//! - escape, ctrl+C, or closing the window is a quit signal, surfaced as
//!   the fatal [`DisplayError::Quit`],
//! - every other key is ignored.

use minifb::{Key, KeyRepeat, Window, WindowOptions};

use crate::canvas::Canvas;
use crate::error::DisplayError;

/// A minifb window mirroring the renderer's canvas.
pub struct Presenter {
    window: Window,
    paused: bool,
}

impl Presenter {
    /// Open a window of the given pixel size.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, DisplayError> {
        let window = Window::new(
            title,
            width as usize,
            height as usize,
            WindowOptions::default(),
        )
        .map_err(|err| DisplayError::Window(format!("{err:?}")))?;
        tracing::debug!(width, height, "display window opened");
        Ok(Self {
            window,
            paused: false,
        })
    }

    /// Poll pending input, blocking while paused.
    ///
    /// Returns [`DisplayError::Quit`] on a quit signal. The pause loop
    /// re-polls the window each iteration; minifb's update pacing keeps it
    /// from spinning a core flat out.
    pub fn poll(&mut self) -> Result<(), DisplayError> {
        loop {
            self.window.update();

            if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
                tracing::info!("quit requested via display window");
                return Err(DisplayError::Quit);
            }
            let ctrl = self.window.is_key_down(Key::LeftCtrl)
                || self.window.is_key_down(Key::RightCtrl);
            if ctrl && self.window.is_key_pressed(Key::C, KeyRepeat::No) {
                tracing::info!("quit requested via ctrl+C");
                return Err(DisplayError::Quit);
            }

            if self.window.is_key_pressed(Key::Space, KeyRepeat::No) {
                self.paused = !self.paused;
                tracing::debug!(paused = self.paused, "pause toggled");
            }

            if !self.paused {
                return Ok(());
            }
        }
    }

    /// Push the canvas to the window.
    pub fn present(&mut self, canvas: &Canvas) -> Result<(), DisplayError> {
        let buffer = canvas.to_argb();
        self.window
            .update_with_buffer(&buffer, canvas.width() as usize, canvas.height() as usize)
            .map_err(|err| DisplayError::Window(format!("{err:?}")))
    }

    /// Whether the last poll left the view paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}
