use anyhow::{Context, Result};
use drift_core::Extent;
use minifb::{Key, Window, WindowOptions};

/// Borderless, always-on-top, transparent window the animation is
/// presented into.
pub struct Overlay {
    window: Window,
}

impl Overlay {
    /// Open the overlay. Failing to create the window is fatal at startup.
    pub fn open(name: &str, width: usize, height: usize) -> Result<Self> {
        let window = Window::new(
            name,
            width,
            height,
            WindowOptions {
                borderless: true,
                title: false,
                resize: false,
                topmost: true,
                transparency: true,
                ..WindowOptions::default()
            },
        )
        .context("could not open the overlay window")?;
        Ok(Self { window })
    }

    /// Current window bounds, queried once per frame.
    pub fn extent(&self) -> Extent {
        let (width, height) = self.window.get_size();
        Extent::new(width as u32, height as u32)
    }

    /// The loop's termination condition: the window is still open and
    /// Escape has not been pressed.
    pub fn running(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }

    /// Present a finished frame.
    pub fn present(&mut self, pixels: &[u32], extent: Extent) -> Result<()> {
        self.window
            .update_with_buffer(pixels, extent.width as usize, extent.height as usize)
            .context("presenting the frame failed")
    }
}
