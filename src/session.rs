use crate::{FpsOverlay, FrameSurface, FONT_PATH, FONT_SIZE, HEIGHT, WIDTH};
use log::{error, info};
use minifb::{Scale, Window, WindowOptions};
use std::io;
use std::path::Path;

/// Owns the window, the frame surface, and the text context for the run.
///
/// Acquisition order is window, surface, font. Fields are declared in the
/// opposite order so Drop releases them in reverse: text context, surface,
/// window. A slot that failed to acquire is `None` and releases nothing.
pub struct DisplaySession {
    pub overlay: FpsOverlay,
    pub surface: Option<FrameSurface>,
    pub window: Window,
}

impl DisplaySession {
    /// Window creation failure is fatal and propagates; surface and font
    /// failures leave their slot empty and the run continues degraded.
    pub fn open(title: &str) -> io::Result<Self> {
        let window = Window::new(
            title,
            WIDTH,
            HEIGHT,
            WindowOptions {
                resize: false,
                scale: Scale::X1,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| {
            error!("could not create window: {}", e);
            io::Error::new(io::ErrorKind::Other, e)
        })?;

        let surface = FrameSurface::new(WIDTH, HEIGHT);
        let overlay = FpsOverlay::load(Path::new(FONT_PATH), FONT_SIZE);

        if !overlay.has_font() {
            info!("running without an FPS readout");
        }

        Ok(Self {
            overlay,
            surface,
            window,
        })
    }
}
