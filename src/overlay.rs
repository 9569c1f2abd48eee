use crate::pacer::FrameTiming;
use crate::surface::FrameSurface;
use crate::Color;
use fontdue::{Font, FontSettings};
use glam::UVec2;
use log::error;
use std::path::Path;

pub const OVERLAY_POS: UVec2 = UVec2::new(10, 10);

/// Draws the frames-per-second readout each frame. A missing font degrades to
/// a blank overlay rather than an error.
pub struct FpsOverlay {
    font: Option<Font>,
    px: f32,
}

impl FpsOverlay {
    /// Load the overlay font. On failure the overlay stays usable but draws
    /// nothing, matching the degraded-feature error policy.
    pub fn load(path: &Path, px: f32) -> Self {
        let font = match std::fs::read(path) {
            Ok(data) => match Font::from_bytes(
                data,
                FontSettings {
                    scale: px,
                    ..FontSettings::default()
                },
            ) {
                Ok(font) => Some(font),
                Err(e) => {
                    error!("error parsing font {}: {}", path.display(), e);
                    None
                }
            },
            Err(e) => {
                error!("error loading font {}: {}", path.display(), e);
                None
            }
        };
        Self { font, px }
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Report the frames counted since the last call and reset the counter.
    /// The counter resets every call, so at a steady 16ms cadence the readout
    /// is 1000/16 per single counted frame.
    pub fn draw(&self, timing: &mut FrameTiming, surface: &mut FrameSurface) {
        let label = fps_label(timing.frame_count, timing.frame_time.as_millis() as u64);
        if let (Some(label), Some(font)) = (label, &self.font) {
            surface.draw_text(font, &label, OVERLAY_POS, self.px, Color::WHITE);
        }
        timing.frame_count = 0;
    }
}

/// `"FPS: <n>"` with n = count * 1000 / elapsed_ms, integer division.
/// A zero elapsed time yields no label instead of dividing by zero.
pub fn fps_label(frame_count: u32, frame_time_ms: u64) -> Option<String> {
    if frame_time_ms == 0 {
        return None;
    }
    Some(format!("FPS: {}", frame_count as u64 * 1000 / frame_time_ms))
}
