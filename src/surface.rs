use crate::Color;
use fontdue::Font;
use glam::UVec2;
use log::error;
use minifb::Window;
use rayon::iter::ParallelIterator;
use rayon::slice::ParallelSliceMut;
use std::io;

pub const MAX_DIMS: UVec2 = UVec2::new(3840, 2160); // 4K resolution as max

/// Software framebuffer presented to the window each frame.
pub struct FrameSurface {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u32>,
}

impl FrameSurface {
    /// Returns `None` when the requested dimensions exceed [`MAX_DIMS`];
    /// the caller is expected to keep running without a drawable surface.
    pub fn new(width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 || width > MAX_DIMS.x as usize || height > MAX_DIMS.y as usize
        {
            error!("unsupported surface dimensions {}x{}", width, height);
            return None;
        }
        Some(FrameSurface {
            width,
            height,
            data: vec![Color::BLACK.to_u32(); width * height],
        })
    }

    pub fn clear(&mut self) {
        self.data.par_chunks_mut(1024).for_each(|chunk| {
            for point in chunk {
                *point = 0;
            }
        });
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            self.data[x + y * self.width] = color.to_u32();
        }
    }

    /// Rasterize `text` glyph by glyph and blit it with the top-left corner at
    /// `pos`. Pixels falling outside the surface are clipped.
    pub fn draw_text(&mut self, font: &Font, text: &str, pos: UVec2, px: f32, color: Color) {
        let mut cursor_x = pos.x as i32;
        let y = pos.y as i32;

        for c in text.chars() {
            let (metrics, bitmap) = font.rasterize(c, px);

            for (i, &alpha) in bitmap.iter().enumerate() {
                let bx = i % metrics.width;
                let by = i / metrics.width;

                let sx = cursor_x + bx as i32 + metrics.xmin;
                let sy = y + by as i32 + metrics.ymin;

                if sx >= 0 && sx < self.width as i32 && sy >= 0 && sy < self.height as i32 {
                    let alpha_f = alpha as f32 / 255.0;
                    self.data[sx as usize + sy as usize * self.width] =
                        color.scaled(alpha_f).to_u32();
                }
            }

            cursor_x += metrics.advance_width as i32;
        }
    }

    pub fn present(&self, window: &mut Window) -> io::Result<()> {
        window
            .update_with_buffer(&self.data, self.width, self.height)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_dimensions_beyond_max() {
        assert!(FrameSurface::new(MAX_DIMS.x as usize + 1, 100).is_none());
        assert!(FrameSurface::new(100, MAX_DIMS.y as usize + 1).is_none());
        assert!(FrameSurface::new(0, 100).is_none());
        assert!(FrameSurface::new(800, 600).is_some());
    }

    #[test]
    fn clear_resets_every_pixel_to_black() {
        let mut surface = FrameSurface::new(64, 48).unwrap();
        surface.set_pixel(3, 7, Color::WHITE);
        surface.set_pixel(63, 47, Color::new(1.0, 0.0, 0.0));
        surface.clear();
        assert!(surface.data.iter().all(|&p| p == 0));
    }

    #[test]
    fn set_pixel_clips_out_of_bounds() {
        let mut surface = FrameSurface::new(16, 16).unwrap();
        surface.set_pixel(16, 0, Color::WHITE);
        surface.set_pixel(0, 16, Color::WHITE);
        assert!(surface.data.iter().all(|&p| p == 0));
    }

    #[test]
    fn draw_text_touches_pixels_in_bounds_only() {
        // Needs the runtime font next to the working directory; skip otherwise.
        let Ok(data) = std::fs::read(crate::FONT_PATH) else {
            return;
        };
        let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default()).unwrap();

        let mut surface = FrameSurface::new(64, 32).unwrap();
        surface.draw_text(&font, "FPS: 60", UVec2::new(10, 10), 14.0, Color::WHITE);
        assert!(surface.data.iter().any(|&p| p != 0));

        // Near the right edge most glyphs land outside; must clip, not panic.
        surface.draw_text(&font, "FPS: 60", UVec2::new(62, 30), 14.0, Color::WHITE);
    }
}
