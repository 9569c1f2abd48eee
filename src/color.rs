#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32, // Red component (0.0 - 1.0)
    pub g: f32, // Green component (0.0 - 1.0)
    pub b: f32, // Blue component (0.0 - 1.0)
}

impl Color {
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };

    /// Create a new color with RGB components normalized.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Scale the color by a coverage value, e.g. a glyph's alpha.
    pub fn scaled(&self, alpha: f32) -> Self {
        Self::new(self.r * alpha, self.g * alpha, self.b * alpha)
    }

    /// Pack into 0RGB as expected by minifb's framebuffer.
    pub fn to_u32(&self) -> u32 {
        let r = (self.r * 255.0) as u32;
        let g = (self.g * 255.0) as u32;
        let b = (self.b * 255.0) as u32;
        (r << 16) | (g << 8) | b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_channels_into_0rgb() {
        assert_eq!(Color::WHITE.to_u32(), 0x00FF_FFFF);
        assert_eq!(Color::BLACK.to_u32(), 0);
        assert_eq!(Color::new(1.0, 0.0, 0.0).to_u32(), 0x00FF_0000);
        assert_eq!(Color::new(0.0, 0.0, 1.0).to_u32(), 0x0000_00FF);
    }

    #[test]
    fn scaled_dims_every_channel() {
        let half = Color::WHITE.scaled(0.5);
        assert_eq!(half, Color::new(0.5, 0.5, 0.5));
        assert_eq!(Color::WHITE.scaled(0.0).to_u32(), 0);
    }
}
