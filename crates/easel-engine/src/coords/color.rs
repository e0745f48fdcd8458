/// Straight-alpha RGBA tint, one byte per channel (`0`–`255`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    /// Channels scaled to `[0, 1]`, as the shaders expect.
    #[inline]
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::white()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_opaque_white() {
        assert_eq!(Color::default(), Color::new(255, 255, 255, 255));
    }

    #[test]
    fn to_f32_normalizes() {
        assert_eq!(Color::new(255, 0, 51, 255).to_f32(), [1.0, 0.0, 0.2, 1.0]);
    }
}
