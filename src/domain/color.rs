//! Color types for gradients and caption text

/// RGB color with 8-bit channels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new color from channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Interpolate each channel toward `other`, truncating to integer
    pub fn lerp(self, other: Rgb, ratio: f32) -> Rgb {
        let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * ratio) as u8;
        Rgb {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }

    /// Convert to image crate RGBA format (opaque)
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let top = Rgb::new(30, 30, 40);
        let bottom = Rgb::new(15, 15, 25);
        assert_eq!(top.lerp(bottom, 0.0), top);
        assert_eq!(top.lerp(bottom, 1.0), bottom);
    }

    #[test]
    fn test_lerp_truncates() {
        // 30 + (15 - 30) * 0.5 = 22.5, truncated to 22
        let mid = Rgb::new(30, 30, 40).lerp(Rgb::new(15, 15, 25), 0.5);
        assert_eq!(mid, Rgb::new(22, 22, 32));
    }

    #[test]
    fn test_to_rgba_u8_is_opaque() {
        assert_eq!(Rgb::new(180, 180, 190).to_rgba_u8(), [180, 180, 190, 255]);
    }
}
