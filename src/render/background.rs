//! Gradient canvas generation

use image::{Rgba, RgbaImage};

use crate::domain::Rgb;

/// Build an opaque vertical-gradient canvas. Each scanline is a linear
/// interpolation between `top` (row 0) and `bottom`, computed per
/// channel with the ratio `y / height`.
pub fn gradient_canvas(width: u32, height: u32, top: Rgb, bottom: Rgb) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    for y in 0..height {
        let ratio = y as f32 / height as f32;
        let row = Rgba(top.lerp(bottom, ratio).to_rgba_u8());
        for x in 0..width {
            img.put_pixel(x, y, row);
        }
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn test_top_row_is_exact() {
        let img = gradient_canvas(16, 100, config::GRADIENT_TOP, config::GRADIENT_BOTTOM);
        assert_eq!(img.get_pixel(0, 0).0, [30, 30, 40, 255]);
        assert_eq!(img.get_pixel(15, 0).0, [30, 30, 40, 255]);
    }

    #[test]
    fn test_bottom_row_within_rounding() {
        let img = gradient_canvas(16, 100, config::GRADIENT_TOP, config::GRADIENT_BOTTOM);
        let bottom = img.get_pixel(0, 99).0;
        let expected = [15u8, 15, 25];
        for (got, want) in bottom[..3].iter().zip(expected) {
            assert!(got.abs_diff(want) <= 1, "channel {got} vs {want}");
        }
        assert_eq!(bottom[3], 255);
    }

    #[test]
    fn test_rows_are_uniform() {
        let img = gradient_canvas(32, 64, config::GRADIENT_TOP, config::GRADIENT_BOTTOM);
        let row = 40;
        let first = img.get_pixel(0, row);
        for x in 1..32 {
            assert_eq!(img.get_pixel(x, row), first);
        }
    }
}
