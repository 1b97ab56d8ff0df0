//! Drop shadow rendering

use image::{Rgba, RgbaImage, imageops};

use crate::config::shadow;

/// Paint a blurred drop shadow for a rectangle of `size` about to be
/// pasted at `position`, using the default blur and opacity.
pub fn draw_shadow(canvas: &mut RgbaImage, size: (u32, u32), position: (i64, i64)) {
    draw_shadow_with(canvas, size, position, shadow::BLUR_SIGMA, shadow::OPACITY);
}

/// Paint a blurred drop shadow with explicit blur sigma and opacity.
/// The shadow sits [`shadow::OFFSET`] pixels down-right of the
/// rectangle and bleeds up to [`shadow::MARGIN`] pixels past its edges.
pub fn draw_shadow_with(
    canvas: &mut RgbaImage,
    size: (u32, u32),
    position: (i64, i64),
    blur_sigma: f32,
    opacity: u8,
) {
    let (w, h) = size;
    let margin = shadow::MARGIN;

    let mut scratch = RgbaImage::new(w + margin * 2, h + margin * 2);
    let inner = RgbaImage::from_pixel(w, h, Rgba([0, 0, 0, opacity]));
    imageops::overlay(&mut scratch, &inner, margin as i64, margin as i64);
    let blurred = imageops::blur(&scratch, blur_sigma);

    let x = position.0 - margin as i64 + shadow::OFFSET;
    let y = position.1 - margin as i64 + shadow::OFFSET;
    imageops::overlay(canvas, &blurred, x, y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_darkens_the_covered_region() {
        let mut canvas = RgbaImage::from_pixel(300, 300, Rgba([200, 200, 200, 255]));
        draw_shadow(&mut canvas, (80, 80), (110, 110));

        // Center of the offset shadow rectangle
        let center = canvas.get_pixel(162, 162);
        assert!(center[0] < 200, "expected darkening, got {}", center[0]);
        assert_eq!(center[3], 255);
    }

    #[test]
    fn test_shadow_leaves_distant_pixels_alone() {
        let mut canvas = RgbaImage::from_pixel(300, 300, Rgba([200, 200, 200, 255]));
        draw_shadow(&mut canvas, (80, 80), (110, 110));

        // Outside the padded shadow extent entirely
        assert_eq!(canvas.get_pixel(10, 10).0, [200, 200, 200, 255]);
        assert_eq!(canvas.get_pixel(299, 10).0, [200, 200, 200, 255]);
    }

    #[test]
    fn test_shadow_is_offset_down_right() {
        let mut canvas = RgbaImage::from_pixel(400, 400, Rgba([200, 200, 200, 255]));
        draw_shadow_with(&mut canvas, (100, 100), (150, 150), 5.0, 200);

        // With a tight blur the up-left flank clears before the
        // down-right flank at the same distance from the rectangle.
        let up_left = canvas.get_pixel(130, 130)[0];
        let down_right = canvas.get_pixel(270, 270)[0];
        assert!(down_right < up_left);
    }
}
