//! Caption text rendering
//!
//! Single-line only; a caption wider than the canvas clips off both
//! edges, which never happens with the fixed marketing strings.

use image::RgbaImage;
use rusttype::{Font, Scale, point};

use crate::domain::Rgb;
use crate::fonts::TextStyle;

/// Width in pixels of `text` rendered at `px`
pub fn measure_width(font: &Font<'_>, px: f32, text: &str) -> f32 {
    let scale = Scale::uniform(px);
    let v_metrics = font.v_metrics(scale);
    font.layout(text, scale, point(0.0, v_metrics.ascent))
        .filter_map(|glyph| glyph.pixel_bounding_box())
        .map(|bb| bb.max.x as f32)
        .fold(0.0, f32::max)
}

/// Draw `text` horizontally centered with its top at vertical offset `y`
pub fn draw_centered(canvas: &mut RgbaImage, text: &str, y: i32, style: &TextStyle) {
    let width = measure_width(&style.font, style.px, text);
    let x = (canvas.width() as i32 - width as i32) / 2;
    draw_text(canvas, &style.font, style.px, x, y, style.color, text);
}

/// Rasterize glyphs and alpha-blend their coverage into the canvas
fn draw_text(
    canvas: &mut RgbaImage,
    font: &Font<'_>,
    px: f32,
    x: i32,
    y: i32,
    color: Rgb,
    text: &str,
) {
    let scale = Scale::uniform(px);
    let v_metrics = font.v_metrics(scale);
    let baseline = y as f32 + v_metrics.ascent;

    for glyph in font.layout(text, scale, point(x as f32, baseline)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = gx as i32 + bb.min.x;
            let py = gy as i32 + bb.min.y;
            if px < 0 || py < 0 {
                return;
            }
            let (px, py) = (px as u32, py as u32);
            if px >= canvas.width() || py >= canvas.height() {
                return;
            }
            if coverage <= 0.0 {
                return;
            }
            let dst = canvas.get_pixel_mut(px, py);
            let alpha = coverage.min(1.0);
            let inv = 1.0 - alpha;
            dst.0[0] = (color.r as f32 * alpha + dst.0[0] as f32 * inv) as u8;
            dst.0[1] = (color.g as f32 * alpha + dst.0[1] as f32 * inv) as u8;
            dst.0[2] = (color.b as f32 * alpha + dst.0[2] as f32 * inv) as u8;
            dst.0[3] = 255;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts;
    use image::Rgba;

    #[test]
    fn test_measure_empty_is_zero() {
        // This test may fail on systems with no fonts installed
        if let Ok(typography) = fonts::load() {
            assert_eq!(measure_width(&typography.title.font, 88.0, ""), 0.0);
        }
    }

    #[test]
    fn test_draw_centered_marks_the_middle_band() {
        let Ok(typography) = fonts::load() else {
            return;
        };
        let mut canvas = RgbaImage::from_pixel(2560, 400, Rgba([0, 0, 0, 255]));
        draw_centered(&mut canvas, "Set Your Schedule", 80, &typography.title);

        let width = measure_width(&typography.title.font, 88.0, "Set Your Schedule");
        assert!(width > 0.0);

        // Some pixel in the caption band was touched
        let touched = canvas
            .enumerate_pixels()
            .any(|(_, y, p)| (80..200).contains(&y) && p.0 != [0, 0, 0, 255]);
        assert!(touched);

        // Margins left of center and right of center are symmetric, so
        // nothing lands in the far left column block
        let untouched_margin = canvas
            .enumerate_pixels()
            .filter(|(x, _, _)| *x < 100)
            .all(|(_, _, p)| p.0 == [0, 0, 0, 255]);
        assert!(untouched_margin);
    }
}
