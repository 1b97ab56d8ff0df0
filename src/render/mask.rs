//! Rounded-corner alpha masking

use image::RgbaImage;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

/// Quarter-circle cubic bezier approximation constant: 4/3 * (sqrt(2) - 1)
const BEZIER_K: f32 = 0.552_284_8;

/// Build a rounded-rectangle path covering `(0, 0)..(w, h)`, with the
/// radius clamped so opposite corners never overlap.
fn rounded_rect_path(w: f32, h: f32, radius: f32) -> Option<tiny_skia::Path> {
    let r = radius.min(w / 2.0).min(h / 2.0);
    if r <= 0.0 {
        let mut pb = PathBuilder::new();
        pb.push_rect(tiny_skia::Rect::from_xywh(0.0, 0.0, w, h)?);
        return pb.finish();
    }
    let c = r * BEZIER_K;

    let mut pb = PathBuilder::new();
    pb.move_to(r, 0.0);
    pb.line_to(w - r, 0.0);
    pb.cubic_to(w - r + c, 0.0, w, r - c, w, r);
    pb.line_to(w, h - r);
    pb.cubic_to(w, h - r + c, w - r + c, h, w - r, h);
    pb.line_to(r, h);
    pb.cubic_to(r - c, h, 0.0, h - r + c, 0.0, h - r);
    pb.line_to(0.0, r);
    pb.cubic_to(0.0, r - c, r - c, 0.0, r, 0.0);
    pb.close();
    pb.finish()
}

/// Return a copy of `img` whose alpha channel is fully opaque inside a
/// rounded rectangle covering the whole image and transparent outside.
/// Color channels are untouched; edge pixels carry anti-aliased partial
/// alpha. Radius 0 leaves the copy fully opaque.
pub fn round_corners(img: &RgbaImage, radius: f32) -> RgbaImage {
    let (w, h) = img.dimensions();
    let mut out = img.clone();

    let Some(mut coverage) = Pixmap::new(w, h) else {
        return out;
    };
    let Some(path) = rounded_rect_path(w as f32, h as f32, radius) else {
        return out;
    };

    let mut paint = Paint::default();
    paint.set_color(tiny_skia::Color::WHITE);
    paint.anti_alias = true;
    coverage.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

    for (pixel, cov) in out.pixels_mut().zip(coverage.pixels()) {
        pixel[3] = cov.alpha();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([200, 50, 50, 255]))
    }

    #[test]
    fn test_center_opaque_corner_transparent() {
        let out = round_corners(&solid(100, 60), 20.0);
        assert_eq!(out.get_pixel(50, 30).0, [200, 50, 50, 255]);
        assert_eq!(out.get_pixel(0, 0)[3], 0);
        assert_eq!(out.get_pixel(99, 0)[3], 0);
        assert_eq!(out.get_pixel(0, 59)[3], 0);
        assert_eq!(out.get_pixel(99, 59)[3], 0);
    }

    #[test]
    fn test_color_preserved_under_transparent_corners() {
        let out = round_corners(&solid(100, 60), 20.0);
        let corner = out.get_pixel(0, 0).0;
        assert_eq!(&corner[..3], &[200, 50, 50]);
    }

    #[test]
    fn test_zero_radius_keeps_everything_opaque() {
        let out = round_corners(&solid(40, 40), 0.0);
        assert_eq!(out.get_pixel(0, 0)[3], 255);
        assert_eq!(out.get_pixel(39, 39)[3], 255);
    }

    #[test]
    fn test_edge_midpoints_opaque() {
        let out = round_corners(&solid(100, 60), 20.0);
        // Straight edges between the corner arcs stay covered
        assert!(out.get_pixel(50, 0)[3] >= 250);
        assert!(out.get_pixel(50, 59)[3] >= 250);
        assert!(out.get_pixel(0, 30)[3] >= 250);
    }
}
