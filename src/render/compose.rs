//! Scale-and-place compositing

use image::{RgbaImage, imageops, imageops::FilterType};

use super::{mask, shadow};
use crate::config;

/// Scale `src` by `scale`, round its corners, and paste it horizontally
/// centered with its top edge at `y`, drawing a drop shadow underneath
/// first. Returns the updated canvas.
pub fn compose(
    mut canvas: RgbaImage,
    src: &RgbaImage,
    scale: f32,
    y: i64,
    corner_radius: f32,
) -> RgbaImage {
    let new_w = (src.width() as f32 * scale) as u32;
    let new_h = (src.height() as f32 * scale) as u32;
    let scaled = imageops::resize(src, new_w, new_h, FilterType::Lanczos3);
    let rounded = mask::round_corners(&scaled, corner_radius);

    let x = (config::CANVAS_WIDTH as i64 - new_w as i64) / 2;
    log::debug!("compositing {new_w}x{new_h} at ({x}, {y})");

    shadow::draw_shadow(&mut canvas, (new_w, new_h), (x, y));
    imageops::overlay(&mut canvas, &rounded, x, y);
    canvas
}
