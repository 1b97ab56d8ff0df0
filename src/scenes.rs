//! The four marketing screenshot recipes
//!
//! Each [`Scene`] is a fixed recipe: one source capture, an optional
//! crop, a target display width, a placement rule, caption strings, and
//! an output filename. Scenes run independently; a failure aborts the
//! run and leaves earlier outputs on disk.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{RgbImage, RgbaImage, imageops};

use crate::config::{self, layout};
use crate::domain::Rect;
use crate::fonts::Typography;
use crate::render::{background, compose, text};
use crate::sources::{SourceRole, SourceSet};

/// Vertical placement of the composited capture
#[derive(Clone, Copy, Debug)]
pub enum Placement {
    /// Fixed top edge below the captions
    Top(i64),
    /// Vertically centered with a downward bias, captions higher up
    CenteredBias(i64),
}

/// One marketing screenshot recipe
#[derive(Clone, Debug)]
pub struct Scene {
    pub role: SourceRole,
    /// Crop applied before scaling; right/bottom clamp to the capture
    pub crop: Option<Rect>,
    /// Width in canvas pixels the capture is scaled to
    pub target_width: u32,
    pub placement: Placement,
    pub corner_radius: f32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub title_y: i32,
    pub subtitle_y: i32,
    pub file_name: &'static str,
}

/// Crop for the popover capture: everything above the panel (y = 86)
/// and the artifacts left of x = 38 are window chrome, not content.
const POPOVER_CROP: Rect = Rect::new(38, 86, u32::MAX, u32::MAX);

/// All four scenes, in output order
pub fn all() -> [Scene; 4] {
    [
        Scene {
            role: SourceRole::Popover,
            crop: Some(POPOVER_CROP),
            target_width: 1200,
            placement: Placement::Top(layout::IMAGE_TOP_Y),
            corner_radius: 20.0,
            title: "Set Your Schedule",
            subtitle: "Customize reminders to fit your day",
            title_y: layout::TITLE_Y,
            subtitle_y: layout::SUBTITLE_Y,
            file_name: "01_set_your_schedule.png",
        },
        Scene {
            role: SourceRole::ActivityLog,
            crop: None,
            target_width: 1200,
            placement: Placement::Top(layout::IMAGE_TOP_Y),
            corner_radius: 20.0,
            title: "Track Your Activity",
            subtitle: "Log your movements and build healthy habits",
            title_y: layout::TITLE_Y,
            subtitle_y: layout::SUBTITLE_Y,
            file_name: "02_track_your_activity.png",
        },
        Scene {
            role: SourceRole::Banner,
            crop: None,
            target_width: 2200,
            placement: Placement::CenteredBias(layout::BANNER_Y_BIAS),
            corner_radius: 40.0,
            title: "Get Gentle Reminders",
            subtitle: "A nudge when it's time to move",
            title_y: layout::BANNER_TITLE_Y,
            subtitle_y: layout::BANNER_SUBTITLE_Y,
            file_name: "03_gentle_reminders.png",
        },
        Scene {
            role: SourceRole::BannerActions,
            crop: None,
            target_width: 2200,
            placement: Placement::CenteredBias(layout::BANNER_Y_BIAS),
            corner_radius: 40.0,
            title: "Respond Your Way",
            subtitle: "Log activity, acknowledge, or snooze",
            title_y: layout::BANNER_TITLE_Y,
            subtitle_y: layout::BANNER_SUBTITLE_Y,
            file_name: "04_respond_your_way.png",
        },
    ]
}

impl Scene {
    /// Build the finished canvas for this scene
    pub fn render(&self, sources: &SourceSet, fonts: &Typography) -> Result<RgbaImage> {
        let src = sources.load(self.role)?;
        let src = match self.crop {
            Some(rect) => crop(&src, rect),
            None => src,
        };

        let scale = self.target_width as f32 / src.width() as f32;
        let y = match self.placement {
            Placement::Top(y) => y,
            Placement::CenteredBias(bias) => {
                let scaled_h = (src.height() as f32 * scale) as i64;
                config::CANVAS_HEIGHT as i64 / 2 - scaled_h / 2 + bias
            }
        };

        let canvas = background::gradient_canvas(
            config::CANVAS_WIDTH,
            config::CANVAS_HEIGHT,
            config::GRADIENT_TOP,
            config::GRADIENT_BOTTOM,
        );
        let mut canvas = compose::compose(canvas, &src, scale, y, self.corner_radius);
        text::draw_centered(&mut canvas, self.title, self.title_y, &fonts.title);
        text::draw_centered(&mut canvas, self.subtitle, self.subtitle_y, &fonts.subtitle);
        Ok(canvas)
    }

    /// Render this scene and write it to `out_dir`, printing the
    /// per-file confirmation line.
    pub fn run(&self, sources: &SourceSet, fonts: &Typography, out_dir: &Path) -> Result<PathBuf> {
        let canvas = self.render(sources, fonts)?;
        let path = out_dir.join(self.file_name);
        save_rgb(&canvas, &path).with_context(|| format!("saving {}", path.display()))?;
        println!("Created {}", self.file_name);
        Ok(path)
    }
}

fn crop(img: &RgbaImage, rect: Rect) -> RgbaImage {
    let rect = rect.clamp(img.width(), img.height());
    imageops::crop_imm(img, rect.left, rect.top, rect.width(), rect.height()).to_image()
}

/// Encode the canvas as an 8-bit RGB PNG, dropping the alpha channel
fn save_rgb(img: &RgbaImage, path: &Path) -> Result<()> {
    let rgb = image::DynamicImage::ImageRgba8(img.clone()).to_rgb8();
    let file = std::fs::File::create(path)?;
    write_png(file, &rgb)?;
    Ok(())
}

fn write_png<W: io::Write>(w: W, image: &RgbImage) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(w, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())
}
