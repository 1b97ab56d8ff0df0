//! Layout constants and run configuration

use std::path::PathBuf;

use anyhow::Context;

use crate::domain::Rgb;

/// App Store Mac screenshot width (Retina)
pub const CANVAS_WIDTH: u32 = 2560;
/// App Store Mac screenshot height (Retina)
pub const CANVAS_HEIGHT: u32 = 1600;

/// Gradient color at the top scanline
pub const GRADIENT_TOP: Rgb = Rgb::new(30, 30, 40);
/// Gradient color at the bottom scanline
pub const GRADIENT_BOTTOM: Rgb = Rgb::new(15, 15, 25);
/// Title caption color
pub const TEXT_WHITE: Rgb = Rgb::new(255, 255, 255);
/// Subtitle caption color
pub const TEXT_GRAY: Rgb = Rgb::new(180, 180, 190);

/// Vertical layout constants
pub mod layout {
    /// Title offset for the tall popover scenes
    pub const TITLE_Y: i32 = 80;
    /// Subtitle offset for the tall popover scenes
    pub const SUBTITLE_Y: i32 = 190;
    /// Top edge of the composited capture in the popover scenes
    pub const IMAGE_TOP_Y: i64 = 310;
    /// Banner scenes sit this far below vertical center
    pub const BANNER_Y_BIAS: i64 = 80;
    /// Title offset for the wide banner scenes
    pub const BANNER_TITLE_Y: i32 = 200;
    /// Subtitle offset for the wide banner scenes
    pub const BANNER_SUBTITLE_Y: i32 = 310;
}

/// Drop shadow constants
pub mod shadow {
    /// Gaussian blur sigma applied to the shadow rectangle
    pub const BLUR_SIGMA: f32 = 35.0;
    /// Shadow alpha before blurring (out of 255)
    pub const OPACITY: u8 = 100;
    /// Diagonal down-right offset of the shadow in pixels
    pub const OFFSET: i64 = 12;
    /// Padding around the shadow rectangle so the blur can bleed
    pub const MARGIN: u32 = 40;
}

/// Caption font sizes
pub mod font {
    /// Title size in pixels
    pub const TITLE_PX: f32 = 88.0;
    /// Subtitle size in pixels
    pub const SUBTITLE_PX: f32 = 48.0;
}

/// Source and output directories for a run
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory holding the raw `Screenshot*.png` captures
    pub source_dir: PathBuf,
    /// Directory the finished marketing screenshots are written to
    pub output_dir: PathBuf,
}

impl Config {
    /// Resolve directories from the environment. `MOVE_NOW_SRC` and
    /// `MOVE_NOW_OUT` override the defaults of `~/Desktop/move-now`
    /// and `<source>/app-store`.
    pub fn from_env() -> anyhow::Result<Self> {
        let source_dir = match std::env::var_os("MOVE_NOW_SRC") {
            Some(path) => PathBuf::from(path),
            None => dirs::home_dir()
                .context("could not determine home directory")?
                .join("Desktop")
                .join("move-now"),
        };
        let output_dir = match std::env::var_os("MOVE_NOW_OUT") {
            Some(path) => PathBuf::from(path),
            None => source_dir.join("app-store"),
        };
        Ok(Self {
            source_dir,
            output_dir,
        })
    }
}
