//! System font loading for caption text

use anyhow::Result;
use rusttype::Font;

use crate::config;
use crate::domain::Rgb;

/// Candidate font files, searched in order. The macOS San Francisco
/// face comes first; common Linux faces follow so the tool still runs
/// off-Mac.
const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/SFNS.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans-fonts/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
];

/// A font at a fixed pixel size with a fill color
#[derive(Clone)]
pub struct TextStyle {
    pub font: Font<'static>,
    pub px: f32,
    pub color: Rgb,
}

/// Title and subtitle styles shared by all four scenes
#[derive(Clone)]
pub struct Typography {
    pub title: TextStyle,
    pub subtitle: TextStyle,
}

/// Load the caption styles. A missing or unparseable font aborts the
/// run before any output is written.
pub fn load() -> Result<Typography> {
    let font = load_system_font()?;
    Ok(Typography {
        title: TextStyle {
            font: font.clone(),
            px: config::font::TITLE_PX,
            color: config::TEXT_WHITE,
        },
        subtitle: TextStyle {
            font,
            px: config::font::SUBTITLE_PX,
            color: config::TEXT_GRAY,
        },
    })
}

fn load_system_font() -> Result<Font<'static>> {
    for path in FONT_CANDIDATES {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        match Font::try_from_vec(bytes) {
            Some(font) => {
                log::debug!("loaded caption font from {path}");
                return Ok(font);
            }
            None => log::warn!("failed to parse font data in {path}"),
        }
    }
    anyhow::bail!(
        "no usable caption font found ({} candidate paths tried)",
        FONT_CANDIDATES.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_typography() {
        // This test may fail on systems with no fonts installed
        if let Ok(typography) = load() {
            assert_eq!(typography.title.px, 88.0);
            assert_eq!(typography.subtitle.px, 48.0);
            assert_ne!(typography.title.color, typography.subtitle.color);
        }
    }
}
