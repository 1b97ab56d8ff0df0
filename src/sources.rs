//! Source capture discovery and role mapping
//!
//! The raw captures are macOS screenshots named
//! `Screenshot <date> at <time>.png`, so lexicographic filename order
//! matches capture order. Rather than index into a sorted listing
//! blindly, each capture gets an explicit [`SourceRole`] and the
//! resolved mapping is logged before any pixel work starts.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::RgbaImage;

/// Semantic role of each raw capture, in capture (and filename) order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceRole {
    /// Menu bar popover with the schedule controls (674x1076)
    Popover,
    /// Popover with the activity log expanded (622x1158)
    ActivityLog,
    /// Plain notification banner (720x148)
    Banner,
    /// Notification banner with action buttons (772x172)
    BannerActions,
}

impl SourceRole {
    /// All roles, in sort order
    pub const ALL: [SourceRole; 4] = [
        SourceRole::Popover,
        SourceRole::ActivityLog,
        SourceRole::Banner,
        SourceRole::BannerActions,
    ];

    /// Position of this capture in the sorted directory listing
    pub fn sort_index(self) -> usize {
        match self {
            SourceRole::Popover => 0,
            SourceRole::ActivityLog => 1,
            SourceRole::Banner => 2,
            SourceRole::BannerActions => 3,
        }
    }

    /// Human-readable name used in logs and errors
    pub fn describe(self) -> &'static str {
        match self {
            SourceRole::Popover => "menu bar popover",
            SourceRole::ActivityLog => "expanded activity log",
            SourceRole::Banner => "notification banner",
            SourceRole::BannerActions => "notification with actions",
        }
    }
}

/// Resolved mapping from roles to capture files
#[derive(Clone, Debug)]
pub struct SourceSet {
    files: Vec<PathBuf>,
}

impl SourceSet {
    /// List `Screenshot*.png` files in `dir`, sort by filename, and
    /// assign roles by position. Fails with a directory-naming error
    /// when fewer than four captures are present.
    pub fn discover(dir: &Path) -> Result<Self> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
            .with_context(|| format!("reading source directory {}", dir.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| is_capture(path))
            .collect();
        files.sort();

        if files.len() < SourceRole::ALL.len() {
            anyhow::bail!(
                "expected {} captures matching Screenshot*.png in {}, found {}",
                SourceRole::ALL.len(),
                dir.display(),
                files.len()
            );
        }

        let set = Self { files };
        for role in SourceRole::ALL {
            log::info!("{}: {}", role.describe(), set.path(role).display());
        }
        Ok(set)
    }

    /// Get the capture file resolved for a role
    pub fn path(&self, role: SourceRole) -> &Path {
        &self.files[role.sort_index()]
    }

    /// Decode the capture for a role as RGBA
    pub fn load(&self, role: SourceRole) -> Result<RgbaImage> {
        let path = self.path(role);
        let img = image::open(path)
            .with_context(|| format!("decoding {} capture {}", role.describe(), path.display()))?;
        Ok(img.to_rgba8())
    }
}

fn is_capture(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    name.starts_with("Screenshot") && name.ends_with(".png")
}
