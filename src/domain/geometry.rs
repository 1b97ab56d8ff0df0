//! Geometric types for source crop regions

/// Pixel-space rectangle; left/top inclusive, right/bottom exclusive
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Rect {
    /// Create a new rectangle from edge coordinates
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Get the width of the rectangle
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Get the height of the rectangle
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Clamp all edges to an image extent. A recipe can use `u32::MAX`
    /// for right/bottom to mean "to the full width/height".
    pub fn clamp(self, max_w: u32, max_h: u32) -> Rect {
        Rect {
            left: self.left.min(max_w),
            top: self.top.min(max_h),
            right: self.right.min(max_w),
            bottom: self.bottom.min(max_h),
        }
    }
}
