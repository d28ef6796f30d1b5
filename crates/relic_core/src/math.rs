//! Math utilities
//!
//! Re-exports glam plus integer pixel rectangles used for viewports and scissors

pub use glam::*;

/// Pixel rectangle: origin + extent, in framebuffer pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin.
    #[inline]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }
}
