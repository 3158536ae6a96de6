// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, colors, paddings).

/// Default surface width in pixels.
pub const WIDTH: i32 = 960;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 449;

/// Viewport widths below this are treated as compact layout.
pub const COMPACT_BREAKPOINT_PX: f32 = 768.0;

/// Host breakpoint signal: true when the viewport is narrower than the compact breakpoint.
pub fn is_compact(viewport_width: f32) -> bool {
    viewport_width < COMPACT_BREAKPOINT_PX
}

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Regular layout: room for `$100K` tick labels on the left and the axis caps.
    pub const fn regular() -> Self { Self::new(64, 16, 32, 36) }

    /// Compact layout: value tick labels are hidden, so the left gutter shrinks.
    pub const fn compact() -> Self { Self::new(12, 16, 32, 36) }
}

impl Default for Insets {
    fn default() -> Self {
        Self::regular()
    }
}

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// CSS-style `0xRRGGBBAA`.
    pub const fn from_rgba_hex(v: u32) -> Self {
        Self {
            r: (v >> 24) as u8,
            g: (v >> 16) as u8,
            b: (v >> 8) as u8,
            a: v as u8,
        }
    }
}
