// File: crates/chart-core/src/theme.rs
// Summary: Dashboard color palettes for the chart, overlays and tooltip panel.

use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    /// Vertical gridlines at each category.
    pub grid_x: Color,
    /// Horizontal gridlines at each value tick.
    pub grid_y: Color,
    pub axis_line: Color,
    pub tick_label: Color,
    pub line_stroke: Color,
    pub guide_line: Color,
    pub fill_lines: Color,
    pub glow: Color,
    pub marker_inner: Color,
    pub tooltip_background: Color,
    pub tooltip_border: Color,
    pub tooltip_text: Color,
    pub tooltip_muted: Color,
}

impl Theme {
    pub fn lemon() -> Self {
        Self {
            name: "lemon",
            background: Color::from_rgb(0x22, 0x23, 0x24),
            grid_x: Color::from_rgb(0x22, 0x23, 0x24),
            grid_y: Color::from_rgb(0x52, 0x52, 0x52),
            axis_line: Color::from_rgb(0x52, 0x52, 0x52),
            tick_label: Color::from_rgb(0xff, 0xff, 0xff),
            line_stroke: Color::from_rgba_hex(0xDCFF7FFD),
            guide_line: Color::from_rgba_hex(0xDCFF7FFD),
            fill_lines: Color::from_rgba_hex(0x8AA14F33),
            glow: Color::from_rgb(0xDC, 0xFF, 0x7F),
            marker_inner: Color::from_rgb(0x22, 0x23, 0x24),
            tooltip_background: Color::from_argb(235, 0x2b, 0x2c, 0x2e),
            tooltip_border: Color::from_rgb(0x52, 0x52, 0x52),
            tooltip_text: Color::from_rgb(0xff, 0xff, 0xff),
            tooltip_muted: Color::from_rgb(0x87, 0x87, 0x87),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_rgb(0x00, 0x00, 0x00),
            grid_x: Color::from_rgb(0x22, 0x22, 0x22),
            grid_y: Color::from_rgb(0x44, 0x44, 0x44),
            axis_line: Color::from_rgb(0xff, 0xff, 0xff),
            tick_label: Color::from_rgb(0xff, 0xff, 0xff),
            line_stroke: Color::from_rgb(0x00, 0xff, 0xff),
            guide_line: Color::from_rgb(0xff, 0xff, 0x00),
            fill_lines: Color::from_argb(0x55, 0x00, 0xaa, 0xff),
            glow: Color::from_rgb(0xff, 0xff, 0x00),
            marker_inner: Color::from_rgb(0x00, 0x00, 0x00),
            tooltip_background: Color::from_rgb(0x11, 0x11, 0x11),
            tooltip_border: Color::from_rgb(0xff, 0xff, 0xff),
            tooltip_text: Color::from_rgb(0xff, 0xff, 0xff),
            tooltip_muted: Color::from_rgb(0xcc, 0xcc, 0xcc),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::lemon() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::lemon(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to lemon.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::lemon()
}
