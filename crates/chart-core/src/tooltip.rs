// File: crates/chart-core/src/tooltip.rs
// Summary: Floating tooltip placement with edge avoidance, and the tooltip's text content.

use crate::data::{change_label, value_label, DataPoint};
use crate::geometry::Point;

/// Offsets used by `place_tooltip`. The two layouts use unrelated constants;
/// no formula links them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipConfig {
    /// Compact: flip left when `x + compact_overflow` exceeds the surface width.
    pub compact_overflow: f32,
    /// Compact: how far left the panel moves after a flip.
    pub compact_shift: f32,
    /// Compact: distance above the point.
    pub compact_above: f32,
    /// Compact: distance below the point when there is no room above.
    pub compact_below: f32,
    /// Regular: flip left when `x + regular_overflow` exceeds the surface width.
    pub regular_overflow: f32,
    /// Regular: how far left the panel moves after a flip.
    pub regular_shift: f32,
    /// Regular: leftward offset when not flipped.
    pub regular_offset: f32,
    /// Regular: distance above the point (always above).
    pub regular_above: f32,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            compact_overflow: 160.0,
            compact_shift: 160.0,
            compact_above: 80.0,
            compact_below: 20.0,
            regular_overflow: 120.0,
            regular_shift: 200.0,
            regular_offset: 100.0,
            regular_above: 120.0,
        }
    }
}

/// Top-left corner of the tooltip panel relative to the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipPlacement {
    pub x: f32,
    pub y: f32,
    /// The panel is informational only and never takes pointer input.
    pub pointer_events: bool,
}

/// Position the tooltip panel for a point at `point` (surface pixels).
pub fn place_tooltip(point: Point, surface_width: f32, compact: bool, cfg: &TooltipConfig) -> TooltipPlacement {
    let (x, y) = if compact {
        let x = if point.x + cfg.compact_overflow > surface_width {
            point.x - cfg.compact_shift
        } else {
            point.x
        };
        let y = if point.y - cfg.compact_above < 0.0 {
            point.y + cfg.compact_below
        } else {
            point.y - cfg.compact_above
        };
        (x, y)
    } else {
        let x = if point.x + cfg.regular_overflow > surface_width {
            point.x - cfg.regular_shift
        } else {
            point.x - cfg.regular_offset
        };
        (x, point.y - cfg.regular_above)
    };
    TooltipPlacement { x, y, pointer_events: false }
}

/// Text shown inside the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipContent {
    pub value: String,
    pub change: String,
}

impl TooltipContent {
    pub fn for_point(point: &DataPoint) -> Self {
        Self { value: value_label(point.value), change: change_label(point.percentage_change) }
    }
}
