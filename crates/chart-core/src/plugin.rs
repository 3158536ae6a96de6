// File: crates/chart-core/src/plugin.rs
// Summary: Overlay draw passes layered on the base line chart, with a shared per-frame context.

use crate::geometry::Point;
use crate::hover::ActivePoint;
use crate::layout::ChartLayout;
use crate::surface::{DrawSurface, Stroke};
use crate::theme::Theme;

/// Spacing between under-curve fill lines, in pixels.
pub const FILL_LINE_SPACING: f32 = 25.0;
pub const MIN_FILL_LINE_SPACING: f32 = 1.0;
pub const FILL_LINE_WIDTH: f32 = 2.0;
/// The hover guide starts this far below the hovered point.
pub const GUIDE_GAP: f32 = 10.0;
pub const GUIDE_WIDTH: f32 = 2.5;
pub const GUIDE_DASH: (f32, f32) = (5.0, 5.0);
pub const MARKER_RADIUS: f32 = 3.0;
pub const MARKER_RING_WIDTH: f32 = 3.0;
pub const MARKER_GLOW_BLUR: f32 = 25.0;
/// Vertical axis extends this far above the plot top.
pub const AXIS_CAP_TOP: f32 = 20.0;
/// Horizontal axis extends this far past the plot right edge.
pub const AXIS_CAP_RIGHT: f32 = 8.0;
pub const AXIS_WIDTH: f32 = 1.5;

/// Everything a pass may read for one frame. Built fresh from the coordinator
/// each frame, so passes never observe stale hover state.
pub struct RenderContext<'a> {
    pub layout: &'a ChartLayout,
    pub hover: Option<&'a ActivePoint>,
    pub theme: &'a Theme,
}

impl RenderContext<'_> {
    /// Current pixel position of the hovered point, taken from this frame's layout.
    pub fn hovered_position(&self) -> Option<Point> {
        let active = self.hover?;
        self.layout.point(active.index).or(Some(active.position))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassOutcome {
    Drawn,
    Skipped,
}

/// A draw stage invoked after the base series, in registration order.
pub trait OverlayPass {
    fn id(&self) -> &'static str;
    fn draw(&self, ctx: &RenderContext<'_>, surface: &mut dyn DrawSurface) -> PassOutcome;
}

pub type OverlayStack = Vec<Box<dyn OverlayPass>>;

/// The four dashboard passes in their fixed order.
pub fn default_passes() -> OverlayStack {
    vec![
        Box::new(HoverGuideLine),
        Box::new(UnderCurveFill::default()),
        Box::new(HoverGlow),
        Box::new(AxisCaps),
    ]
}

/// Linear interpolation of y at `x` on the segment `p1 -> p2`.
/// `None` when the segment has no x-span or `x` falls outside it.
pub fn interpolate_y(p1: Point, p2: Point, x: f32) -> Option<f32> {
    let span = p2.x - p1.x;
    if span == 0.0 || x < p1.x || x > p2.x {
        return None;
    }
    let t = (x - p1.x) / span;
    Some(p1.y + t * (p2.y - p1.y))
}

/// Interpolated curve height at `x`, from the first segment whose x-range contains it.
pub fn curve_y_at(points: &[Point], x: f32) -> Option<f32> {
    points.windows(2).find_map(|w| interpolate_y(w[0], w[1], x))
}

/// Dashed vertical line from just below the hovered point to the plot bottom.
pub struct HoverGuideLine;

impl OverlayPass for HoverGuideLine {
    fn id(&self) -> &'static str { "hover_line" }

    fn draw(&self, ctx: &RenderContext<'_>, surface: &mut dyn DrawSurface) -> PassOutcome {
        let Some(p) = ctx.hovered_position() else { return PassOutcome::Skipped };
        let stroke = Stroke::solid(ctx.theme.guide_line, GUIDE_WIDTH).dashed(GUIDE_DASH.0, GUIDE_DASH.1);
        surface.line(
            Point::new(p.x, p.y + GUIDE_GAP),
            Point::new(p.x, ctx.layout.plot.bottom),
            &stroke,
        );
        PassOutcome::Drawn
    }
}

/// Fixed-spacing sweep of vertical lines from the plot bottom up to the curve.
pub struct UnderCurveFill {
    pub spacing: f32,
}

impl Default for UnderCurveFill {
    fn default() -> Self { Self { spacing: FILL_LINE_SPACING } }
}

impl UnderCurveFill {
    /// Sweep positions and the curve height at each; columns with no segment are omitted.
    /// Spacing below `MIN_FILL_LINE_SPACING` is raised to it.
    pub fn columns(&self, layout: &ChartLayout) -> Vec<(f32, f32)> {
        let points = &layout.points;
        if points.len() < 2 || !(self.spacing > 0.0) {
            return Vec::new();
        }
        let plot = layout.plot;
        let spacing = self.spacing.max(MIN_FILL_LINE_SPACING);
        let steps = ((plot.right - plot.left) / spacing).floor().max(0.0) as u32;
        // Multiply instead of accumulating to keep positions exact.
        (0..=steps)
            .map(|k| plot.left + spacing * k as f32)
            .filter(|&x| x <= plot.right)
            .filter_map(|x| curve_y_at(points, x).map(|y| (x, y)))
            .collect()
    }
}

impl OverlayPass for UnderCurveFill {
    fn id(&self) -> &'static str { "under_curve_fill" }

    fn draw(&self, ctx: &RenderContext<'_>, surface: &mut dyn DrawSurface) -> PassOutcome {
        let columns = self.columns(ctx.layout);
        if columns.is_empty() {
            return PassOutcome::Skipped;
        }
        let stroke = Stroke::solid(ctx.theme.fill_lines, FILL_LINE_WIDTH);
        let bottom = ctx.layout.plot.bottom;
        for (x, y) in columns {
            surface.line(Point::new(x, bottom), Point::new(x, y), &stroke);
        }
        PassOutcome::Drawn
    }
}

/// Two-layer marker: a glowing ring, then a solid unblurred dot on top.
pub struct HoverGlow;

impl OverlayPass for HoverGlow {
    fn id(&self) -> &'static str { "glow_on_hover" }

    fn draw(&self, ctx: &RenderContext<'_>, surface: &mut dyn DrawSurface) -> PassOutcome {
        let Some(p) = ctx.hovered_position() else { return PassOutcome::Skipped };
        let ring = Stroke::solid(ctx.theme.glow, MARKER_RING_WIDTH).glowing(ctx.theme.glow, MARKER_GLOW_BLUR);
        surface.stroke_circle(p, MARKER_RADIUS + MARKER_RING_WIDTH / 2.0, &ring);
        surface.fill_circle(p, MARKER_RADIUS, ctx.theme.marker_inner);
        PassOutcome::Drawn
    }
}

/// Extends both axis lines past the tick area.
pub struct AxisCaps;

impl OverlayPass for AxisCaps {
    fn id(&self) -> &'static str { "extend_axes" }

    fn draw(&self, ctx: &RenderContext<'_>, surface: &mut dyn DrawSurface) -> PassOutcome {
        let plot = ctx.layout.plot;
        let stroke = Stroke::solid(ctx.theme.axis_line, AXIS_WIDTH);
        surface.line(
            Point::new(plot.left, plot.bottom),
            Point::new(plot.left, plot.top - AXIS_CAP_TOP),
            &stroke,
        );
        surface.line(
            Point::new(plot.left, plot.bottom),
            Point::new(plot.right + AXIS_CAP_RIGHT, plot.bottom),
            &stroke,
        );
        PassOutcome::Drawn
    }
}
