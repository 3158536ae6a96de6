// File: crates/chart-core/src/chart.rs
// Summary: Line chart over a category axis: base drawing pipeline followed by the overlay passes.

use tracing::trace;

use crate::axis::{Axis, AxisChrome};
use crate::data::DataSeries;
use crate::geometry::Point;
use crate::hover::ActivePoint;
use crate::layout::ChartLayout;
use crate::plugin::{OverlayPass, PassOutcome, RenderContext, AXIS_WIDTH};
use crate::surface::{DrawSurface, Stroke, TextAlign, TextStyle};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

pub const LINE_WIDTH: f32 = 3.0;
pub const GRID_X_WIDTH: f32 = 0.2;
pub const GRID_Y_WIDTH: f32 = 0.3;
pub const TICK_FONT_SIZE: f32 = 12.0;
pub const TICK_PADDING: f32 = 10.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Used by raster backends that allocate their own surface.
    pub width: i32,
    pub height: i32,
    /// Reduced-chrome mode for narrow viewports.
    pub compact: bool,
    pub theme: Theme,
    pub draw_labels: bool,
    /// Overrides the layout-dependent default insets.
    pub insets: Option<Insets>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            compact: false,
            theme: Theme::default(),
            draw_labels: true,
            insets: None,
        }
    }
}

impl RenderOptions {
    pub fn insets(&self) -> Insets {
        self.insets.unwrap_or(if self.compact { Insets::compact() } else { Insets::regular() })
    }
}

/// What happened during one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub drawn: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
}

impl FrameReport {
    pub fn was_drawn(&self, id: &str) -> bool { self.drawn.iter().any(|d| *d == id) }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub series: DataSeries,
    pub value_axis: Axis,
}

impl Chart {
    pub fn new(series: DataSeries) -> Self {
        Self { series, value_axis: Axis::value_default() }
    }

    pub fn layout(&self, surface_size: (f32, f32), opts: &RenderOptions) -> ChartLayout {
        ChartLayout::compute(&self.series, &self.value_axis, surface_size, opts.insets(), opts.compact)
    }

    /// Draw one full frame: background, grid, axes, labels, the series line, then
    /// each pass in `passes` order.
    pub fn render(
        &self,
        surface: &mut dyn DrawSurface,
        opts: &RenderOptions,
        hover: Option<&ActivePoint>,
        passes: &[Box<dyn OverlayPass>],
    ) -> FrameReport {
        let layout = self.layout(surface.size(), opts);
        let theme = &opts.theme;
        let chrome = AxisChrome::for_layout(opts.compact);

        surface.clear(theme.background);
        draw_grid(surface, &layout, &self.value_axis, theme);
        draw_axes(surface, &layout, chrome, theme);
        if opts.draw_labels {
            draw_tick_labels(surface, &layout, &self.series, &self.value_axis, chrome, theme);
        }
        draw_line_series(surface, &layout, theme);

        let ctx = RenderContext { layout: &layout, hover, theme };
        let mut report = FrameReport::default();
        for pass in passes {
            match pass.draw(&ctx, surface) {
                PassOutcome::Drawn => report.drawn.push(pass.id()),
                PassOutcome::Skipped => report.skipped.push(pass.id()),
            }
        }
        trace!(drawn = ?report.drawn, skipped = ?report.skipped, "frame rendered");
        report
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(surface: &mut dyn DrawSurface, layout: &ChartLayout, axis: &Axis, theme: &Theme) {
    let plot = layout.plot;
    let vertical = Stroke::solid(theme.grid_x, GRID_X_WIDTH);
    for &x in layout.categories.positions() {
        surface.line(Point::new(x, plot.top), Point::new(x, plot.bottom), &vertical);
    }
    let horizontal = Stroke::solid(theme.grid_y, GRID_Y_WIDTH);
    for v in axis.ticks() {
        let y = layout.values.to_px(v);
        surface.line(Point::new(plot.left, y), Point::new(plot.right, y), &horizontal);
    }
}

fn draw_axes(surface: &mut dyn DrawSurface, layout: &ChartLayout, chrome: AxisChrome, theme: &Theme) {
    let plot = layout.plot;
    let stroke = Stroke::solid(theme.axis_line, AXIS_WIDTH);
    surface.line(Point::new(plot.left, plot.bottom), Point::new(plot.right, plot.bottom), &stroke);
    if chrome.border {
        surface.line(Point::new(plot.left, plot.top), Point::new(plot.left, plot.bottom), &stroke);
    }
}

fn draw_tick_labels(
    surface: &mut dyn DrawSurface,
    layout: &ChartLayout,
    series: &DataSeries,
    axis: &Axis,
    chrome: AxisChrome,
    theme: &Theme,
) {
    let plot = layout.plot;
    if chrome.tick_labels {
        let style = TextStyle { size: TICK_FONT_SIZE, color: theme.tick_label, align: TextAlign::Right };
        for (v, label) in axis.tick_labels() {
            let y = layout.values.to_px(v) + TICK_FONT_SIZE * 0.35;
            surface.text(&label, Point::new(plot.left - TICK_PADDING, y), &style);
        }
    }
    let style = TextStyle { size: TICK_FONT_SIZE, color: theme.tick_label, align: TextAlign::Center };
    let baseline = plot.bottom + TICK_PADDING + TICK_FONT_SIZE;
    for (period, &x) in series.periods().zip(layout.categories.positions()) {
        surface.text(period, Point::new(x, baseline), &style);
    }
}

/// Straight segments between points, no markers.
fn draw_line_series(surface: &mut dyn DrawSurface, layout: &ChartLayout, theme: &Theme) {
    if layout.points.len() < 2 {
        return;
    }
    let stroke = Stroke::solid(theme.line_stroke, LINE_WIDTH);
    surface.polyline(&layout.points, &stroke);
}
