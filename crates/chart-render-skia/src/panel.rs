// File: crates/chart-render-skia/src/panel.rs
// Summary: Paints the floating tooltip panel (value headline and change line) over a rendered frame.

use skia_safe as skia;

use chart_core::{TextAlign, Theme, TooltipContent, TooltipPlacement};

use crate::surface::{to_skia, SkiaSurface};

const PADDING: f32 = 16.0;
const HEADLINE_SIZE: f32 = 24.0;
const DETAIL_SIZE: f32 = 14.0;
const LINE_GAP: f32 = 12.0;
const CORNER: f32 = 8.0;

/// Paint the panel with its top-left corner at `placement`.
pub fn paint_tooltip(
    surface: &mut SkiaSurface,
    placement: TooltipPlacement,
    content: &TooltipContent,
    compact: bool,
    theme: &Theme,
) {
    let (canvas, text) = surface.canvas_and_text();
    let scale = if compact { 0.66 } else { 1.0 };
    let (headline, detail, pad) = (HEADLINE_SIZE * scale, DETAIL_SIZE * scale, PADDING * scale);

    let width = text.measure_width(&content.value, headline, true).max(text.measure_width(&content.change, detail, false));
    let height = headline + LINE_GAP * scale + detail;
    let rect = skia::Rect::from_xywh(placement.x, placement.y, width + pad * 2.0, height + pad * 2.0);
    let rrect = skia::RRect::new_rect_xy(rect, CORNER, CORNER);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(to_skia(theme.tooltip_background));
    canvas.draw_rrect(&rrect, &fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(to_skia(theme.tooltip_border));
    canvas.draw_rrect(&rrect, &border);

    let x = rect.left + pad;
    let y = rect.top + pad + headline;
    text.draw(canvas, &content.value, x, y, headline, to_skia(theme.tooltip_text), TextAlign::Left, true);
    text.draw(
        canvas,
        &content.change,
        x,
        y + LINE_GAP * scale + detail,
        detail,
        to_skia(theme.tooltip_muted),
        TextAlign::Left,
        false,
    );
}
