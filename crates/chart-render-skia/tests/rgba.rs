// File: crates/chart-render-skia/tests/rgba.rs
// Purpose: Validate RGBA buffer shape, background pixels and the hovered-frame report.

use chart_core::{Chart, DataSeries, RenderOptions, Theme};
use chart_render_skia::{mount_headless, SkiaRenderer};

fn unlabeled() -> RenderOptions {
    RenderOptions { draw_labels: false, ..RenderOptions::default() } // avoid font variance
}

#[test]
fn render_rgba8_buffer() {
    let mut host = mount_headless(Chart::new(DataSeries::sample()), unlabeled()).expect("host");
    let frame = SkiaRenderer::new().render_to_rgba8(&mut host).expect("rgba render");
    assert_eq!(frame.width as usize * frame.height as usize * 4, frame.pixels.len());
    assert_eq!(frame.stride, frame.width as usize * 4);
    assert_eq!((frame.width, frame.height), (960, 449));

    // Top-left corner is outside the plot: pure background.
    let bg = Theme::default().background;
    assert_eq!(&frame.pixels[0..4], &[bg.r, bg.g, bg.b, 255]);
    assert!(frame.tooltip.is_none());
}

#[test]
fn hovered_frame_draws_marker_and_places_tooltip() {
    let mut host = mount_headless(Chart::new(DataSeries::sample()), unlabeled()).expect("host");
    host.hover_period("Jul").expect("hover");
    let p = host.layout().expect("layout").points[3];

    let frame = SkiaRenderer::new().render_to_rgba8(&mut host).expect("rgba render");
    assert!(frame.report.was_drawn("glow_on_hover"));
    let placement = frame.tooltip.expect("tooltip painted");
    assert_eq!(placement.x, p.x - 100.0);

    // Centre of the marker is the inner dot colour.
    let idx = p.y.round() as usize * frame.stride + p.x.round() as usize * 4;
    let inner = Theme::default().marker_inner;
    let px = &frame.pixels[idx..idx + 3];
    let close = |a: u8, b: u8| (a as i32 - b as i32).abs() <= 24;
    assert!(close(px[0], inner.r) && close(px[1], inner.g) && close(px[2], inner.b), "got {px:?}");
}

#[test]
fn raster_frames_come_from_the_single_live_instance() {
    let mut host = mount_headless(Chart::new(DataSeries::sample()), unlabeled()).expect("host");
    host.mount(Chart::new(DataSeries::sample()), unlabeled(), chart_core::default_passes());
    assert_eq!(host.destroyed_instances(), 1);

    let renderer = SkiaRenderer::new();
    let frame = renderer.render_to_rgba8(&mut host).expect("rgba render");
    for id in ["under_curve_fill", "extend_axes"] {
        assert_eq!(frame.report.drawn.iter().filter(|d| **d == id).count(), 1);
    }

    // The mounted stack is what draws: an empty stack draws no overlays.
    host.mount(Chart::new(DataSeries::sample()), unlabeled(), Vec::new());
    let frame = renderer.render_to_rgba8(&mut host).expect("rgba render");
    assert!(frame.report.drawn.is_empty());

    host.unmount();
    assert!(renderer.render_to_rgba8(&mut host).is_err());
}

#[test]
fn resized_surface_keeps_tooltip_on_marker() {
    let mut host = mount_headless(Chart::new(DataSeries::sample()), unlabeled()).expect("host");
    host.hover_period("Jul").expect("hover");
    host.surface_mut().expect("surface").resize(1400, 449).expect("resize");

    let frame = SkiaRenderer::new().render_to_rgba8(&mut host).expect("rgba render");
    assert_eq!(frame.width, 1400);
    let jul = host.layout().expect("layout").points[3];
    assert_eq!(frame.tooltip.map(|t| t.x), Some(jul.x - 100.0));
}
