// File: crates/chart-render-skia/src/surface.rs
// Summary: DrawSurface implementation over an owned Skia CPU raster, with RGBA read-back.

use anyhow::{anyhow, Result};
use skia_safe as skia;

use chart_core::{Color, DrawSurface, Point, Stroke, TextStyle};

use crate::text::TextShaper;

#[inline]
pub fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Straight RGBA bytes read back from a raster surface.
pub struct RgbaPixels {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

/// Raster surface a `ChartHost` draws onto. Resizing re-allocates the pixels.
pub struct SkiaSurface {
    raster: skia::Surface,
    text: TextShaper,
    width: i32,
    height: i32,
}

fn raster(width: i32, height: i32) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow!("failed to create raster surface {width}x{height}"))
}

impl SkiaSurface {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let (width, height) = (width.max(1), height.max(1));
        Ok(Self { raster: raster(width, height)?, text: TextShaper::new(), width, height })
    }

    pub fn resize(&mut self, width: i32, height: i32) -> Result<()> {
        let (width, height) = (width.max(1), height.max(1));
        if (width, height) != (self.width, self.height) {
            self.raster = raster(width, height)?;
            self.width = width;
            self.height = height;
        }
        Ok(())
    }

    /// Canvas and shaper together, for painting outside the `DrawSurface` calls.
    pub(crate) fn canvas_and_text(&mut self) -> (&skia::Canvas, &TextShaper) {
        (self.raster.canvas(), &self.text)
    }

    pub fn read_rgba8(&mut self) -> Result<RgbaPixels> {
        let (w, h) = (self.width, self.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.raster.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back {w}x{h} raster pixels");
        }
        Ok(RgbaPixels { pixels, width: w as u32, height: h as u32, stride })
    }
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_color(to_skia(stroke.color));
    if let Some((on, off)) = stroke.dash {
        paint.set_path_effect(skia::PathEffect::dash(&[on, off], 0.0));
    }
    paint
}

/// Canvas-style shadow: a blurred copy underneath the crisp stroke.
/// Shadow blur maps to a Gaussian sigma of half its value.
fn glow_paint(stroke: &Stroke) -> Option<skia::Paint> {
    let glow = stroke.glow?;
    let mut paint = stroke_paint(stroke);
    paint.set_color(to_skia(glow.color));
    paint.set_mask_filter(skia::MaskFilter::blur(skia::BlurStyle::Normal, glow.blur * 0.5, false));
    Some(paint)
}

impl DrawSurface for SkiaSurface {
    fn size(&self) -> (f32, f32) { (self.width as f32, self.height as f32) }

    fn clear(&mut self, color: Color) {
        self.raster.canvas().clear(to_skia(color));
    }

    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let canvas = self.raster.canvas();
        if let Some(glow) = glow_paint(stroke) {
            canvas.draw_line((from.x, from.y), (to.x, to.y), &glow);
        }
        canvas.draw_line((from.x, from.y), (to.x, to.y), &stroke_paint(stroke));
    }

    fn polyline(&mut self, points: &[Point], stroke: &Stroke) {
        let Some((first, rest)) = points.split_first() else { return };
        let mut path = skia::Path::new();
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }
        let mut paint = stroke_paint(stroke);
        paint.set_stroke_join(skia::paint::Join::Round);
        let canvas = self.raster.canvas();
        if let Some(glow) = glow_paint(stroke) {
            canvas.draw_path(&path, &glow);
        }
        canvas.draw_path(&path, &paint);
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke) {
        let canvas = self.raster.canvas();
        if let Some(glow) = glow_paint(stroke) {
            canvas.draw_circle((center.x, center.y), radius, &glow);
        }
        canvas.draw_circle((center.x, center.y), radius, &stroke_paint(stroke));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia(color));
        self.raster.canvas().draw_circle((center.x, center.y), radius, &paint);
    }

    fn text(&mut self, text: &str, at: Point, style: &TextStyle) {
        let (canvas, shaper) = self.canvas_and_text();
        shaper.draw(canvas, text, at.x, at.y, style.size, to_skia(style.color), style.align, false);
    }
}
