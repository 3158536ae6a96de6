// File: crates/chart-core/src/surface.rs
// Summary: Renderer-agnostic drawing surface trait plus an in-memory recording implementation.

use crate::geometry::Point;
use crate::types::Color;

/// Soft halo drawn around a stroke (canvas-style shadow blur, in pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Color,
    pub blur: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    /// `(on, off)` dash lengths; solid when `None`.
    pub dash: Option<(f32, f32)>,
    pub glow: Option<Glow>,
}

impl Stroke {
    pub const fn solid(color: Color, width: f32) -> Self {
        Self { color, width, dash: None, glow: None }
    }

    pub const fn dashed(self, on: f32, off: f32) -> Self {
        Self { dash: Some((on, off)), ..self }
    }

    pub const fn glowing(self, color: Color, blur: f32) -> Self {
        Self { glow: Some(Glow { color, blur }), ..self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub align: TextAlign,
}

/// Canvas-like target the chart and its overlays draw onto.
///
/// Coordinates are surface pixels with the origin top-left. Text is anchored at
/// its baseline.
pub trait DrawSurface {
    fn size(&self) -> (f32, f32);
    fn clear(&mut self, color: Color);
    fn line(&mut self, from: Point, to: Point, stroke: &Stroke);
    fn polyline(&mut self, points: &[Point], stroke: &Stroke);
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke);
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
    fn text(&mut self, text: &str, at: Point, style: &TextStyle);
}

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Color),
    Line { from: Point, to: Point, stroke: Stroke },
    Polyline { points: Vec<Point>, stroke: Stroke },
    StrokeCircle { center: Point, radius: f32, stroke: Stroke },
    FillCircle { center: Point, radius: f32, color: Color },
    Text { text: String, at: Point, style: TextStyle },
}

/// Surface that records every call instead of rasterizing.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, ops: Vec::new() }
    }

    pub fn ops(&self) -> &[DrawOp] { &self.ops }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Lines drawn with the given color.
    pub fn lines_with_color(&self, color: Color) -> impl Iterator<Item = (Point, Point, &Stroke)> {
        self.ops.iter().filter_map(move |op| match op {
            DrawOp::Line { from, to, stroke } if stroke.color == color => Some((*from, *to, stroke)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (f32, f32) { (self.width, self.height) }

    fn clear(&mut self, color: Color) {
        // A clear discards everything underneath it.
        self.ops.clear();
        self.ops.push(DrawOp::Clear(color));
    }

    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.ops.push(DrawOp::Line { from, to, stroke: *stroke });
    }

    fn polyline(&mut self, points: &[Point], stroke: &Stroke) {
        self.ops.push(DrawOp::Polyline { points: points.to_vec(), stroke: *stroke });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke) {
        self.ops.push(DrawOp::StrokeCircle { center, radius, stroke: *stroke });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.ops.push(DrawOp::FillCircle { center, radius, color });
    }

    fn text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.ops.push(DrawOp::Text { text: text.to_string(), at, style: *style });
    }
}
