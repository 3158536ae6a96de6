// File: crates/chart-core/src/layout.rs
// Summary: Per-frame geometry: plot rectangle, scales and the pixel position of every data point.

use crate::axis::Axis;
use crate::data::DataSeries;
use crate::geometry::{Point, RectF};
use crate::scale::{CategoryScale, ValueScale};
use crate::types::Insets;

#[derive(Clone, Debug)]
pub struct ChartLayout {
    pub surface_width: f32,
    pub surface_height: f32,
    pub plot: RectF,
    pub compact: bool,
    pub categories: CategoryScale,
    pub values: ValueScale,
    /// Pixel coordinates of each data point, in series order.
    pub points: Vec<Point>,
}

impl ChartLayout {
    pub fn compute(
        series: &DataSeries,
        axis: &Axis,
        surface_size: (f32, f32),
        insets: Insets,
        compact: bool,
    ) -> Self {
        let (w, h) = surface_size;
        let left = insets.left as f32;
        let top = insets.top as f32;
        // Keep the plot at least one pixel wide/tall on tiny surfaces.
        let right = (w - insets.right as f32).max(left + 1.0);
        let bottom = (h - insets.bottom as f32).max(top + 1.0);
        let plot = RectF::from_ltrb(left, top, right, bottom);

        let categories = CategoryScale::new(left, right, series.len());
        let values = ValueScale::new(top, bottom, axis.min, axis.max);
        let points = series
            .points()
            .iter()
            .zip(categories.positions())
            .map(|(p, &x)| Point::new(x, values.to_px(p.value)))
            .collect();

        Self { surface_width: w, surface_height: h, plot, compact, categories, values, points }
    }

    /// Index-mode hit test: the nearest point by x across the whole vertical slice.
    /// Pointers outside the plot area, or outside the plotted x-range, hit nothing.
    pub fn hit_test(&self, pointer: Point) -> Option<usize> {
        if !self.plot.contains(pointer) {
            return None;
        }
        self.categories.nearest_index(pointer.x)
    }

    pub fn point(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }
}
