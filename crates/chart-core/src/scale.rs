// File: crates/chart-core/src/scale.rs
// Summary: Category (X) and value (Y) scale transforms between data space and surface pixels.

use crate::grid::category_positions;

/// Horizontal category scale: `count` evenly spaced slots spanning `[left_px, right_px]`.
/// The first category sits on the left edge and the last on the right edge.
#[derive(Clone, Debug)]
pub struct CategoryScale {
    positions: Vec<f32>,
}

impl CategoryScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { positions: category_positions(left_px, right_px, count) }
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> Option<f32> {
        self.positions.get(index).copied()
    }

    pub fn positions(&self) -> &[f32] { &self.positions }

    /// Index whose slot is closest to `px`, or `None` when `px` lies outside the
    /// plotted range. Ties go to the lower index.
    pub fn nearest_index(&self, px: f32) -> Option<usize> {
        let first = *self.positions.first()?;
        let last = *self.positions.last()?;
        if px < first || px > last {
            return None;
        }
        let mut best = 0usize;
        let mut best_d = f32::INFINITY;
        for (i, &x) in self.positions.iter().enumerate() {
            let d = (x - px).abs();
            if d < best_d {
                best_d = d;
                best = i;
            }
        }
        Some(best)
    }
}

/// Vertical value scale mapping a fixed data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}
