// File: crates/chart-core/src/axis.rs
// Summary: Fixed value-axis model (domain, tick step, labels) and responsive chrome flags.

use crate::data::{tick_label, VALUE_MAX, VALUE_MIN};
use crate::grid::stepped_ticks;

/// Tick spacing on the value axis.
pub const VALUE_TICK_STEP: f64 = 20_000.0;

#[derive(Clone, Debug)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Axis {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// `0..=100000` every `20000`.
    pub fn value_default() -> Self {
        Self::new(VALUE_MIN, VALUE_MAX, VALUE_TICK_STEP)
    }

    pub fn ticks(&self) -> Vec<f64> {
        stepped_ticks(self.min, self.max, self.step)
    }

    pub fn tick_labels(&self) -> Vec<(f64, String)> {
        self.ticks().into_iter().map(|v| (v, tick_label(v))).collect()
    }
}

impl Default for Axis {
    fn default() -> Self { Self::value_default() }
}

/// Which pieces of value-axis chrome are visible. Compact layout hides both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisChrome {
    pub tick_labels: bool,
    pub border: bool,
}

impl AxisChrome {
    pub fn for_layout(compact: bool) -> Self {
        Self { tick_labels: !compact, border: !compact }
    }
}
