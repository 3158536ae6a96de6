// File: crates/chart-core/src/data.rs
// Summary: Time-bucketed data points, the validated series wrapper, and display labels.

use std::collections::HashSet;

use crate::error::SeriesError;

/// Lower bound of the fixed value domain.
pub const VALUE_MIN: f64 = 0.0;
/// Upper bound of the fixed value domain.
pub const VALUE_MAX: f64 = 100_000.0;

/// One bucket of the series. Immutable for the lifetime of a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub period: String,
    pub value: f64,
    pub target: f64,
    /// Precomputed delta, displayed verbatim.
    pub percentage_change: f64,
}

impl DataPoint {
    pub fn new(period: impl Into<String>, value: f64, target: f64, percentage_change: f64) -> Self {
        Self { period: period.into(), value, target, percentage_change }
    }
}

/// Ordered, non-empty sequence of points with unique period labels.
///
/// The period labels define the horizontal (category) domain; array position is
/// the only identity a point has.
#[derive(Clone, Debug, PartialEq)]
pub struct DataSeries {
    points: Vec<DataPoint>,
}

impl DataSeries {
    /// Validate and wrap caller data. Loaders use this; the renderer itself
    /// assumes a well-formed series.
    pub fn new(points: Vec<DataPoint>) -> Result<Self, SeriesError> {
        if points.is_empty() {
            return Err(SeriesError::Empty);
        }
        let mut seen = HashSet::with_capacity(points.len());
        for p in &points {
            if !p.value.is_finite() || !p.target.is_finite() || !p.percentage_change.is_finite() {
                return Err(SeriesError::NonFinite(p.period.clone()));
            }
            if p.value < VALUE_MIN || p.value > VALUE_MAX {
                return Err(SeriesError::OutOfRange {
                    period: p.period.clone(),
                    value: p.value,
                    min: VALUE_MIN,
                    max: VALUE_MAX,
                });
            }
            if !seen.insert(p.period.as_str()) {
                return Err(SeriesError::DuplicatePeriod(p.period.clone()));
            }
        }
        Ok(Self { points })
    }

    /// The built-in seven-month sample (Apr..Oct).
    pub fn sample() -> Self {
        let rows = [
            ("Apr", 32_000.0, 30_000.0, 6.7),
            ("May", 45_000.0, 42_000.0, 7.1),
            ("Jun", 42_000.0, 40_000.0, 5.0),
            ("Jul", 89_600.0, 85_000.0, 5.4),
            ("Aug", 55_000.0, 52_000.0, 5.8),
            ("Sep", 38_000.0, 36_000.0, 5.6),
            ("Oct", 62_000.0, 58_000.0, 6.9),
        ];
        Self {
            points: rows
                .iter()
                .map(|&(period, value, target, change)| DataPoint::new(period, value, target, change))
                .collect(),
        }
    }

    pub fn points(&self) -> &[DataPoint] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    /// Always false for a constructed series; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn get(&self, index: usize) -> Option<&DataPoint> { self.points.get(index) }

    pub fn index_of(&self, period: &str) -> Option<usize> {
        self.points.iter().position(|p| p.period == period)
    }

    pub fn periods(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|p| p.period.as_str())
    }
}

/// Tooltip headline: thousands with one decimal, e.g. `89600 -> "$89.6k"`.
pub fn value_label(value: f64) -> String {
    format!("${:.1}k", value / 1000.0)
}

/// Value-axis tick label, e.g. `20000 -> "$20K"`.
pub fn tick_label(value: f64) -> String {
    format!("${}K", value / 1000.0)
}

/// Tooltip sub-line; the percentage is printed as stored.
pub fn change_label(percentage_change: f64) -> String {
    format!("{}% above target", percentage_change)
}

