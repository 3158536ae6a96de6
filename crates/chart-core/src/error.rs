// File: crates/chart-core/src/error.rs
// Summary: Error types for series validation and chart hosting.

use thiserror::Error;

/// Rejections raised while validating a caller-supplied series.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SeriesError {
    #[error("series is empty")]
    Empty,
    #[error("duplicate period label `{0}`")]
    DuplicatePeriod(String),
    #[error("value {value} for period `{period}` is outside [{min}, {max}]")]
    OutOfRange { period: String, value: f64, min: f64, max: f64 },
    #[error("non-finite field in period `{0}`")]
    NonFinite(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("no drawing surface attached")]
    NoSurface,
    #[error("no chart instance mounted")]
    NoInstance,
}
