//! Monthly series point types.

use serde::{Deserialize, Serialize};

/// Whether a point was observed or synthesized.
///
/// Every point carries this tag so consumers never have to sniff record
/// shapes to tell the historical record from the forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesLabel {
    Historical,
    Predicted,
}

/// A single point of a monthly climate series.
///
/// Points are ordered by (year, month) ascending. The index position in the
/// sequence is the implicit regression time-step, so sequences must be
/// contiguous: one point per month, no gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Calendar year
    pub year: i32,
    /// Calendar month (1-12)
    pub month: u32,
    /// Measured or predicted value, full precision
    pub value: f64,
    /// Historical observation or synthesized forecast
    pub label: SeriesLabel,
}

impl TimeSeriesPoint {
    /// Create a new point.
    pub fn new(year: i32, month: u32, value: f64, label: SeriesLabel) -> Self {
        Self {
            year,
            month,
            value,
            label,
        }
    }

    /// Create an observed point.
    pub fn historical(year: i32, month: u32, value: f64) -> Self {
        Self::new(year, month, value, SeriesLabel::Historical)
    }

    /// Create a synthesized point.
    pub fn predicted(year: i32, month: u32, value: f64) -> Self {
        Self::new(year, month, value, SeriesLabel::Predicted)
    }
}
