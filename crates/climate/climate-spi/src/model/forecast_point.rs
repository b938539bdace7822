//! Forecast point with optional uncertainty bounds.

use serde::{Deserialize, Serialize};

use super::series_point::{SeriesLabel, TimeSeriesPoint};

/// A series point with optional uncertainty bounds.
///
/// The bounds are present for ensemble-derived forecasts (5th/95th
/// percentile) and absent for pure trend+seasonal extrapolations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Calendar year
    pub year: i32,
    /// Calendar month (1-12); annual points carry month 1
    pub month: u32,
    /// Point value (ensemble median for banded points)
    pub value: f64,
    /// Lower bound (5th percentile), if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    /// Upper bound (95th percentile), if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    /// Historical observation or synthesized forecast
    pub label: SeriesLabel,
}

impl ForecastPoint {
    /// Create a predicted point with uncertainty bounds.
    pub fn banded(year: i32, month: u32, value: f64, low: f64, high: f64) -> Self {
        Self {
            year,
            month,
            value,
            low: Some(low),
            high: Some(high),
            label: SeriesLabel::Predicted,
        }
    }
}

impl From<TimeSeriesPoint> for ForecastPoint {
    fn from(point: TimeSeriesPoint) -> Self {
        Self {
            year: point.year,
            month: point.month,
            value: point.value,
            low: None,
            high: None,
            label: point.label,
        }
    }
}
