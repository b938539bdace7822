//! Classical additive decomposition of monthly series.

use climate_spi::{ClimateError, DecomposedSeries, Result, SeriesDecomposer};

use crate::seasonal::{monthly_pattern, seasonal_series};
use crate::trend::moving_average;

/// Default moving-average window for monthly series.
pub const DEFAULT_WINDOW: usize = 12;

/// Months per seasonal cycle.
pub const MONTHS_PER_CYCLE: usize = 12;

/// Decompose `values` into trend + seasonal + residual components.
///
/// Wherever the trend is defined the three components sum back to the
/// input exactly (within floating round-off); residual positions under an
/// undefined trend are NaN.
pub fn decompose(values: &[f64], window: usize, period: usize) -> Result<DecomposedSeries> {
    let trend = moving_average(values, window)?;
    let pattern = monthly_pattern(values, &trend, period)?;
    let seasonal = seasonal_series(&pattern, values.len());

    let residual = values
        .iter()
        .zip(trend.iter().zip(seasonal.iter()))
        .map(|(&value, (&trend_value, &seasonal_value))| {
            if trend_value.is_nan() {
                f64::NAN
            } else {
                value - trend_value - seasonal_value
            }
        })
        .collect();

    Ok(DecomposedSeries {
        trend,
        seasonal,
        residual,
    })
}

/// Additive decomposer over a fixed window and period.
#[derive(Debug, Clone)]
pub struct AdditiveDecomposer {
    window: usize,
    period: usize,
}

impl AdditiveDecomposer {
    /// Create a decomposer; the window must be even and positive.
    pub fn new(window: usize, period: usize) -> Result<Self> {
        if window == 0 || window % 2 != 0 {
            return Err(ClimateError::InvalidParameter {
                name: "window".to_string(),
                reason: format!("must be a positive even number, got {}", window),
            });
        }
        if period == 0 {
            return Err(ClimateError::InvalidParameter {
                name: "period".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        Ok(Self { window, period })
    }

    /// Monthly decomposer: 12-month window, 12-month cycle.
    pub fn monthly() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            period: MONTHS_PER_CYCLE,
        }
    }
}

impl Default for AdditiveDecomposer {
    fn default() -> Self {
        Self::monthly()
    }
}

impl SeriesDecomposer for AdditiveDecomposer {
    fn decompose(&self, values: &[f64]) -> Result<DecomposedSeries> {
        decompose(values, self.window, self.period)
    }
}
