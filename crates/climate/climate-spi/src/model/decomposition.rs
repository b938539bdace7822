//! Decomposed series model

use serde::{Deserialize, Serialize};

/// Result of additive time series decomposition.
///
/// All three components have the same length as the input. Positions within
/// half a window of either edge hold `f64::NAN` in `trend` and `residual`:
/// undefined for insufficient window, never zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecomposedSeries {
    /// Smoothed long-run level (moving average)
    pub trend: Vec<f64>,
    /// Tiled per-calendar-month pattern, centered to sum to zero
    pub seasonal: Vec<f64>,
    /// What remains after trend and seasonal are removed
    pub residual: Vec<f64>,
}

impl DecomposedSeries {
    /// Length of the decomposed series.
    pub fn len(&self) -> usize {
        self.trend.len()
    }

    /// Whether the decomposition is empty.
    pub fn is_empty(&self) -> bool {
        self.trend.is_empty()
    }
}
