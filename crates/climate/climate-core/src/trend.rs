//! Trend extraction via centered moving average.
//!
//! A 12-month centered window removes both noise and the annual cycle from
//! a monthly series without phase-shifting the underlying trend.

use climate_spi::{ClimateError, Result};

/// Compute the centered moving average of `values` over an even `window`.
///
/// `trend[i]` averages the half-open window `values[i - window/2 ..
/// i + window/2]`. Positions within half a window of either edge hold
/// `f64::NAN`: the trend is undefined there, never extrapolated.
pub fn moving_average(values: &[f64], window: usize) -> Result<Vec<f64>> {
    if window == 0 || window % 2 != 0 {
        return Err(ClimateError::InvalidParameter {
            name: "window".to_string(),
            reason: format!("must be a positive even number, got {}", window),
        });
    }

    let half = window / 2;
    let n = values.len();
    let mut trend = Vec::with_capacity(n);

    for i in 0..n {
        if i < half || i + half >= n {
            trend.push(f64::NAN);
        } else {
            let sum: f64 = values[i - half..i + half].iter().sum();
            trend.push(sum / window as f64);
        }
    }

    Ok(trend)
}
