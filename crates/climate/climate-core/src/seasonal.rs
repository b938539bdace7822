//! Seasonal pattern estimation.
//!
//! Averages the detrended series by calendar month, then re-centers the
//! pattern so the monthly means sum to zero and carry no level.

use climate_spi::{ClimateError, Result};

/// Estimate the centered per-month pattern of length `period`.
///
/// Detrended values (`values[i] - trend[i]` wherever the trend is defined)
/// are grouped by `i % period` and averaged; a month bucket with no
/// contributing samples averages to 0. The bucket means are then shifted
/// by their own mean so the pattern sums to exactly zero.
pub fn monthly_pattern(values: &[f64], trend: &[f64], period: usize) -> Result<Vec<f64>> {
    if period == 0 {
        return Err(ClimateError::InvalidParameter {
            name: "period".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    if values.len() != trend.len() {
        return Err(ClimateError::InvalidParameter {
            name: "trend".to_string(),
            reason: format!(
                "length {} does not match series length {}",
                trend.len(),
                values.len()
            ),
        });
    }

    let mut sums = vec![0.0; period];
    let mut counts = vec![0usize; period];
    for (i, (&value, &trend_value)) in values.iter().zip(trend.iter()).enumerate() {
        if trend_value.is_nan() {
            continue;
        }
        sums[i % period] += value - trend_value;
        counts[i % period] += 1;
    }

    let mut pattern: Vec<f64> = sums
        .iter()
        .zip(counts.iter())
        .map(|(&sum, &count)| if count > 0 { sum / count as f64 } else { 0.0 })
        .collect();

    let mean = pattern.iter().sum::<f64>() / period as f64;
    for value in &mut pattern {
        *value -= mean;
    }

    Ok(pattern)
}

/// Tile the per-month pattern across a series of length `len`.
pub fn seasonal_series(pattern: &[f64], len: usize) -> Vec<f64> {
    if pattern.is_empty() {
        return vec![0.0; len];
    }
    (0..len).map(|i| pattern[i % pattern.len()]).collect()
}
