//! Headline summaries for historical series.

use climate_spi::{ClimateError, Result, SeriesSummary, TimeSeriesPoint};

/// Latest CO₂ reading and its change against the previous calendar
/// year's mean.
///
/// Fails when no point falls in the calendar year before the latest
/// reading; a change figure against nothing would be meaningless.
pub fn co2_summary(points: &[TimeSeriesPoint]) -> Result<SeriesSummary> {
    let latest = points.last().ok_or(ClimateError::InsufficientData {
        required: 1,
        actual: 0,
    })?;

    let previous_year: Vec<f64> = points
        .iter()
        .filter(|point| point.year == latest.year - 1)
        .map(|point| point.value)
        .collect();
    if previous_year.is_empty() {
        return Err(ClimateError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    let previous_mean = previous_year.iter().sum::<f64>() / previous_year.len() as f64;

    Ok(SeriesSummary {
        current: latest.value,
        change: latest.value - previous_mean,
    })
}

/// Mean of the last ten annual anomalies against the mean of the ten
/// before them.
///
/// Windows shorter than ten are used as-is; an empty prior window fails
/// rather than producing NaN.
pub fn temperature_summary(points: &[TimeSeriesPoint]) -> Result<SeriesSummary> {
    let latest = points.last().ok_or(ClimateError::InsufficientData {
        required: 11,
        actual: 0,
    })?;

    let recent_start = points.len().saturating_sub(10);
    let previous_start = points.len().saturating_sub(20);
    let recent = &points[recent_start..];
    let previous = &points[previous_start..recent_start];
    if previous.is_empty() {
        return Err(ClimateError::InsufficientData {
            required: 11,
            actual: points.len(),
        });
    }

    let recent_mean = recent.iter().map(|p| p.value).sum::<f64>() / recent.len() as f64;
    let previous_mean = previous.iter().map(|p| p.value).sum::<f64>() / previous.len() as f64;

    Ok(SeriesSummary {
        current: latest.value,
        change: recent_mean - previous_mean,
    })
}
