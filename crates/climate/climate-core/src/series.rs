//! Monthly series validation and calendar arithmetic.

use climate_spi::{ClimateError, Result, TimeSeriesPoint};

/// Calendar month after `(year, month)`, rolling December into January.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Check the one-point-per-month assumption.
///
/// Regression treats the sequence position as the time step, so points
/// must ascend one calendar month at a time with no gaps or duplicates.
/// The violating index and both expected and found calendar positions are
/// reported for diagnosis.
pub fn validate_contiguous(points: &[TimeSeriesPoint]) -> Result<()> {
    for (index, point) in points.iter().enumerate() {
        if point.month < 1 || point.month > 12 {
            return Err(ClimateError::InvalidParameter {
                name: "month".to_string(),
                reason: format!("point {} has month {}, expected 1-12", index, point.month),
            });
        }
    }

    for (index, pair) in points.windows(2).enumerate() {
        let (expected_year, expected_month) = next_month(pair[0].year, pair[0].month);
        if pair[1].year != expected_year || pair[1].month != expected_month {
            return Err(ClimateError::NonContiguousSeries {
                index: index + 1,
                expected_year,
                expected_month,
                found_year: pair[1].year,
                found_month: pair[1].month,
            });
        }
    }

    Ok(())
}

/// Extract the value column.
pub fn values(points: &[TimeSeriesPoint]) -> Vec<f64> {
    points.iter().map(|point| point.value).collect()
}
