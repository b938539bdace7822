//! Ice-mass linear regression and derived statistics.
//!
//! Mass-anomaly records are irregularly spaced, so the fit runs over
//! decimal years rather than sequence positions, and there is no
//! decomposition step: the signal has no meaningful seasonality at this
//! resolution.

use climate_spi::{
    ClimateError, EngineEvent, EngineObserver, IceMassRecord, IceMassStats, NoopObserver, Result,
    TimeSeriesPoint,
};
use serde::{Deserialize, Serialize};

/// Threshold under which axis variance counts as degenerate.
const SINGULARITY_EPSILON: f64 = 1e-10;

/// Cumulative days before each month in a fixed 365-day year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Convert a calendar date to a decimal year over a fixed 365-day year.
///
/// January 1st maps to the year exactly. Leap days are not counted; the
/// approximation applies to the regression axis only, never to calendar
/// labels on output points.
pub fn decimal_year(year: i32, month: u32, day: u32) -> f64 {
    let month_index = month.clamp(1, 12) as usize - 1;
    let elapsed = DAYS_BEFORE_MONTH[month_index] + day.saturating_sub(1);
    year as f64 + f64::from(elapsed) / 365.0
}

/// Fitted ice-mass regression over decimal years.
///
/// The slope is the headline figure: mass change in gigatonnes per year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IceMassRegression {
    /// Mass change per year (Gt/year)
    pub slope: f64,
    /// Mass anomaly extrapolated to year zero (Gt)
    pub intercept: f64,
    /// Coefficient of determination of the fit
    pub r_squared: f64,
}

impl IceMassRegression {
    /// Fit a line to `(decimal year, mass anomaly)` by least squares.
    ///
    /// Reported uncertainties are carried through parsing but do not
    /// weight the fit.
    pub fn fit(records: &[IceMassRecord]) -> Result<Self> {
        Self::fit_observed(records, &NoopObserver)
    }

    /// Fit, reporting the result to `observer`.
    pub fn fit_observed(
        records: &[IceMassRecord],
        observer: &dyn EngineObserver,
    ) -> Result<Self> {
        if records.len() < 2 {
            return Err(ClimateError::InsufficientData {
                required: 2,
                actual: records.len(),
            });
        }

        let n = records.len() as f64;
        let points: Vec<(f64, f64)> = records
            .iter()
            .map(|record| {
                (
                    decimal_year(record.year, record.month, record.day),
                    record.mass_anomaly,
                )
            })
            .collect();

        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for &(x, y) in &points {
            numerator += (x - mean_x) * (y - mean_y);
            denominator += (x - mean_x) * (x - mean_x);
        }

        if denominator.abs() < SINGULARITY_EPSILON {
            return Err(ClimateError::DegenerateFit(
                "zero variance in decimal year".to_string(),
            ));
        }

        let slope = numerator / denominator;
        let intercept = mean_y - slope * mean_x;

        let ss_tot: f64 = points.iter().map(|&(_, y)| (y - mean_y) * (y - mean_y)).sum();
        if ss_tot < SINGULARITY_EPSILON {
            return Err(ClimateError::DegenerateFit(
                "zero variance in mass anomaly".to_string(),
            ));
        }
        let ss_res: f64 = points
            .iter()
            .map(|&(x, y)| {
                let predicted = slope * x + intercept;
                (y - predicted) * (y - predicted)
            })
            .sum();
        let r_squared = 1.0 - ss_res / ss_tot;

        observer.record(&EngineEvent::RegressionComputed { slope, r_squared });

        Ok(Self {
            slope,
            intercept,
            r_squared,
        })
    }

    /// Predicted mass anomaly at a decimal year.
    pub fn predict_at(&self, decimal_year: f64) -> f64 {
        self.slope * decimal_year + self.intercept
    }

    /// Twelve predicted points per year over `start_year..=end_year`.
    ///
    /// Month `m` sits at decimal year `year + (m - 1) / 12`.
    pub fn monthly_predictions(&self, start_year: i32, end_year: i32) -> Vec<TimeSeriesPoint> {
        let mut points = Vec::new();
        for year in start_year..=end_year {
            for month_index in 0..12u32 {
                let x = f64::from(year) + f64::from(month_index) / 12.0;
                points.push(TimeSeriesPoint::predicted(
                    year,
                    month_index + 1,
                    self.predict_at(x),
                ));
            }
        }
        points
    }
}

/// Snapshot of the record and fit for headline display.
///
/// Point predictions are taken at the start of 2030, 2040, and 2050.
pub fn compute_stats(
    records: &[IceMassRecord],
    regression: &IceMassRegression,
) -> Result<IceMassStats> {
    if records.len() < 2 {
        return Err(ClimateError::InsufficientData {
            required: 2,
            actual: records.len(),
        });
    }
    let first = &records[0];
    let last = &records[records.len() - 1];

    Ok(IceMassStats {
        first_mass: first.mass_anomaly,
        last_mass: last.mass_anomaly,
        total_loss: last.mass_anomaly - first.mass_anomaly,
        years_span: f64::from(last.year - first.year)
            + (f64::from(last.month) - f64::from(first.month)) / 12.0,
        annual_loss_rate: regression.slope,
        r_squared: regression.r_squared,
        predicted_2030: regression.predict_at(2030.0),
        predicted_2040: regression.predict_at(2040.0),
        predicted_2050: regression.predict_at(2050.0),
    })
}

/// Historical points followed by `years_ahead` years of monthly
/// predictions, starting in January of the year after the last record.
pub fn extend_with_projection(
    records: &[IceMassRecord],
    regression: &IceMassRegression,
    years_ahead: usize,
) -> Result<Vec<TimeSeriesPoint>> {
    let last = records.last().ok_or(ClimateError::InsufficientData {
        required: 1,
        actual: 0,
    })?;

    let start_year = last.year + 1;
    let end_year = start_year + years_ahead as i32 - 1;

    let mut combined: Vec<TimeSeriesPoint> = records
        .iter()
        .map(|record| TimeSeriesPoint::historical(record.year, record.month, record.mass_anomaly))
        .collect();
    combined.extend(regression.monthly_predictions(start_year, end_year));
    Ok(combined)
}
