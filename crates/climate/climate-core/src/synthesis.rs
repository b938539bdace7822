//! Continuity-preserving forecast synthesis.
//!
//! Projects a fitted trend forward, re-applies the seasonal pattern, and
//! shifts the whole forecast by a constant so its first value meets the
//! last observed value exactly.

use climate_spi::{
    ClimateError, EngineEvent, EngineObserver, NoopObserver, Result, TimeSeriesPoint, TrendModel,
};
use serde::{Deserialize, Serialize};

use crate::decomposition::MONTHS_PER_CYCLE;
use crate::regression::fit_polynomial_trend;
use crate::seasonal::monthly_pattern;
use crate::series::{next_month, validate_contiguous, values};
use crate::trend::moving_average;

/// Seasonal-trend forecaster for monthly climate series.
///
/// The pipeline is fixed: centered moving average, polynomial fit over the
/// defined trend, seasonal pattern re-applied at each forecast step, then
/// a constant continuity adjustment. Two presets cover the shipped
/// metrics; [`SeasonalTrendForecaster::new`] builds anything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalTrendForecaster {
    horizon_months: usize,
    polynomial_degree: u32,
    moving_average_window: usize,
    recent_window_size: Option<usize>,
}

impl SeasonalTrendForecaster {
    /// Create a forecaster.
    ///
    /// The horizon must be positive, the window even and positive, and the
    /// degree 1 or 2. `recent_window_size` restricts the linear fit to the
    /// most recent defined trend points; the quadratic fit ignores it.
    pub fn new(
        horizon_months: usize,
        polynomial_degree: u32,
        moving_average_window: usize,
        recent_window_size: Option<usize>,
    ) -> Result<Self> {
        if horizon_months == 0 {
            return Err(ClimateError::InvalidParameter {
                name: "horizon_months".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if moving_average_window == 0 || moving_average_window % 2 != 0 {
            return Err(ClimateError::InvalidParameter {
                name: "moving_average_window".to_string(),
                reason: format!(
                    "must be a positive even number, got {}",
                    moving_average_window
                ),
            });
        }
        if polynomial_degree != 1 && polynomial_degree != 2 {
            return Err(ClimateError::UnsupportedDegree {
                degree: polynomial_degree,
            });
        }
        if recent_window_size == Some(0) {
            return Err(ClimateError::InvalidParameter {
                name: "recent_window_size".to_string(),
                reason: "must be positive when set".to_string(),
            });
        }

        Ok(Self {
            horizon_months,
            polynomial_degree,
            moving_average_window,
            recent_window_size,
        })
    }

    /// CO₂ preset: linear trend over the last 120 defined trend points,
    /// 36-month horizon.
    pub fn co2() -> Self {
        Self {
            horizon_months: 36,
            polynomial_degree: 1,
            moving_average_window: 12,
            recent_window_size: Some(120),
        }
    }

    /// Temperature preset: quadratic trend over the full history,
    /// 180-month horizon.
    pub fn temperature() -> Self {
        Self {
            horizon_months: 180,
            polynomial_degree: 2,
            moving_average_window: 12,
            recent_window_size: None,
        }
    }

    /// Horizon length in months.
    pub fn horizon_months(&self) -> usize {
        self.horizon_months
    }

    /// Trend polynomial degree.
    pub fn polynomial_degree(&self) -> u32 {
        self.polynomial_degree
    }

    /// Forecast `horizon_months` points past the end of `history`.
    pub fn forecast(&self, history: &[TimeSeriesPoint]) -> Result<Vec<TimeSeriesPoint>> {
        self.forecast_observed(history, &NoopObserver)
    }

    /// Forecast, reporting each pipeline step to `observer`.
    pub fn forecast_observed(
        &self,
        history: &[TimeSeriesPoint],
        observer: &dyn EngineObserver,
    ) -> Result<Vec<TimeSeriesPoint>> {
        validate_contiguous(history)?;
        let last = history.last().ok_or(ClimateError::InsufficientData {
            required: 2,
            actual: 0,
        })?;

        let series = values(history);
        let trend = moving_average(&series, self.moving_average_window)?;
        observer.record(&EngineEvent::SeriesDecomposed {
            points: series.len(),
            window: self.moving_average_window,
        });

        let model = fit_polynomial_trend(&trend, self.polynomial_degree, self.recent_window_size)?;
        observer.record(&EngineEvent::TrendFitted {
            degree: self.polynomial_degree,
            points: trend.iter().filter(|value| !value.is_nan()).count(),
        });

        let pattern = monthly_pattern(&series, &trend, MONTHS_PER_CYCLE)?;

        // Constant offset pinning the first forecast value to the last
        // observed value. Applied to every step, it cannot change the
        // projected slope or curvature.
        let n = history.len();
        let adjustment = last.value - (model.evaluate(n as f64) + pattern[n % MONTHS_PER_CYCLE]);

        let mut forecast = Vec::with_capacity(self.horizon_months);
        let mut year = last.year;
        let mut month = last.month;
        for step in 0..self.horizon_months {
            let (next_year, next_month_number) = next_month(year, month);
            year = next_year;
            month = next_month_number;

            let raw = model.evaluate((n + step) as f64) + pattern[(n + step) % MONTHS_PER_CYCLE];
            forecast.push(TimeSeriesPoint::predicted(year, month, raw + adjustment));
        }

        observer.record(&EngineEvent::ForecastSynthesized {
            horizon: self.horizon_months,
            adjustment,
        });

        Ok(forecast)
    }

    /// The history relabeled historical, followed by the forecast.
    pub fn extend(&self, history: &[TimeSeriesPoint]) -> Result<Vec<TimeSeriesPoint>> {
        self.extend_observed(history, &NoopObserver)
    }

    /// Extend, reporting each pipeline step to `observer`.
    pub fn extend_observed(
        &self,
        history: &[TimeSeriesPoint],
        observer: &dyn EngineObserver,
    ) -> Result<Vec<TimeSeriesPoint>> {
        let forecast = self.forecast_observed(history, observer)?;

        let mut combined = Vec::with_capacity(history.len() + forecast.len());
        combined.extend(
            history
                .iter()
                .map(|point| TimeSeriesPoint::historical(point.year, point.month, point.value)),
        );
        combined.extend(forecast);
        Ok(combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use climate_spi::SeriesLabel;
    use std::sync::Mutex;

    fn co2_like(start_year: i32, n: usize) -> Vec<TimeSeriesPoint> {
        (0..n)
            .map(|i| {
                let value = 315.0
                    + 0.11 * i as f64
                    + 3.0 * ((i % 12) as f64 / 12.0 * std::f64::consts::PI * 2.0).sin();
                TimeSeriesPoint::historical(start_year + (i / 12) as i32, (i % 12) as u32 + 1, value)
            })
            .collect()
    }

    #[test]
    fn test_first_forecast_value_meets_last_observation() {
        let history = co2_like(1990, 120);
        let forecaster = SeasonalTrendForecaster::co2();
        let forecast = forecaster.forecast(&history).unwrap();

        let last = history.last().unwrap();
        assert!((forecast[0].value - last.value).abs() < 1e-6);
    }

    #[test]
    fn test_forecast_calendar_continues_from_history() {
        // 119 points starting January leave the history ending in November
        let history = co2_like(1990, 119);
        let forecast = SeasonalTrendForecaster::co2().forecast(&history).unwrap();

        assert_eq!(forecast.len(), 36);
        assert_eq!((forecast[0].year, forecast[0].month), (1999, 12));
        assert_eq!((forecast[1].year, forecast[1].month), (2000, 1));
        assert!(forecast.iter().all(|p| p.label == SeriesLabel::Predicted));
    }

    #[test]
    fn test_extend_preserves_history_then_appends() {
        let history = co2_like(1990, 120);
        let combined = SeasonalTrendForecaster::co2().extend(&history).unwrap();

        assert_eq!(combined.len(), 120 + 36);
        assert!(combined[..120]
            .iter()
            .all(|p| p.label == SeriesLabel::Historical));
        assert!(combined[120..]
            .iter()
            .all(|p| p.label == SeriesLabel::Predicted));
        assert!((combined[7].value - history[7].value).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_invalid_configuration() {
        assert!(SeasonalTrendForecaster::new(0, 1, 12, None).is_err());
        assert!(SeasonalTrendForecaster::new(12, 1, 7, None).is_err());
        assert!(SeasonalTrendForecaster::new(12, 1, 12, Some(0)).is_err());
        assert!(matches!(
            SeasonalTrendForecaster::new(12, 3, 12, None),
            Err(ClimateError::UnsupportedDegree { degree: 3 })
        ));
    }

    #[test]
    fn test_rejects_gapped_history() {
        let mut history = co2_like(1990, 60);
        history.remove(30);
        let result = SeasonalTrendForecaster::co2().forecast(&history);
        assert!(matches!(
            result,
            Err(ClimateError::NonContiguousSeries { .. })
        ));
    }

    #[test]
    fn test_short_history_is_insufficient() {
        let history = co2_like(1990, 10);
        let result = SeasonalTrendForecaster::co2().forecast(&history);
        assert!(matches!(
            result,
            Err(ClimateError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_observer_sees_pipeline_steps() {
        struct Names(Mutex<Vec<&'static str>>);

        impl EngineObserver for Names {
            fn record(&self, event: &EngineEvent) {
                let name = match event {
                    EngineEvent::SeriesDecomposed { .. } => "decomposed",
                    EngineEvent::TrendFitted { .. } => "fitted",
                    EngineEvent::ForecastSynthesized { .. } => "synthesized",
                    _ => "other",
                };
                if let Ok(mut names) = self.0.lock() {
                    names.push(name);
                }
            }
        }

        let history = co2_like(1990, 120);
        let observer = Names(Mutex::new(Vec::new()));
        SeasonalTrendForecaster::co2()
            .forecast_observed(&history, &observer)
            .unwrap();

        let names = observer.0.lock().unwrap();
        assert_eq!(*names, vec!["decomposed", "fitted", "synthesized"]);
    }
}
