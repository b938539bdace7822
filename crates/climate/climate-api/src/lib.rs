//! Climate Forecasting Consumer API
//!
//! Consumer configurations for the forecasting engine.
//!
//! This crate provides:
//! - Configuration types whose defaults match the shipped presets
//! - Validated builders from configuration to engine types
//! - Re-exports from SPI and core for convenience

// Re-export from core
pub use climate_core::{
    decomposition, ensemble, ice, regression, seasonal, series, summary, synthesis, trend,
    AdditiveDecomposer, IceMassRegression, LinearModel, NearestRankAggregator, PolynomialModel,
    QuadraticModel, SeasonalTrendForecaster,
};

// Re-export traits and models from SPI
pub use climate_spi::{
    ClimateError, DecomposedSeries, EngineEvent, EngineObserver, EnsembleMatrix, EnsembleReducer,
    ForecastPoint, IceMassRecord, IceMassStats, NoopObserver, Result, SeriesDecomposer,
    SeriesLabel, SeriesSummary, TimeSeriesPoint, TrendModel,
};

use serde::{Deserialize, Serialize};

/// Configuration for seasonal-trend forecasting
///
/// The default matches the CO₂ preset. Validation happens in
/// [`ForecastConfig::build`], not at construction, so configurations can
/// round-trip through serialization untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Months to project past the end of the history
    pub horizon_months: usize,
    /// Trend polynomial degree (1 or 2)
    pub polynomial_degree: u32,
    /// Centered moving-average window (even, positive)
    pub moving_average_window: usize,
    /// Restrict the linear fit to this many recent trend points
    pub recent_window_size: Option<usize>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon_months: 36,
            polynomial_degree: 1,
            moving_average_window: 12,
            recent_window_size: Some(120),
        }
    }
}

impl ForecastConfig {
    /// CO₂ preset: 36-month horizon, linear fit over the last 120 trend
    /// points.
    pub fn co2() -> Self {
        Self::default()
    }

    /// Temperature preset: 180-month horizon, quadratic fit over the full
    /// history.
    pub fn temperature() -> Self {
        Self {
            horizon_months: 180,
            polynomial_degree: 2,
            moving_average_window: 12,
            recent_window_size: None,
        }
    }

    /// Validate the configuration and build the forecaster.
    pub fn build(&self) -> Result<SeasonalTrendForecaster> {
        SeasonalTrendForecaster::new(
            self.horizon_months,
            self.polynomial_degree,
            self.moving_average_window,
            self.recent_window_size,
        )
    }
}

/// Configuration for ice-mass projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IceProjectionConfig {
    /// Whole years of monthly predictions past the last record
    pub years_ahead: usize,
}

impl Default for IceProjectionConfig {
    fn default() -> Self {
        Self { years_ahead: 15 }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ForecastConfig, IceProjectionConfig};
    pub use climate_core::{
        AdditiveDecomposer, IceMassRegression, LinearModel, NearestRankAggregator,
        PolynomialModel, QuadraticModel, SeasonalTrendForecaster,
    };
    pub use climate_spi::{
        ClimateError, DecomposedSeries, EngineEvent, EngineObserver, EnsembleMatrix,
        EnsembleReducer, ForecastPoint, IceMassRecord, IceMassStats, NoopObserver, Result,
        SeriesDecomposer, SeriesLabel, SeriesSummary, TimeSeriesPoint, TrendModel,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_co2_preset() {
        let config = ForecastConfig::default();
        assert_eq!(config.horizon_months, 36);
        assert_eq!(config.polynomial_degree, 1);
        assert_eq!(config.recent_window_size, Some(120));
        assert!(config.build().is_ok());
    }

    #[test]
    fn test_temperature_preset_builds() {
        let config = ForecastConfig::temperature();
        assert_eq!(config.horizon_months, 180);
        assert_eq!(config.polynomial_degree, 2);
        assert_eq!(config.recent_window_size, None);
        assert!(config.build().is_ok());
    }

    #[test]
    fn test_build_rejects_invalid_degree() {
        let config = ForecastConfig {
            polynomial_degree: 5,
            ..ForecastConfig::default()
        };
        assert!(matches!(
            config.build(),
            Err(ClimateError::UnsupportedDegree { degree: 5 })
        ));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = ForecastConfig::temperature();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ForecastConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.horizon_months, config.horizon_months);
        assert_eq!(parsed.recent_window_size, config.recent_window_size);
    }

    #[test]
    fn test_ice_projection_default() {
        assert_eq!(IceProjectionConfig::default().years_ahead, 15);
    }
}
