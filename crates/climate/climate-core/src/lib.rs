//! Climate Forecasting Core
//!
//! Core implementations behind the engine: additive decomposition of
//! monthly series, closed-form polynomial trend fitting, continuity-
//! preserving forecast synthesis, ice-mass regression over decimal years,
//! nearest-rank ensemble reduction, and headline summaries.

pub mod decomposition;
pub mod ensemble;
pub mod ice;
pub mod regression;
pub mod seasonal;
pub mod series;
pub mod summary;
pub mod synthesis;
pub mod trend;

// Re-export SPI items so consumers need only one import path
pub use climate_spi::{
    ClimateError, DecomposedSeries, EngineEvent, EngineObserver, EnsembleMatrix, EnsembleReducer,
    ForecastPoint, IceMassRecord, IceMassStats, NoopObserver, Result, SeriesDecomposer,
    SeriesLabel, SeriesSummary, TimeSeriesPoint, TrendModel,
};

// Re-export the main implementation types
pub use decomposition::AdditiveDecomposer;
pub use ensemble::NearestRankAggregator;
pub use ice::IceMassRegression;
pub use regression::{LinearModel, PolynomialModel, QuadraticModel};
pub use synthesis::SeasonalTrendForecaster;
