//! Climate Forecasting Service Provider Interface
//!
//! Defines traits for decomposition, fitted trend models, ensemble
//! reduction, and pipeline observability, plus the shared data models and
//! the error taxonomy.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{EngineObserver, EnsembleReducer, NoopObserver, SeriesDecomposer, TrendModel};
pub use error::{ClimateError, Result};
pub use model::{
    DecomposedSeries, EngineEvent, EnsembleMatrix, ForecastPoint, IceMassRecord, IceMassStats,
    SeriesLabel, SeriesSummary, TimeSeriesPoint,
};
