//! Climate Facade
//!
//! High-level API for the climate forecasting engine. Re-exports all
//! public types from the climate stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use climate_api::*;

// Explicit re-exports for documentation
pub use climate_api::prelude;

// Re-export core modules for direct access
pub use climate_core::{
    decomposition, ensemble, ice, regression, seasonal, series, summary, synthesis, trend,
};

// Re-export SPI traits
pub use climate_spi::{EngineObserver, EnsembleReducer, SeriesDecomposer, TrendModel};
