//! Contract module containing trait definitions for engine operations

mod engine_observer;
mod ensemble_reducer;
mod series_decomposer;
mod trend_model;

pub use engine_observer::{EngineObserver, NoopObserver};
pub use ensemble_reducer::EnsembleReducer;
pub use series_decomposer::SeriesDecomposer;
pub use trend_model::TrendModel;
