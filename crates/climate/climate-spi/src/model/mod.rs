//! Model module containing data structures

mod decomposition;
mod engine_event;
mod ensemble;
mod forecast_point;
mod ice_mass;
mod series_point;
mod summary;

pub use decomposition::DecomposedSeries;
pub use engine_event::EngineEvent;
pub use ensemble::EnsembleMatrix;
pub use forecast_point::ForecastPoint;
pub use ice_mass::{IceMassRecord, IceMassStats};
pub use series_point::{SeriesLabel, TimeSeriesPoint};
pub use summary::SeriesSummary;
