//! Observability events emitted by pipeline entry points.

use serde::{Deserialize, Serialize};

/// A structured event describing one engine step.
///
/// Events are advisory and reported after the step completes; an observer
/// can never alter the computation. The plain (unobserved) entry points
/// skip constructing them entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEvent {
    /// A monthly series was split into trend/seasonal/residual
    SeriesDecomposed { points: usize, window: usize },
    /// A polynomial trend model was fitted over the defined trend points
    TrendFitted { degree: u32, points: usize },
    /// A forecast was synthesized and stitched onto the history
    ForecastSynthesized { horizon: usize, adjustment: f64 },
    /// An ice-mass regression was computed
    RegressionComputed { slope: f64, r_squared: f64 },
    /// An ensemble matrix was reduced to percentile bands
    EnsembleReduced { years: usize },
}
