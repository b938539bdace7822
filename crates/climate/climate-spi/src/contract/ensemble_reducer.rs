//! Trait for ensemble forecast reduction

use crate::error::Result;
use crate::model::{EnsembleMatrix, ForecastPoint};

/// Reduces an ensemble matrix to one banded point per year.
///
/// Output must be ordered by ascending year, and every point must satisfy
/// `low <= value <= high`.
pub trait EnsembleReducer: Send + Sync {
    /// Reduce each year's trajectories to a point forecast with bounds.
    fn reduce(&self, matrix: &EnsembleMatrix) -> Result<Vec<ForecastPoint>>;
}
