//! Trait for fitted trend models

/// A fitted, immutable trend model over the series index domain.
///
/// Models are plain coefficient holders: evaluation never fails, never
/// mutates, and is safe to call from multiple threads at once.
pub trait TrendModel: Send + Sync {
    /// Predicted trend value at position `x`.
    fn evaluate(&self, x: f64) -> f64;
}
