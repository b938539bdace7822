//! Nearest-rank percentile reduction of ensemble forecasts.
//!
//! Percentiles are taken at truncated ranks into the ascending sort, not
//! interpolated between them, so every band edge is a value that actually
//! occurs in some trajectory.

use climate_spi::{
    ClimateError, EngineEvent, EngineObserver, EnsembleMatrix, EnsembleReducer, ForecastPoint,
    NoopObserver, Result, TimeSeriesPoint,
};

/// Reduce each year to its median with 5th/95th percentile bounds.
///
/// Ranks are `floor(n * 0.05)`, `floor(n / 2)`, and `floor(n * 0.95)`
/// into the ascending sort of that year's trajectories. Annual points
/// carry month 1.
pub fn reduce_ensemble(matrix: &EnsembleMatrix) -> Result<Vec<ForecastPoint>> {
    reduce_ensemble_observed(matrix, &NoopObserver)
}

/// Reduce, reporting the pass to `observer`.
pub fn reduce_ensemble_observed(
    matrix: &EnsembleMatrix,
    observer: &dyn EngineObserver,
) -> Result<Vec<ForecastPoint>> {
    let mut points = Vec::with_capacity(matrix.len());

    for (year, trajectories) in matrix.iter() {
        if trajectories.is_empty() {
            return Err(ClimateError::EmptyEnsemble { year });
        }

        let mut sorted = trajectories.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let low = sorted[(count as f64 * 0.05) as usize];
        let median = sorted[count / 2];
        let high = sorted[((count as f64 * 0.95) as usize).min(count - 1)];

        points.push(ForecastPoint::banded(year, 1, median, low, high));
    }

    observer.record(&EngineEvent::EnsembleReduced {
        years: points.len(),
    });

    Ok(points)
}

/// Nearest-rank percentile reducer implementing [`EnsembleReducer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestRankAggregator;

impl NearestRankAggregator {
    /// Create a new aggregator.
    pub fn new() -> Self {
        Self
    }
}

impl EnsembleReducer for NearestRankAggregator {
    fn reduce(&self, matrix: &EnsembleMatrix) -> Result<Vec<ForecastPoint>> {
        reduce_ensemble(matrix)
    }
}

/// Annual history (bound-less, labeled historical) followed by the banded
/// forecast.
pub fn combine_with_history(
    historical: &[TimeSeriesPoint],
    forecast: &[ForecastPoint],
) -> Vec<ForecastPoint> {
    let mut combined = Vec::with_capacity(historical.len() + forecast.len());
    combined.extend(historical.iter().map(|point| {
        ForecastPoint::from(TimeSeriesPoint::historical(
            point.year,
            point.month,
            point.value,
        ))
    }));
    combined.extend_from_slice(forecast);
    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use climate_spi::SeriesLabel;

    #[test]
    fn test_hundred_trajectories_hit_documented_ranks() {
        // 1..=100 in reverse to prove the sort; ranks 5, 50, 95 hold 6, 51, 96
        let mut matrix = EnsembleMatrix::new();
        matrix.insert(2050, (1..=100).rev().map(f64::from).collect());

        let points = reduce_ensemble(&matrix).unwrap();
        let point = &points[0];
        assert_eq!(point.low, Some(6.0));
        assert!((point.value - 51.0).abs() < 1e-12);
        assert_eq!(point.high, Some(96.0));
    }

    #[test]
    fn test_bounds_bracket_median() {
        let mut matrix = EnsembleMatrix::new();
        for year in 2025..2035 {
            let values: Vec<f64> = (0..37)
                .map(|i| f64::from(year - 2000) + f64::from(i % 7) * 0.3)
                .collect();
            matrix.insert(year, values);
        }

        let points = reduce_ensemble(&matrix).unwrap();
        assert_eq!(points.len(), 10);
        for point in &points {
            assert!(point.low.unwrap() <= point.value);
            assert!(point.value <= point.high.unwrap());
            assert_eq!(point.month, 1);
            assert_eq!(point.label, SeriesLabel::Predicted);
        }
    }

    #[test]
    fn test_single_trajectory_collapses_bands() {
        let mut matrix = EnsembleMatrix::new();
        matrix.insert(2025, vec![4.2]);

        let points = reduce_ensemble(&matrix).unwrap();
        assert_eq!(points[0].low, Some(4.2));
        assert!((points[0].value - 4.2).abs() < 1e-12);
        assert_eq!(points[0].high, Some(4.2));
    }

    #[test]
    fn test_empty_year_is_reported() {
        let mut matrix = EnsembleMatrix::new();
        matrix.insert(2025, vec![1.0]);
        matrix.insert(2026, vec![]);

        assert!(matches!(
            reduce_ensemble(&matrix),
            Err(ClimateError::EmptyEnsemble { year: 2026 })
        ));
    }

    #[test]
    fn test_empty_matrix_reduces_to_nothing() {
        let points = reduce_ensemble(&EnsembleMatrix::new()).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_aggregator_implements_contract() {
        let mut matrix = EnsembleMatrix::new();
        matrix.insert(2025, vec![1.0, 2.0, 3.0]);

        let reducer: &dyn EnsembleReducer = &NearestRankAggregator::new();
        let points = reducer.reduce(&matrix).unwrap();
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_history_precedes_forecast_without_bounds() {
        let history = vec![
            TimeSeriesPoint::historical(2020, 1, 1.1),
            TimeSeriesPoint::historical(2021, 1, 1.3),
        ];
        let forecast = vec![ForecastPoint::banded(2025, 1, 2.0, 1.5, 2.5)];

        let combined = combine_with_history(&history, &forecast);
        assert_eq!(combined.len(), 3);
        assert_eq!(combined[0].label, SeriesLabel::Historical);
        assert!(combined[0].low.is_none());
        assert_eq!(combined[2].label, SeriesLabel::Predicted);
        assert_eq!(combined[2].high, Some(2.5));
    }
}
