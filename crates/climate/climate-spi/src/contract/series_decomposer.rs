//! Trait for monthly series decomposition

use crate::error::Result;
use crate::model::DecomposedSeries;

/// Splits a monthly series into trend, seasonal, and residual components.
///
/// Implementations must return components of the same length as the input
/// and must uphold the additive identity wherever the trend is defined:
/// `trend[i] + seasonal[i] + residual[i] == values[i]`.
pub trait SeriesDecomposer: Send + Sync {
    /// Decompose a value sequence into its components.
    fn decompose(&self, values: &[f64]) -> Result<DecomposedSeries>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClimateError;

    /// Mock that puts everything in the trend component.
    struct TrendOnlyDecomposer;

    impl SeriesDecomposer for TrendOnlyDecomposer {
        fn decompose(&self, values: &[f64]) -> Result<DecomposedSeries> {
            Ok(DecomposedSeries {
                trend: values.to_vec(),
                seasonal: vec![0.0; values.len()],
                residual: vec![0.0; values.len()],
            })
        }
    }

    /// Mock that always refuses.
    struct RefusingDecomposer;

    impl SeriesDecomposer for RefusingDecomposer {
        fn decompose(&self, values: &[f64]) -> Result<DecomposedSeries> {
            Err(ClimateError::InsufficientData {
                required: 24,
                actual: values.len(),
            })
        }
    }

    #[test]
    fn test_decomposer_returns_components_of_input_length() {
        let decomposer = TrendOnlyDecomposer;
        let result = decomposer.decompose(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result.trend, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_decomposer_upholds_additive_identity() {
        let decomposer = TrendOnlyDecomposer;
        let values = [4.0, 5.0, 6.0];
        let result = decomposer.decompose(&values).unwrap();
        for i in 0..values.len() {
            let reconstructed = result.trend[i] + result.seasonal[i] + result.residual[i];
            assert!((reconstructed - values[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_decomposer_can_refuse_short_input() {
        let decomposer = RefusingDecomposer;
        let result = decomposer.decompose(&[1.0]);
        assert!(matches!(
            result,
            Err(ClimateError::InsufficientData {
                required: 24,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_decomposer_as_trait_object() {
        let decomposer: Box<dyn SeriesDecomposer> = Box::new(TrendOnlyDecomposer);
        assert!(decomposer.decompose(&[1.0, 2.0]).is_ok());
    }

    #[test]
    fn test_decomposer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TrendOnlyDecomposer>();
        assert_send_sync::<Box<dyn SeriesDecomposer>>();
    }
}
