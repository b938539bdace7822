//! Engine error types
//!
//! Defines the standardized error type for all forecasting operations.
//! Every failure is raised synchronously at the point of detection and is
//! never retried; the engine never substitutes a default for a failed fit.

use thiserror::Error;

/// Result type alias for forecasting operations
pub type Result<T> = std::result::Result<T, ClimateError>;

/// Errors that can occur during forecasting operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClimateError {
    /// Fewer data points than the minimum required by a fitter or regression
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Zero or near-zero determinant/variance in a closed-form fit
    #[error("Degenerate fit: {0}")]
    DegenerateFit(String),

    /// Polynomial degree outside the supported set
    #[error("Unsupported polynomial degree {degree}: only degrees 1 and 2 are supported")]
    UnsupportedDegree { degree: u32 },

    /// A requested ensemble year has no simulated values
    #[error("Ensemble for year {year} has no simulated values")]
    EmptyEnsemble { year: i32 },

    /// Gap detected in the one-point-per-month index assumption
    #[error("Non-contiguous series at position {index}: expected {expected_year}-{expected_month:02}, found {found_year}-{found_month:02}")]
    NonContiguousSeries {
        index: usize,
        expected_year: i32,
        expected_month: u32,
        found_year: i32,
        found_month: u32,
    },

    /// Invalid configuration parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}
