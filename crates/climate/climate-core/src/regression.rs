//! Closed-form polynomial trend fitters.
//!
//! Both fitters solve the ordinary least squares normal equations
//! directly; there is no iterative solver and no model search.

use climate_spi::{ClimateError, Result, TrendModel};
use serde::{Deserialize, Serialize};

/// Threshold under which a denominator or determinant counts as singular.
const SINGULARITY_EPSILON: f64 = 1e-10;

/// Fitted line over the series index domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// Value at index 0
    pub intercept: f64,
    /// Change per index step
    pub slope: f64,
}

impl TrendModel for LinearModel {
    fn evaluate(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fitted parabola over the series index domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticModel {
    /// Value at index 0
    pub intercept: f64,
    /// First-order coefficient
    pub linear: f64,
    /// Second-order coefficient
    pub quadratic: f64,
}

impl TrendModel for QuadraticModel {
    fn evaluate(&self, x: f64) -> f64 {
        self.intercept + self.linear * x + self.quadratic * x * x
    }
}

/// Either fitted variant, for degree-dispatched callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PolynomialModel {
    Linear(LinearModel),
    Quadratic(QuadraticModel),
}

impl TrendModel for PolynomialModel {
    fn evaluate(&self, x: f64) -> f64 {
        match self {
            PolynomialModel::Linear(model) => model.evaluate(x),
            PolynomialModel::Quadratic(model) => model.evaluate(x),
        }
    }
}

/// Fit a line to `(x, y)` points by least squares.
pub fn fit_linear(points: &[(f64, f64)]) -> Result<LinearModel> {
    let n = points.len();
    if n < 2 {
        return Err(ClimateError::InsufficientData {
            required: 2,
            actual: n,
        });
    }

    let n_f = n as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    for &(x, y) in points {
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let mean_x = sum_x / n_f;
    let mean_y = sum_y / n_f;

    let denominator = sum_x2 - n_f * mean_x * mean_x;
    if denominator.abs() < SINGULARITY_EPSILON {
        return Err(ClimateError::DegenerateFit(
            "zero variance in x".to_string(),
        ));
    }

    let slope = (sum_xy - n_f * mean_x * mean_y) / denominator;
    let intercept = mean_y - slope * mean_x;

    Ok(LinearModel { intercept, slope })
}

/// Fit a parabola to `(x, y)` points via the 3x3 normal equations.
///
/// The system is solved by Cramer's rule. A determinant within epsilon of
/// zero (fewer than three distinct x positions) is reported as a
/// degenerate fit rather than producing NaN coefficients.
pub fn fit_quadratic(points: &[(f64, f64)]) -> Result<QuadraticModel> {
    let n = points.len();
    if n < 3 {
        return Err(ClimateError::InsufficientData {
            required: 3,
            actual: n,
        });
    }

    let n_f = n as f64;
    let mut sum_x = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_x3 = 0.0;
    let mut sum_x4 = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2y = 0.0;
    for &(x, y) in points {
        let x_sq = x * x;
        sum_x += x;
        sum_x2 += x_sq;
        sum_x3 += x_sq * x;
        sum_x4 += x_sq * x_sq;
        sum_y += y;
        sum_xy += x * y;
        sum_x2y += x_sq * y;
    }

    // Normal equations for y = c + b*x + a*x^2:
    //   [ n      sum_x   sum_x2 ] [c]   [ sum_y   ]
    //   [ sum_x  sum_x2  sum_x3 ] [b] = [ sum_xy  ]
    //   [ sum_x2 sum_x3  sum_x4 ] [a]   [ sum_x2y ]
    let det = n_f * (sum_x2 * sum_x4 - sum_x3 * sum_x3)
        - sum_x * (sum_x * sum_x4 - sum_x3 * sum_x2)
        + sum_x2 * (sum_x * sum_x3 - sum_x2 * sum_x2);

    if det.abs() < SINGULARITY_EPSILON {
        return Err(ClimateError::DegenerateFit(
            "singular normal equations".to_string(),
        ));
    }

    let det_c = sum_y * (sum_x2 * sum_x4 - sum_x3 * sum_x3)
        - sum_x * (sum_xy * sum_x4 - sum_x2y * sum_x3)
        + sum_x2 * (sum_xy * sum_x3 - sum_x2y * sum_x2);

    let det_b = n_f * (sum_xy * sum_x4 - sum_x2y * sum_x3)
        - sum_y * (sum_x * sum_x4 - sum_x3 * sum_x2)
        + sum_x2 * (sum_x * sum_x2y - sum_xy * sum_x2);

    let det_a = n_f * (sum_x2 * sum_x2y - sum_x3 * sum_xy)
        - sum_x * (sum_x * sum_x2y - sum_x2 * sum_xy)
        + sum_y * (sum_x * sum_x3 - sum_x2 * sum_x2);

    Ok(QuadraticModel {
        intercept: det_c / det,
        linear: det_b / det,
        quadratic: det_a / det,
    })
}

/// Collect `(index, value)` pairs for the defined region of a trend.
fn valid_trend_points(trend: &[f64]) -> Vec<(f64, f64)> {
    trend
        .iter()
        .enumerate()
        .filter(|(_, value)| !value.is_nan())
        .map(|(i, &value)| (i as f64, value))
        .collect()
}

/// Fit a line to the defined trend points, optionally restricted to the
/// most recent `recent_window` of them.
///
/// Points keep their original index positions; the window filters, it
/// never re-indexes. Restricting to recent points keeps a short-horizon
/// model from chasing early-record curvature.
pub fn fit_linear_trend(trend: &[f64], recent_window: Option<usize>) -> Result<LinearModel> {
    let points = valid_trend_points(trend);
    let recent = match recent_window {
        Some(window) if window < points.len() => &points[points.len() - window..],
        _ => &points[..],
    };
    fit_linear(recent)
}

/// Fit a parabola to every defined trend point.
pub fn fit_quadratic_trend(trend: &[f64]) -> Result<QuadraticModel> {
    fit_quadratic(&valid_trend_points(trend))
}

/// Fit the requested polynomial degree; only 1 and 2 are supported.
///
/// The recent window applies to the linear fit only. The quadratic fit
/// always uses the full defined trend, since curvature needs the whole
/// record to be identifiable.
pub fn fit_polynomial_trend(
    trend: &[f64],
    degree: u32,
    recent_window: Option<usize>,
) -> Result<PolynomialModel> {
    match degree {
        1 => fit_linear_trend(trend, recent_window).map(PolynomialModel::Linear),
        2 => fit_quadratic_trend(trend).map(PolynomialModel::Quadratic),
        _ => Err(ClimateError::UnsupportedDegree { degree }),
    }
}
