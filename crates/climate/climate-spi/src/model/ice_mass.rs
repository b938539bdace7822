//! Ice mass anomaly records and derived statistics.

use serde::{Deserialize, Serialize};

/// A single satellite mass-anomaly measurement.
///
/// Mass anomalies are in gigatonnes relative to a mission baseline.
/// Calendar fields are carried directly; the regression axis is the decimal
/// year derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IceMassRecord {
    /// Calendar year
    pub year: i32,
    /// Calendar month (1-12)
    pub month: u32,
    /// Day of month (1-31)
    pub day: u32,
    /// Mass anomaly in Gt
    pub mass_anomaly: f64,
    /// Measurement uncertainty in Gt
    pub uncertainty: f64,
}

impl IceMassRecord {
    /// Create a new record.
    pub fn new(year: i32, month: u32, day: u32, mass_anomaly: f64, uncertainty: f64) -> Self {
        Self {
            year,
            month,
            day,
            mass_anomaly,
            uncertainty,
        }
    }
}

/// Read-only summary of an ice-mass series and its fitted regression.
///
/// Computed once per analysis run; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IceMassStats {
    /// First measured mass anomaly (Gt)
    pub first_mass: f64,
    /// Last measured mass anomaly (Gt)
    pub last_mass: f64,
    /// Change over the measurement period: last - first (Gt)
    pub total_loss: f64,
    /// Span of the measurement period in years
    pub years_span: f64,
    /// Regression slope (Gt/year)
    pub annual_loss_rate: f64,
    /// Coefficient of determination of the fit
    pub r_squared: f64,
    /// Predicted mass anomaly at the start of 2030 (Gt)
    pub predicted_2030: f64,
    /// Predicted mass anomaly at the start of 2040 (Gt)
    pub predicted_2040: f64,
    /// Predicted mass anomaly at the start of 2050 (Gt)
    pub predicted_2050: f64,
}
