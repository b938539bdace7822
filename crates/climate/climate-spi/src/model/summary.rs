//! Headline summary record for a series.

use serde::{Deserialize, Serialize};

/// Latest reading plus a change figure for headline display.
///
/// What `change` compares against depends on the metric: CO₂ uses the
/// previous calendar year's mean, temperature uses decadal window means.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Most recent observed value
    pub current: f64,
    /// Change relative to the metric's reference window
    pub change: f64,
}
