//! Ensemble forecast matrix.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Pre-generated simulation trajectories keyed by forecast year.
///
/// Each year holds the simulated values for that time step, typically a few
/// hundred trajectories. Iteration is always in ascending year order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnsembleMatrix {
    trajectories: BTreeMap<i32, Vec<f64>>,
}

impl EnsembleMatrix {
    /// Create an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the simulated values for a year.
    pub fn insert(&mut self, year: i32, values: Vec<f64>) {
        self.trajectories.insert(year, values);
    }

    /// Simulated values for a year, if present.
    pub fn get(&self, year: i32) -> Option<&[f64]> {
        self.trajectories.get(&year).map(Vec::as_slice)
    }

    /// Number of years in the matrix.
    pub fn len(&self) -> usize {
        self.trajectories.len()
    }

    /// Whether the matrix holds no years at all.
    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    /// Iterate `(year, values)` pairs in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &[f64])> + '_ {
        self.trajectories
            .iter()
            .map(|(&year, values)| (year, values.as_slice()))
    }
}

impl From<BTreeMap<i32, Vec<f64>>> for EnsembleMatrix {
    fn from(trajectories: BTreeMap<i32, Vec<f64>>) -> Self {
        Self { trajectories }
    }
}

impl FromIterator<(i32, Vec<f64>)> for EnsembleMatrix {
    fn from_iter<I: IntoIterator<Item = (i32, Vec<f64>)>>(iter: I) -> Self {
        Self {
            trajectories: iter.into_iter().collect(),
        }
    }
}
