//! Ordered raw feature values for a single observation.

use serde::{Deserialize, Serialize};

/// Raw feature values in the fixed order the scaler and model were fitted on.
///
/// The vector does not know feature names; callers build it from a named
/// record using the canonical ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}
