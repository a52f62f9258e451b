//! Feature scaler trait definition.

use crate::error::Result;

/// A fitted, immutable linear transform applied to raw feature vectors.
///
/// Implementations never perform bounds checking: out-of-distribution
/// values are passed through the transform unchanged in kind.
pub trait FeatureScaler: Send + Sync {
    /// Scale a raw feature vector.
    ///
    /// Fails with [`AnomalyError::DimensionMismatch`](crate::AnomalyError::DimensionMismatch)
    /// when `features` does not have [`n_features`](Self::n_features) values.
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>>;

    /// Number of features the scaler was fitted on.
    fn n_features(&self) -> usize;

    /// Short name of the scaling method, e.g. `"standard"`.
    fn kind(&self) -> &str;
}
