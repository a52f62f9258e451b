//! Reconstruction model trait definition.

use crate::error::Result;

/// A deterministic model mapping a scaled vector to its reconstruction.
///
/// The output has the same dimensionality as the input.
pub trait ReconstructionModel: Send + Sync {
    /// Reconstruct a scaled feature vector.
    fn reconstruct(&self, input: &[f64]) -> Result<Vec<f64>>;

    /// Expected input (and output) dimensionality.
    fn input_dim(&self) -> usize;

    /// Number of layers, for diagnostics.
    fn depth(&self) -> usize;
}
