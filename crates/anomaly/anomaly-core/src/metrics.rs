//! Reconstruction error metric.

use anomaly_spi::{AnomalyError, Result};

/// Mean squared difference between a scaled vector and its reconstruction.
pub fn reconstruction_error(scaled: &[f64], reconstructed: &[f64]) -> Result<f64> {
    if scaled.len() != reconstructed.len() {
        return Err(AnomalyError::DimensionMismatch {
            stage: "error computation",
            expected: scaled.len(),
            got: reconstructed.len(),
        });
    }
    if scaled.is_empty() {
        return Err(AnomalyError::NumericalError(
            "cannot score an empty vector".to_string(),
        ));
    }
    let sum: f64 = scaled
        .iter()
        .zip(reconstructed)
        .map(|(a, r)| (a - r).powi(2))
        .sum();
    Ok(sum / scaled.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mse() {
        let error = reconstruction_error(&[1.0, 2.0, 3.0, 4.0], &[1.0, 0.0, 3.0, 6.0]).unwrap();
        assert_eq!(error, 2.0);
    }

    #[test]
    fn test_perfect_reconstruction_is_zero() {
        assert_eq!(reconstruction_error(&[0.3; 12], &[0.3; 12]).unwrap(), 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            reconstruction_error(&[1.0; 12], &[1.0; 6]),
            Err(AnomalyError::DimensionMismatch { expected: 12, got: 6, .. })
        ));
    }

    #[test]
    fn test_empty() {
        assert!(reconstruction_error(&[], &[]).is_err());
    }
}
