//! Anomaly threshold artifact.

use anomaly_spi::{AnomalyError, ArtifactKind, Result};
use serde::{Deserialize, Serialize};

/// Threshold document: either a bare number or `{"threshold": number}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThresholdArtifact {
    Bare(f64),
    Wrapped { threshold: f64 },
}

impl ThresholdArtifact {
    pub fn value(&self) -> f64 {
        match *self {
            Self::Bare(v) | Self::Wrapped { threshold: v } => v,
        }
    }

    /// The validated threshold value.
    pub fn validate(&self) -> Result<f64> {
        let value = self.value();
        if !value.is_finite() || value < 0.0 {
            return Err(AnomalyError::invalid_artifact(
                ArtifactKind::Threshold,
                format!("threshold must be a finite, non-negative number, got {}", value),
            ));
        }
        Ok(value)
    }
}
