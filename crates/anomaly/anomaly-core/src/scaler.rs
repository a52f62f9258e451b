//! Fitted feature scalers.

use anomaly_spi::{AnomalyError, ArtifactKind, FeatureScaler, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Standard Scaler
// ============================================================================

/// Standardize each feature: `(x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        let scaler = Self { mean, scale };
        scaler.validate()?;
        Ok(scaler)
    }

    fn validate(&self) -> Result<()> {
        check_params(&self.mean, "mean", &self.scale, "scale")
    }
}

impl FeatureScaler for StandardScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>> {
        check_len(features, self.mean.len())?;
        Ok(features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(&x, (&mean, &scale))| {
                // Constant features are stored with a zero scale.
                let scale = if scale == 0.0 { 1.0 } else { scale };
                (x - mean) / scale
            })
            .collect())
    }

    fn n_features(&self) -> usize {
        self.mean.len()
    }

    fn kind(&self) -> &str {
        "standard"
    }
}

// ============================================================================
// Min-Max Scaler
// ============================================================================

/// Rescale each feature: `x * scale + min`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    min: Vec<f64>,
    scale: Vec<f64>,
}

impl MinMaxScaler {
    pub fn new(min: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        let scaler = Self { min, scale };
        scaler.validate()?;
        Ok(scaler)
    }

    fn validate(&self) -> Result<()> {
        check_params(&self.min, "min", &self.scale, "scale")
    }
}

impl FeatureScaler for MinMaxScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>> {
        check_len(features, self.min.len())?;
        Ok(features
            .iter()
            .zip(self.min.iter().zip(&self.scale))
            .map(|(&x, (&min, &scale))| x * scale + min)
            .collect())
    }

    fn n_features(&self) -> usize {
        self.min.len()
    }

    fn kind(&self) -> &str {
        "min_max"
    }
}

// ============================================================================
// Scaler Artifact
// ============================================================================

/// On-disk scaler document, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerArtifact {
    Standard(StandardScaler),
    MinMax(MinMaxScaler),
}

impl ScalerArtifact {
    /// Check parameter shapes after deserialization.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Standard(s) => s.validate(),
            Self::MinMax(s) => s.validate(),
        }
    }

    fn inner(&self) -> &dyn FeatureScaler {
        match self {
            Self::Standard(s) => s as &dyn FeatureScaler,
            Self::MinMax(s) => s as &dyn FeatureScaler,
        }
    }
}

impl FeatureScaler for ScalerArtifact {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>> {
        self.inner().transform(features)
    }

    fn n_features(&self) -> usize {
        self.inner().n_features()
    }

    fn kind(&self) -> &str {
        self.inner().kind()
    }
}

fn check_len(features: &[f64], expected: usize) -> Result<()> {
    if features.len() != expected {
        return Err(AnomalyError::DimensionMismatch {
            stage: "scaling",
            expected,
            got: features.len(),
        });
    }
    Ok(())
}

fn check_params(a: &[f64], a_name: &str, b: &[f64], b_name: &str) -> Result<()> {
    if a.is_empty() {
        return Err(AnomalyError::invalid_artifact(
            ArtifactKind::Scaler,
            format!("'{}' is empty", a_name),
        ));
    }
    if a.len() != b.len() {
        return Err(AnomalyError::invalid_artifact(
            ArtifactKind::Scaler,
            format!(
                "'{}' has {} values but '{}' has {}",
                a_name,
                a.len(),
                b_name,
                b.len()
            ),
        ));
    }
    if a.iter().chain(b).any(|v| !v.is_finite()) {
        return Err(AnomalyError::invalid_artifact(
            ArtifactKind::Scaler,
            "parameters must be finite",
        ));
    }
    Ok(())
}
