//! Per-request scoring results.

use serde::{Deserialize, Serialize};

use crate::error::AnomalyError;

/// Successful scoring of one observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Mean squared difference between the scaled input and its reconstruction.
    pub reconstruction_error: f64,
    /// `reconstruction_error > threshold`.
    pub is_anomaly: bool,
    /// Threshold loaded at startup.
    pub threshold: f64,
}

impl Prediction {
    /// Classify an error against a threshold. Equality is not anomalous.
    pub fn classify(reconstruction_error: f64, threshold: f64) -> Self {
        Self {
            reconstruction_error,
            is_anomaly: reconstruction_error > threshold,
            threshold,
        }
    }
}

/// Soft error payload: always reports no anomaly and a zero error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictFailure {
    pub error: String,
    pub is_anomaly: bool,
    pub reconstruction_error: f64,
}

impl PredictFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            is_anomaly: false,
            reconstruction_error: 0.0,
        }
    }
}

impl From<AnomalyError> for PredictFailure {
    fn from(err: AnomalyError) -> Self {
        Self::new(err.to_string())
    }
}

/// Body returned by the predict operation, for both outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictResponse {
    Success(Prediction),
    Failure(PredictFailure),
}

impl PredictResponse {
    pub fn is_anomaly(&self) -> bool {
        match self {
            Self::Success(p) => p.is_anomaly,
            Self::Failure(_) => false,
        }
    }

    pub fn reconstruction_error(&self) -> f64 {
        match self {
            Self::Success(p) => p.reconstruction_error,
            Self::Failure(f) => f.reconstruction_error,
        }
    }

    /// The error message, if scoring failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(f) => Some(&f.error),
        }
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            Self::Success(p) => Some(p),
            Self::Failure(_) => None,
        }
    }
}

impl From<crate::Result<Prediction>> for PredictResponse {
    fn from(result: crate::Result<Prediction>) -> Self {
        match result {
            Ok(prediction) => Self::Success(prediction),
            Err(err) => Self::Failure(err.into()),
        }
    }
}
