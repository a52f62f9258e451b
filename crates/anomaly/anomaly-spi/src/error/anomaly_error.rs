//! Anomaly scoring error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::ArtifactKind;

/// Anomaly scoring errors.
///
/// The first group is raised per request and is reported back to the caller
/// as a soft error. The artifact group is only raised while loading and is
/// fatal to the process.
#[derive(Debug, Error)]
pub enum AnomalyError {
    #[error("Missing feature: '{0}'")]
    MissingFeature(String),

    #[error("Invalid value for feature '{name}': expected a number, got {kind}")]
    InvalidFeatureValue { name: String, kind: String },

    #[error("Dimension mismatch in {stage}: expected {expected}, got {got}")]
    DimensionMismatch {
        stage: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Numerical error: {0}")]
    NumericalError(String),

    #[error("Failed to read {artifact} artifact at {}: {source}", .path.display())]
    ArtifactIo {
        artifact: ArtifactKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {artifact} artifact at {}: {source}", .path.display())]
    ArtifactFormat {
        artifact: ArtifactKind,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid {artifact} artifact: {reason}")]
    InvalidArtifact {
        artifact: ArtifactKind,
        reason: String,
    },
}

impl AnomalyError {
    /// Whether this error can only occur while loading artifacts.
    pub fn is_startup_fatal(&self) -> bool {
        matches!(
            self,
            Self::ArtifactIo { .. } | Self::ArtifactFormat { .. } | Self::InvalidArtifact { .. }
        )
    }

    /// The artifact this error refers to, if any.
    pub fn artifact(&self) -> Option<ArtifactKind> {
        match self {
            Self::ArtifactIo { artifact, .. }
            | Self::ArtifactFormat { artifact, .. }
            | Self::InvalidArtifact { artifact, .. } => Some(*artifact),
            _ => None,
        }
    }

    pub fn invalid_artifact(artifact: ArtifactKind, reason: impl Into<String>) -> Self {
        Self::InvalidArtifact {
            artifact,
            reason: reason.into(),
        }
    }
}

/// Result type for anomaly scoring operations.
pub type Result<T> = std::result::Result<T, AnomalyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_feature_display() {
        let error = AnomalyError::MissingFeature("hour_sin".to_string());
        assert_eq!(error.to_string(), "Missing feature: 'hour_sin'");
    }

    #[test]
    fn test_invalid_feature_value_display() {
        let error = AnomalyError::InvalidFeatureValue {
            name: "endpoint_enc".to_string(),
            kind: "string".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for feature 'endpoint_enc': expected a number, got string"
        );
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let error = AnomalyError::DimensionMismatch {
            stage: "scaling",
            expected: 12,
            got: 10,
        };
        assert_eq!(
            error.to_string(),
            "Dimension mismatch in scaling: expected 12, got 10"
        );
    }

    #[test]
    fn test_numerical_error_display() {
        let error = AnomalyError::NumericalError("reconstruction error is not finite".to_string());
        assert_eq!(
            error.to_string(),
            "Numerical error: reconstruction error is not finite"
        );
    }

    #[test]
    fn test_artifact_io_names_artifact_and_path() {
        let error = AnomalyError::ArtifactIo {
            artifact: ArtifactKind::Scaler,
            path: PathBuf::from("/opt/ml/scaler.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        let msg = error.to_string();
        assert!(msg.starts_with("Failed to read scaler artifact at /opt/ml/scaler.json"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_artifact_format_keeps_source() {
        let source = serde_json::from_str::<f64>("not json").unwrap_err();
        let error = AnomalyError::ArtifactFormat {
            artifact: ArtifactKind::Threshold,
            path: PathBuf::from("threshold.json"),
            source,
        };
        assert!(error.to_string().contains("threshold artifact"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_invalid_artifact_display() {
        let error = AnomalyError::invalid_artifact(ArtifactKind::Model, "no layers");
        assert_eq!(error.to_string(), "Invalid model artifact: no layers");
    }

    #[test]
    fn test_startup_fatal_classification() {
        assert!(AnomalyError::invalid_artifact(ArtifactKind::Model, "x").is_startup_fatal());
        assert!(!AnomalyError::MissingFeature("dow_sin".to_string()).is_startup_fatal());
        assert!(!AnomalyError::NumericalError("nan".to_string()).is_startup_fatal());
    }

    #[test]
    fn test_artifact_accessor() {
        let error = AnomalyError::invalid_artifact(ArtifactKind::Threshold, "negative");
        assert_eq!(error.artifact(), Some(ArtifactKind::Threshold));
        assert_eq!(AnomalyError::MissingFeature("x".into()).artifact(), None);
    }

    #[test]
    fn test_all_error_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnomalyError>();
    }
}
