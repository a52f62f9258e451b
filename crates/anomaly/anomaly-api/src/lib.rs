//! Anomaly Scoring API
//!
//! Feature ordering and artifact configuration for anomaly scoring.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use anomaly_spi::{
    Alert, AlertSeverity, AnomalyError, ArtifactKind, FeatureVector, PredictFailure,
    PredictResponse, Prediction, Result,
};

// ============================================================================
// Feature Ordering
// ============================================================================

/// Number of features the scaler and model were fitted on.
pub const FEATURE_COUNT: usize = 12;

/// Canonical feature order. The scaler and model were fitted on exactly this
/// ordering; reordering changes results without any error.
pub const FEATURE_ORDER: [&str; FEATURE_COUNT] = [
    "hour_sin",
    "hour_cos",
    "dow_sin",
    "dow_cos",
    "endpoint_enc",
    "http_method_enc",
    "geo_location_enc",
    "req_resp_ratio",
    "normalized_latency",
    "log_request_size",
    "log_response_size",
    "log_response_time",
];

/// Position of a feature in [`FEATURE_ORDER`].
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_ORDER.iter().position(|&f| f == name)
}

// ============================================================================
// Artifact Configuration
// ============================================================================

pub const DEFAULT_ARTIFACT_DIR: &str = "artifacts";
pub const DEFAULT_MODEL_FILE: &str = "autoencoder_model.json";
pub const DEFAULT_SCALER_FILE: &str = "scaler.json";
pub const DEFAULT_THRESHOLD_FILE: &str = "threshold.json";

/// Where the three startup artifacts are read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactConfig {
    /// Directory holding all three artifacts.
    pub dir: PathBuf,
    pub model_file: String,
    pub scaler_file: String,
    pub threshold_file: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ARTIFACT_DIR)
    }
}

impl ArtifactConfig {
    /// Use the default file names inside `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            model_file: DEFAULT_MODEL_FILE.to_string(),
            scaler_file: DEFAULT_SCALER_FILE.to_string(),
            threshold_file: DEFAULT_THRESHOLD_FILE.to_string(),
        }
    }

    /// `artifacts/` next to the running executable.
    pub fn beside_executable() -> std::io::Result<Self> {
        let exe = std::env::current_exe()?;
        let base = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::new(base.join(DEFAULT_ARTIFACT_DIR)))
    }

    pub fn with_model_file(mut self, name: impl Into<String>) -> Self {
        self.model_file = name.into();
        self
    }

    pub fn with_scaler_file(mut self, name: impl Into<String>) -> Self {
        self.scaler_file = name.into();
        self
    }

    pub fn with_threshold_file(mut self, name: impl Into<String>) -> Self {
        self.threshold_file = name.into();
        self
    }

    /// Full path of one artifact.
    pub fn path(&self, kind: ArtifactKind) -> PathBuf {
        let file = match kind {
            ArtifactKind::Model => &self.model_file,
            ArtifactKind::Scaler => &self.scaler_file,
            ArtifactKind::Threshold => &self.threshold_file,
        };
        self.dir.join(file)
    }
}
