//! Data models for anomaly scoring.
//!
//! This module contains data structures used throughout the scoring pipeline.

mod alert;
mod artifact_kind;
mod feature_vector;
mod prediction;

pub use alert::{Alert, AlertSeverity};
pub use artifact_kind::ArtifactKind;
pub use feature_vector::FeatureVector;
pub use prediction::{PredictFailure, PredictResponse, Prediction};
