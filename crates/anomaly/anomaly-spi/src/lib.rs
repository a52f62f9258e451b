//! Anomaly Scoring Service Provider Interface
//!
//! Defines the traits and types shared by the scoring pipeline:
//! feature scalers, reconstruction models, errors and prediction results.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{FeatureScaler, ReconstructionModel};
pub use error::{AnomalyError, Result};
pub use model::{
    Alert, AlertSeverity, ArtifactKind, FeatureVector, PredictFailure, PredictResponse,
    Prediction,
};
