//! Contract definitions for anomaly scoring.
//!
//! This module contains trait definitions that artifact providers must implement.

mod feature_scaler;
mod reconstruction_model;

pub use feature_scaler::FeatureScaler;
pub use reconstruction_model::ReconstructionModel;
