//! Anomaly Scoring Facade
//!
//! Unified re-exports for the anomaly scoring module.
//!
//! This facade provides a single entry point to all scoring functionality:
//! - `FeatureScaler` / `ReconstructionModel` traits and result types from SPI
//! - Feature ordering and artifact configuration from API
//! - Scalers, the dense autoencoder, artifact loading and `InferenceContext` from Core

// Re-export everything from SPI
pub use anomaly_spi::*;

// Re-export everything from API
pub use anomaly_api::*;

// Re-export everything from Core
pub use anomaly_core::*;
