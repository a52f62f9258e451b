//! Anomaly Scoring Core
//!
//! Implementations for the scoring pipeline: fitted scalers, the dense
//! autoencoder, artifact loading, the immutable inference context and
//! response-time alerting.

mod alerting;
mod artifacts;
mod autoencoder;
mod context;
mod metrics;
mod scaler;
mod threshold;

pub use alerting::*;
pub use artifacts::*;
pub use autoencoder::*;
pub use context::*;
pub use metrics::*;
pub use scaler::*;
pub use threshold::*;
