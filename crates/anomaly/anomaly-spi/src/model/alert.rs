//! Alert types for flagged observations.

use serde::{Deserialize, Serialize};

/// Alert severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertSeverity {
    Warning,
    Critical,
}

/// A response-time alert raised for an anomalous observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
    /// Encoded endpoint identifier, as sent by the caller.
    pub endpoint_enc: f64,
    /// `expm1(log_response_time)`.
    pub approx_response_time_ms: f64,
    pub normalized_latency: f64,
    pub reconstruction_error: f64,
    pub threshold: f64,
    pub severity: AlertSeverity,
    pub message: String,
}
