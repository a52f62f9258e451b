//! # anomaly
//!
//! Reconstruction-error anomaly scoring for request telemetry.
//!
//! Load a fitted scaler, a dense autoencoder and a threshold once with
//! [`InferenceContext::load`], then score named feature records with
//! [`InferenceContext::predict`].

pub use anomaly_facade::*;
