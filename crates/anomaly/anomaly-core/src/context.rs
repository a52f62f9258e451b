//! Immutable inference context and the predict path.

use std::collections::HashMap;

use anomaly_api::{ArtifactConfig, FEATURE_COUNT, FEATURE_ORDER};
use anomaly_spi::{
    AnomalyError, FeatureScaler, FeatureVector, PredictFailure, PredictResponse, Prediction,
    ReconstructionModel, Result,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::alerting::response_time_alert;
use crate::artifacts::ArtifactLoader;
use crate::metrics::reconstruction_error;

/// A single observation as sent by callers: feature name to value.
/// Keys outside the canonical feature set are ignored.
pub type FeatureRecord = HashMap<String, Value>;

/// Model, scaler and threshold, loaded once and shared read-only.
pub struct InferenceContext {
    model: Box<dyn ReconstructionModel>,
    scaler: Box<dyn FeatureScaler>,
    threshold: f64,
}

/// Startup diagnostics for a loaded context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextSummary {
    pub input_dim: usize,
    pub layers: usize,
    pub scaler: String,
    pub scaler_features: usize,
    pub threshold: f64,
}

impl InferenceContext {
    /// Assemble a context from already validated parts.
    pub fn new(
        model: impl ReconstructionModel + 'static,
        scaler: impl FeatureScaler + 'static,
        threshold: f64,
    ) -> Self {
        Self {
            model: Box::new(model),
            scaler: Box::new(scaler),
            threshold,
        }
    }

    /// Load all three artifacts. Any failure is returned unchanged.
    pub fn load(config: &ArtifactConfig) -> Result<Self> {
        let loader = ArtifactLoader::new(config.clone());
        let model = loader.load_model()?;
        let scaler = loader.load_scaler()?;
        let threshold = loader.load_threshold()?;
        let context = Self::new(model, scaler, threshold);

        let summary = context.summary();
        if summary.input_dim != FEATURE_COUNT || summary.scaler_features != FEATURE_COUNT {
            // Not fatal: mismatches surface per request as computation errors.
            warn!(
                expected = FEATURE_COUNT,
                model_input = summary.input_dim,
                scaler_features = summary.scaler_features,
                "artifact dimensions do not match the feature set"
            );
        }
        info!(
            dir = %config.dir.display(),
            layers = summary.layers,
            scaler = %summary.scaler,
            threshold = summary.threshold,
            "model, scaler, and threshold loaded"
        );
        Ok(context)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn model(&self) -> &dyn ReconstructionModel {
        self.model.as_ref()
    }

    pub fn summary(&self) -> ContextSummary {
        ContextSummary {
            input_dim: self.model.input_dim(),
            layers: self.model.depth(),
            scaler: self.scaler.kind().to_string(),
            scaler_features: self.scaler.n_features(),
            threshold: self.threshold,
        }
    }

    /// Scale, reconstruct, score and classify an ordered feature vector.
    pub fn score(&self, features: &FeatureVector) -> Result<Prediction> {
        let scaled = self.scaler.transform(features.as_slice())?;
        let reconstructed = self.model.reconstruct(&scaled)?;
        let error = reconstruction_error(&scaled, &reconstructed)?;
        if !error.is_finite() {
            return Err(AnomalyError::NumericalError(
                "reconstruction error is not finite".to_string(),
            ));
        }
        Ok(Prediction::classify(error, self.threshold))
    }

    /// Score a named record. Never fails: errors become a soft-error response.
    pub fn predict(&self, record: &FeatureRecord) -> PredictResponse {
        let features = match extract_features(record) {
            Ok(features) => features,
            Err(err) => return soft_error(err),
        };
        match self.score(&features) {
            Ok(prediction) => {
                if prediction.is_anomaly {
                    let alert = response_time_alert(&features, &prediction);
                    warn!(
                        severity = ?alert.severity,
                        reconstruction_error = prediction.reconstruction_error,
                        threshold = prediction.threshold,
                        "{}",
                        alert.message
                    );
                }
                PredictResponse::Success(prediction)
            }
            Err(err) => soft_error(err),
        }
    }
}

impl std::fmt::Debug for InferenceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceContext")
            .field("summary", &self.summary())
            .finish()
    }
}

fn soft_error(err: AnomalyError) -> PredictResponse {
    debug!(error = %err, "prediction failed");
    PredictResponse::Failure(PredictFailure::from(err))
}

/// Pull the canonical features out of a record, in order.
///
/// Presence of every feature is checked before any value is interpreted,
/// so a missing feature is always reported as such.
pub fn extract_features(record: &FeatureRecord) -> Result<FeatureVector> {
    if let Some(missing) = FEATURE_ORDER.iter().find(|&&name| !record.contains_key(name)) {
        return Err(AnomalyError::MissingFeature((*missing).to_string()));
    }
    FEATURE_ORDER
        .iter()
        .map(|&name| numeric_value(name, &record[name]))
        .collect::<Result<Vec<f64>>>()
        .map(FeatureVector::new)
}

fn numeric_value(name: &str, value: &Value) -> Result<f64> {
    let kind = match value {
        Value::Number(n) => {
            return n.as_f64().ok_or_else(|| {
                AnomalyError::NumericalError(format!("feature '{}' is not representable", name))
            })
        }
        Value::Bool(b) => return Ok(if *b { 1.0 } else { 0.0 }),
        Value::Null => "null",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    Err(AnomalyError::InvalidFeatureValue {
        name: name.to_string(),
        kind: kind.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autoencoder::{Activation, DenseAutoencoder, DenseLayer};
    use crate::scaler::StandardScaler;
    use serde_json::json;

    fn identity(n: usize) -> Vec<Vec<f64>> {
        (0..n)
            .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect()
    }

    /// Reconstructs every dimension as zero, so the error is the mean
    /// square of the scaled input.
    fn zero_context(threshold: f64) -> InferenceContext {
        let layer = DenseLayer::new(vec![vec![0.0; 12]; 12], vec![0.0; 12], Activation::Linear);
        let model = DenseAutoencoder::new(vec![layer]).unwrap();
        let scaler = StandardScaler::new(vec![0.0; 12], vec![1.0; 12]).unwrap();
        InferenceContext::new(model, scaler, threshold)
    }

    fn record(values: [f64; 12]) -> FeatureRecord {
        FEATURE_ORDER
            .iter()
            .zip(values)
            .map(|(name, v)| (name.to_string(), json!(v)))
            .collect()
    }

    #[test]
    fn test_extract_orders_features() {
        let mut values = [0.0; 12];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as f64;
        }
        let features = extract_features(&record(values)).unwrap();
        assert_eq!(features.as_slice(), &values);
    }

    #[test]
    fn test_extract_reports_first_missing_in_order() {
        let mut rec = record([1.0; 12]);
        rec.remove("dow_cos");
        rec.remove("log_response_time");
        let err = extract_features(&rec).unwrap_err();
        assert_eq!(err.to_string(), "Missing feature: 'dow_cos'");
    }

    #[test]
    fn test_missing_reported_before_bad_value() {
        let mut rec = record([1.0; 12]);
        rec.insert("hour_sin".to_string(), json!("abc"));
        rec.remove("log_response_size");
        let err = extract_features(&rec).unwrap_err();
        assert!(matches!(err, AnomalyError::MissingFeature(name) if name == "log_response_size"));
    }

    #[test]
    fn test_non_numeric_value() {
        let mut rec = record([1.0; 12]);
        rec.insert("geo_location_enc".to_string(), json!(null));
        let err = extract_features(&rec).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for feature 'geo_location_enc': expected a number, got null"
        );
    }

    #[test]
    fn test_bool_coerces_to_number() {
        let mut rec = record([0.0; 12]);
        rec.insert("http_method_enc".to_string(), json!(true));
        let features = extract_features(&rec).unwrap();
        assert_eq!(features.as_slice()[5], 1.0);
    }

    #[test]
    fn test_score_uses_scaled_vector() {
        let layer = DenseLayer::new(vec![vec![0.0; 12]; 12], vec![0.0; 12], Activation::Linear);
        let model = DenseAutoencoder::new(vec![layer]).unwrap();
        // every raw value 2.0 scales to 1.0
        let scaler = StandardScaler::new(vec![0.0; 12], vec![2.0; 12]).unwrap();
        let ctx = InferenceContext::new(model, scaler, 0.5);

        let prediction = ctx.score(&FeatureVector::new(vec![2.0; 12])).unwrap();
        assert_eq!(prediction.reconstruction_error, 1.0);
        assert!(prediction.is_anomaly);
        assert_eq!(prediction.threshold, 0.5);
    }

    #[test]
    fn test_identity_model_scores_zero() {
        let model =
            DenseAutoencoder::new(vec![DenseLayer::new(identity(12), vec![0.0; 12], Activation::Linear)])
                .unwrap();
        let scaler = StandardScaler::new(vec![1.0; 12], vec![3.0; 12]).unwrap();
        let ctx = InferenceContext::new(model, scaler, 0.0);
        let response = ctx.predict(&record([7.0; 12]));
        assert_eq!(response.reconstruction_error(), 0.0);
        // zero is not strictly greater than a zero threshold
        assert!(!response.is_anomaly());
    }

    #[test]
    fn test_threshold_boundary_is_not_anomalous() {
        // error = mean of squares = 1.0 when every scaled value is 1.0
        let ctx = zero_context(1.0);
        let response = ctx.predict(&record([1.0; 12]));
        let prediction = response.prediction().unwrap();
        assert_eq!(prediction.reconstruction_error, 1.0);
        assert!(!prediction.is_anomaly);
    }

    #[test]
    fn test_predict_missing_feature_soft_error() {
        let ctx = zero_context(1.0);
        let mut rec = record([1.0; 12]);
        rec.remove("req_resp_ratio");
        let response = ctx.predict(&rec);
        assert_eq!(response.error(), Some("Missing feature: 'req_resp_ratio'"));
        assert!(!response.is_anomaly());
        assert_eq!(response.reconstruction_error(), 0.0);
    }

    #[test]
    fn test_predict_dimension_mismatch_soft_error() {
        let model =
            DenseAutoencoder::new(vec![DenseLayer::new(identity(4), vec![0.0; 4], Activation::Linear)])
                .unwrap();
        let scaler = StandardScaler::new(vec![0.0; 12], vec![1.0; 12]).unwrap();
        let ctx = InferenceContext::new(model, scaler, 0.1);
        let response = ctx.predict(&record([1.0; 12]));
        assert_eq!(
            response.error(),
            Some("Dimension mismatch in reconstruction: expected 4, got 12")
        );
    }

    #[test]
    fn test_overflow_is_numerical_error() {
        let ctx = zero_context(1.0);
        let response = ctx.predict(&record([1e200; 12]));
        assert_eq!(
            response.error(),
            Some("Numerical error: reconstruction error is not finite")
        );
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let ctx = zero_context(1.0);
        let base = ctx.predict(&record([0.5; 12]));
        let mut rec = record([0.5; 12]);
        rec.insert("status_code".to_string(), json!(500));
        rec.insert("timestamp".to_string(), json!("2024-01-01T00:00:00Z"));
        assert_eq!(ctx.predict(&rec), base);
    }

    #[test]
    fn test_summary() {
        let summary = zero_context(0.3).summary();
        assert_eq!(summary.input_dim, 12);
        assert_eq!(summary.layers, 1);
        assert_eq!(summary.scaler, "standard");
        assert_eq!(summary.scaler_features, 12);
        assert_eq!(summary.threshold, 0.3);
    }
}
