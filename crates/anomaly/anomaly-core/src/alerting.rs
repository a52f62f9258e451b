//! Response-time alerts for flagged observations.

use std::time::{SystemTime, UNIX_EPOCH};

use anomaly_api::feature_index;
use anomaly_spi::{Alert, AlertSeverity, FeatureVector, Prediction};

/// Errors above this multiple of the threshold are critical.
pub const CRITICAL_THRESHOLD_RATIO: f64 = 2.0;

/// Build an alert from the raw (unscaled) features of a flagged observation.
pub fn response_time_alert(features: &FeatureVector, prediction: &Prediction) -> Alert {
    let feature = |name: &str| {
        feature_index(name)
            .and_then(|i| features.as_slice().get(i).copied())
            .unwrap_or(0.0)
    };

    let endpoint_enc = feature("endpoint_enc");
    let approx_response_time_ms = feature("log_response_time").exp_m1();
    let normalized_latency = feature("normalized_latency");

    let severity =
        if prediction.reconstruction_error > prediction.threshold * CRITICAL_THRESHOLD_RATIO {
            AlertSeverity::Critical
        } else {
            AlertSeverity::Warning
        };

    let message = format!(
        "Response time anomaly: endpoint={} response_time={:.2}ms normalized_latency={:.2} reconstruction_error={:.2}",
        endpoint_enc, approx_response_time_ms, normalized_latency, prediction.reconstruction_error
    );

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    Alert {
        timestamp,
        endpoint_enc,
        approx_response_time_ms,
        normalized_latency,
        reconstruction_error: prediction.reconstruction_error,
        threshold: prediction.threshold,
        severity,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(log_response_time: f64) -> FeatureVector {
        let mut values = vec![0.0; 12];
        values[4] = 3.0; // endpoint_enc
        values[8] = 0.75; // normalized_latency
        values[11] = log_response_time;
        FeatureVector::new(values)
    }

    #[test]
    fn test_response_time_is_expm1_of_log() {
        let alert = response_time_alert(&features(100.0_f64.ln_1p()), &Prediction::classify(0.3, 0.2));
        assert!((alert.approx_response_time_ms - 100.0).abs() < 1e-9);
        assert_eq!(alert.endpoint_enc, 3.0);
        assert_eq!(alert.normalized_latency, 0.75);
        assert_eq!(
            alert.message,
            "Response time anomaly: endpoint=3 response_time=100.00ms normalized_latency=0.75 reconstruction_error=0.30"
        );
    }

    #[test]
    fn test_severity_scales_with_error() {
        let warning = response_time_alert(&features(1.0), &Prediction::classify(0.3, 0.2));
        assert_eq!(warning.severity, AlertSeverity::Warning);

        let critical = response_time_alert(&features(1.0), &Prediction::classify(0.5, 0.2));
        assert_eq!(critical.severity, AlertSeverity::Critical);
    }

    #[test]
    fn test_short_vector_defaults_to_zero() {
        let alert = response_time_alert(&FeatureVector::new(vec![]), &Prediction::classify(1.0, 0.1));
        assert_eq!(alert.approx_response_time_ms, 0.0);
        assert_eq!(alert.endpoint_enc, 0.0);
    }
}
