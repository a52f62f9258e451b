//! Basic example: load artifacts and score a few requests
//!
//! Run with: cargo run --example basic -p anomaly [ARTIFACT_DIR]

use anomaly::{ArtifactConfig, FeatureRecord, InferenceContext};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== anomaly scoring example ===\n");

    let dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/artifacts").to_string());
    let ctx = InferenceContext::load(&ArtifactConfig::new(&dir))?;
    println!("Loaded artifacts from {}: {:?}\n", dir, ctx.summary());

    let normal: FeatureRecord = serde_json::from_value(json!({
        "hour_sin": 0.5, "hour_cos": 0.5, "dow_sin": 0.1, "dow_cos": 0.1,
        "endpoint_enc": 2, "http_method_enc": 1, "geo_location_enc": 3,
        "req_resp_ratio": 1.2, "normalized_latency": 0.3, "log_request_size": 4.1,
        "log_response_size": 5.2, "log_response_time": 2.3
    }))?;

    let mut slow = normal.clone();
    slow.insert("log_response_time".to_string(), json!(6.5));
    slow.insert("normalized_latency".to_string(), json!(2.0));

    let mut incomplete = normal.clone();
    incomplete.remove("dow_sin");

    for (label, record) in [("normal", &normal), ("slow", &slow), ("incomplete", &incomplete)] {
        let response = ctx.predict(record);
        println!("{:>10}: {}", label, serde_json::to_string(&response)?);
    }

    Ok(())
}
