//! Entry points for each subcommand

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use anomaly::{ArtifactConfig, ContextSummary, InferenceContext, PredictResponse};
use serde::Deserialize;
use tracing::info;

use crate::error::{Result, ServerError};
use crate::routes::PredictRequest;
use crate::{router, AppState};

/// Load artifacts and bind. Returns once the server shuts down.
pub async fn serve(addr: SocketAddr, artifacts: &ArtifactConfig) -> Result<()> {
    let context = InferenceContext::load(artifacts)?;
    let app = router(AppState::new(context));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!(
        "anomaly-server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for ctrl+c");
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}

/// Load artifacts and describe them.
pub fn check(artifacts: &ArtifactConfig) -> Result<ContextSummary> {
    Ok(InferenceContext::load(artifacts)?.summary())
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PredictInput {
    One(PredictRequest),
    Many(Vec<PredictRequest>),
}

/// Score the request(s) in `input`. A single request yields a single
/// response object, an array yields an array.
pub fn predict_file(context: &InferenceContext, input: &Path) -> Result<serde_json::Value> {
    let text = fs::read_to_string(input).map_err(|source| ServerError::Input {
        path: input.to_path_buf(),
        source,
    })?;
    let parsed: PredictInput =
        serde_json::from_str(&text).map_err(|source| ServerError::InputFormat {
            path: input.to_path_buf(),
            source,
        })?;

    let value = match parsed {
        PredictInput::One(req) => serde_json::to_value(context.predict(&req.data))?,
        PredictInput::Many(reqs) => {
            let responses: Vec<PredictResponse> =
                reqs.iter().map(|req| context.predict(&req.data)).collect();
            serde_json::to_value(responses)?
        }
    };
    Ok(value)
}
