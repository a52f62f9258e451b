//! # anomaly-server
//!
//! HTTP inference service for reconstruction-error anomaly scoring.
//! Artifacts are loaded once at startup into an immutable
//! [`InferenceContext`] shared by every request.

use std::sync::Arc;

use anomaly::InferenceContext;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod commands;
pub mod config;
pub mod error;
pub mod routes;

pub use error::{Result, ServerError};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub context: Arc<InferenceContext>,
}

impl AppState {
    pub fn new(context: InferenceContext) -> Self {
        Self {
            context: Arc::new(context),
        }
    }
}

/// Build the router with middleware.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health))
        .route("/predict", post(routes::predict))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
