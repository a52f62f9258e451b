//! Server error types

use std::net::SocketAddr;
use std::path::PathBuf;

use anomaly::AnomalyError;
use thiserror::Error;

/// Errors that stop the binary. Request-level errors never reach here.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to load artifacts: {0}")]
    Artifacts(#[from] AnomalyError),

    #[error("cannot locate the executable directory: {0}")]
    ExecutableDir(#[source] std::io::Error),

    #[error("invalid listen address '{0}'")]
    Address(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("failed to read input {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid input {}: {source}", .path.display())]
    InputFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
