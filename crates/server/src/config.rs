//! Command-line and environment configuration
//!
//! Precedence: flags, then environment (including `.env`), then defaults.

use std::net::SocketAddr;
use std::path::PathBuf;

use anomaly::ArtifactConfig;
use clap::{Parser, Subcommand};

use crate::error::{Result, ServerError};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_FILTER: &str = "anomaly_server=info,anomaly_core=info,tower_http=info";

#[derive(Debug, Parser)]
#[command(name = "anomaly-server")]
#[command(about = "Reconstruction-error anomaly detection service", long_about = None)]
pub struct Cli {
    /// Directory holding autoencoder_model.json, scaler.json and threshold.json
    /// (default: `artifacts/` next to the executable)
    #[arg(long, env = "ANOMALY_ARTIFACT_DIR", global = true)]
    pub artifacts: Option<PathBuf>,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST, global = true)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT, global = true)]
    pub port: u16,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Start the REST API server (default)
    Serve,

    /// Load the artifacts, print a summary and exit
    Check,

    /// Score requests from a JSON file and print the responses
    Predict {
        /// File holding one `{"data": {...}}` request or an array of them
        #[arg(short, long)]
        input: PathBuf,
    },
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ServerError::Address(addr))
    }

    pub fn artifact_config(&self) -> Result<ArtifactConfig> {
        match &self.artifacts {
            Some(dir) => Ok(ArtifactConfig::new(dir)),
            None => ArtifactConfig::beside_executable().map_err(ServerError::ExecutableDir),
        }
    }
}
