//! # anomaly-server
//!
//! Loads the model, scaler and threshold, then serves `/predict` and
//! `/health`. Exits non-zero if any artifact cannot be loaded.

use std::process::ExitCode;

use anomaly_server::commands;
use anomaly_server::config::{Cli, Commands, DEFAULT_LOG_FILTER};
use anomaly_server::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Logs go to stderr so subcommand output on stdout stays parseable
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let artifacts = cli.artifact_config()?;

    match cli.command() {
        Commands::Serve => {
            let addr = cli.socket_addr()?;
            commands::serve(addr, &artifacts).await
        }
        Commands::Check => {
            let summary = commands::check(&artifacts)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
        Commands::Predict { input } => {
            let context = anomaly::InferenceContext::load(&artifacts)?;
            let output = commands::predict_file(&context, &input)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
    }
}
