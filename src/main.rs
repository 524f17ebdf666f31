// src/main.rs
mod cli;
mod commands;
mod config;
mod constants;
mod data_fetcher;
mod display;
mod error;
mod logging;

use clap::Parser;
use cli::Args;
use commands::{handle_config_operations, run_view, validate_args};
use config::Config;
use error::AppError;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    validate_args(&args)?;

    // Config-only invocations skip logging setup and fetching entirely
    if handle_config_operations(&args).await? {
        return Ok(());
    }

    // The guard must stay alive until exit so file logs are flushed
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    info!("Logging to {log_file_path}");

    let config = Config::load().await?;
    run_view(&args, &config).await
}
