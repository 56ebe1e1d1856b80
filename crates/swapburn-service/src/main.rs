//! Main entry point for the swap-and-burn service.
//!
//! Loads the configuration, builds the engine, and serves the HTTP API until
//! the process is stopped.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use swapburn_config::Config;
use swapburn_core::SwapBurnBuilder;

mod apis;
mod server;

/// Command-line arguments for the swap-and-burn service.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Path to configuration file
	#[arg(short, long, default_value = "config.toml")]
	config: PathBuf,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "info")]
	log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	use tracing_subscriber::{fmt, EnvFilter};

	// RUST_LOG wins over --log-level
	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(args.log_level.clone()));

	fmt()
		.with_env_filter(env_filter)
		.with_thread_ids(true)
		.with_target(true)
		.init();

	tracing::info!("Started swap-and-burn service");

	let config = load_config(&args.config).await?;
	tracing::info!("Loaded configuration [{}]", config.service.id);

	let api_config = config.api.clone().unwrap_or_default();
	let engine = Arc::new(SwapBurnBuilder::new(config).build().await?);

	if !api_config.enabled {
		tracing::warn!("API server disabled in configuration, nothing to serve");
		return Ok(());
	}

	server::start_server(api_config, engine).await?;

	tracing::info!("Stopped swap-and-burn service");
	Ok(())
}

async fn load_config(path: &std::path::Path) -> Result<Config, swapburn_config::ConfigError> {
	Config::from_file(&path.to_string_lossy()).await
}
