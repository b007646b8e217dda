//! Roster API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p roster-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use roster_common::{try_init_tracing_with_config, AppConfig, AppError, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(Environment::from_env())) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, code = e.error_code(), "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    info!("Starting Roster API Server...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        address = %config.api.address(),
        assets = %config.assets.dir,
        "Configuration loaded"
    );

    roster_api::run(config).await
}
