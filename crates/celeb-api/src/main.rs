//! Celebrity dashboard API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p celeb-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use celeb_common::{try_init_tracing_with_config, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Tracing format depends on APP_ENV, which is only known once config loads
    let env = std::env::var("APP_ENV")
        .ok()
        .and_then(|v| Environment::parse(&v))
        .unwrap_or_default();
    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting celebrity dashboard API...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        address = %config.api.address(),
        "Configuration loaded"
    );

    celeb_api::run(config).await?;

    Ok(())
}
