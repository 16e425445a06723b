//! Event site API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p shower-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use shower_common::{init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(&TracingConfig::default());
            error!(error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };

    init_tracing(&TracingConfig::for_environment(config.app.env));
    info!("Starting {}...", config.app.name);
    info!(
        env = ?config.app.env,
        port = config.api.port,
        backend = ?config.store.backend,
        "Configuration loaded"
    );

    shower_api::run(config).await?;

    Ok(())
}
