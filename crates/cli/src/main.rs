use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fieldrename_core::{load_config, validate_config, Pipeline, RestFieldClient};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Determine config path
    let config_path = std::env::var("FIELDRENAME_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Target directory: {:?}", config.target_directory);
    info!("Custom field: {}", config.custom_field_name);

    let client = RestFieldClient::new(config.clone());
    let summary = Pipeline::new(&config, client)
        .run()
        .await
        .context("Run failed")?;

    info!("{} Successful", summary.successes);
    info!("{} Failed", summary.failures);
    info!("Event log exported to {}", summary.report_path.display());

    Ok(())
}
