//! Launchboard server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Looks for a `config.toml` in the platform config directory or the
//! working directory. Environment variables override file settings:
//! - `LAUNCHBOARD_DATA_FILE`: Launch records CSV (default: data/launch_records.csv)
//! - `LAUNCHBOARD_HOST`: Host to bind to (default: 0.0.0.0)
//! - `LAUNCHBOARD_PORT`: Port to listen on (default: 8050)
//! - `LAUNCHBOARD_LOG_LEVEL`: Log level (default: info)
//! - `LAUNCHBOARD_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Full filter override

use anyhow::Context;
use launchboard::api::{serve, ApiConfig, AppState};
use launchboard::config::Config;
use launchboard::dataset::LaunchDataset;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_tracing(&config);

    tracing::info!("Starting Launchboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset file: {}", config.dataset.path);

    // A failed load is fatal: the page is never served without data.
    let dataset = LaunchDataset::from_path(Path::new(&config.dataset.path))
        .with_context(|| format!("failed to load launch dataset from {}", config.dataset.path))?;

    let bounds = dataset.payload_bounds();
    tracing::info!(
        records = dataset.len(),
        sites = dataset.sites().len(),
        payload_min = bounds.min,
        payload_max = bounds.max,
        "Dataset loaded"
    );

    let api_config = ApiConfig::new(config.server.host.clone(), config.server.port);
    let state = AppState::new(Arc::new(dataset), api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Launchboard stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("launchboard={},tower_http=debug", config.logging.level).into()
    });

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
