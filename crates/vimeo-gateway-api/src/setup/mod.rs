//! Application setup and initialization

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use vimeo_gateway_client::VimeoClient;
use vimeo_gateway_core::Config;

/// Validate configuration, start logging, build the Vimeo client and the router.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Fail fast on misconfiguration, before anything else is set up
    config.validate().context("Configuration validation failed")?;

    crate::telemetry::init_telemetry(&config.log_level, config.log_format)
        .context("Failed to initialize telemetry")?;

    tracing::info!(config = ?config, "Configuration loaded and validated successfully");

    let client = VimeoClient::from_config(&config).context("Failed to create Vimeo client")?;
    let state = Arc::new(AppState::new(Arc::new(client)));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
