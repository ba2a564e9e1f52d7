//! Sorta API Server
//!
//! Run with: cargo run --bin sorta-api
//!
//! # Configuration
//!
//! Reads `config.toml` from the standard locations, then applies
//! environment overrides:
//! - `SORTA_HOST`: Host to bind to (default: 0.0.0.0)
//! - `SORTA_PORT`: Port to listen on (default: 8080)
//! - `SORTA_UPSTREAM_URL`: Form backend base URL (default: https://formspree.io)
//! - `FORMSPREE_ID`: Form backend project id; the relay stays disabled until this is set
//! - `RUST_LOG`: Log level (default: info)

use sorta::api::{serve, ApiConfig, AppState};
use sorta::config::Config;
use sorta::upstream::{FormBackendClient, UpstreamConfig};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sorta=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sorta API server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration (file, then environment overrides)
    let config = Config::load_default();
    let api_config = load_api_config(&config);

    // Create app state (with or without the upstream relay)
    let state = if let Some(upstream) = load_upstream(&config) {
        tracing::info!("Upstream relay enabled: {}", upstream.config().base_url);
        AppState::with_upstream(api_config.clone(), Arc::new(upstream))
    } else {
        tracing::warn!("Upstream relay disabled (set FORMSPREE_ID to enable)");
        AppState::new(api_config.clone())
    };

    // Run server
    tracing::info!("Starting server on {}:{}", api_config.host, api_config.port);
    serve(state, &api_config).await?;

    tracing::info!("Sorta API server stopped");

    Ok(())
}

/// Bind configuration for the API server
fn load_api_config(config: &Config) -> ApiConfig {
    ApiConfig::new(config.api.host.clone(), config.api.port)
}

/// Upstream client when a form id is configured
///
/// Returns None when `FORMSPREE_ID` is absent. The server still comes up
/// so probes work; submissions report a misconfigured server until the
/// id is provided.
fn load_upstream(config: &Config) -> Option<FormBackendClient> {
    let form_id = config.upstream.form_id.as_deref()?.trim();
    if form_id.is_empty() {
        return None;
    }

    Some(FormBackendClient::new(UpstreamConfig {
        base_url: config.upstream.base_url.clone(),
        form_id: form_id.to_string(),
        request_timeout_ms: config.upstream.request_timeout_ms,
    }))
}
