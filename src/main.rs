//! Text Record Service - Main Application Entry Point
//!
//! A small REST API that fingerprints submitted text and stores it in DynamoDB.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: Amazon DynamoDB via the AWS SDK, behind the `RecordSink` trait
//! - **Authentication**: Shared secret in the `X-API-Key` header
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Initialize logging
//! 3. Create the DynamoDB client and record sink
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;
mod state;
mod store;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use config::{Config, LogFormat};
use state::AppState;
use store::DynamoRecordSink;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes priority over the configured `LOG_LEVEL`.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config);
    tracing::info!(
        table = %config.table_name,
        port = config.server_port(),
        "Configuration loaded"
    );

    if config.api_key.is_empty() {
        tracing::warn!("API_KEY is not set; every request to /record will be rejected");
    }

    let client = store::create_client(config.dynamo_endpoint.as_deref()).await;
    let sink = DynamoRecordSink::new(client, config.table_name.clone());
    tracing::info!("DynamoDB client created");

    let app = routes::build_router(AppState::new(&config, Arc::new(sink)));

    let addr = format!("0.0.0.0:{}", config.server_port());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
