//! BMI USSD menu server
//!
//! Answers USSD gateway callbacks with a multilingual BMI calculator menu.
//! Each request carries the caller's whole input history; the dialog state
//! lives in a session store keyed by the gateway's session id.

mod api;
mod config;
mod controller;
mod dialog;
mod locale;
mod metric;
mod store;

use api::{create_router, AppState};
use config::AppConfig;
use controller::DialogController;
use std::net::SocketAddr;
use std::sync::Arc;
use store::SessionStore;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bmi_ussd=info,tower_http=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        port = config.port,
        store = config.store.kind.as_str(),
        ttl_secs = config.session_ttl.as_secs(),
        "Configuration loaded"
    );

    // Session storage
    let backend = store::open(&config.store);
    let _sweeper = store::spawn_sweeper(backend.clone(), config.sweep_interval);
    let controller = DialogController::new(SessionStore::new(backend), config.session_ttl);

    let state = AppState::new(Arc::new(controller));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new()
        .gzip(true)
        .br(true)
        .deflate(true)
        .zstd(true);

    let app = create_router(state)
        .layer(cors)
        .layer(compression)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("BMI USSD server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
