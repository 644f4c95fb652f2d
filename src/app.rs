use std::sync::Arc;

use axum::{Extension, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::forwarder::{HttpForwarder, SharedForwarder};
use crate::routes::create_routes;

/// Initialize tracing and logging for the application
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "n8n_relay=info,tower_http=debug,axum::rejection=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Create and configure the Axum application with all routes and middleware
pub fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    info!("Initializing application router");

    let forwarder = HttpForwarder::new(&config.webhook_url)?;
    info!("Relaying to webhook {}", forwarder.url());

    Ok(create_app_with_forwarder(Arc::new(forwarder)))
}

/// Build the router around an already constructed forwarder
pub fn create_app_with_forwarder(forwarder: SharedForwarder) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(Extension(forwarder)) // Shared across all requests
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
