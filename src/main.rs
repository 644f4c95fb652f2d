use anyhow::Context;
use n8n_relay::app::{create_app, init_tracing};
use n8n_relay::config::Config;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing/logging
    init_tracing();

    info!("Starting n8n relay...");

    let result = run().await;
    if let Err(e) = &result {
        error!("Relay stopped: {:#}", e);
    }
    result
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    info!("Configuration loaded: {:?}", config);

    let app = create_app(&config).context("Failed to create app")?;

    let listener = tokio::net::TcpListener::bind(&config.bind_address())
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_address()))?;
    info!("Server running on {}", config.server_url());
    info!("Routes: GET /health, POST /trigger-n8n-webhook, POST /trigger-workflow/");

    axum::serve(listener, app).await.context("Server error")?;
    info!("Server shutdown gracefully");
    Ok(())
}
