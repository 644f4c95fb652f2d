use crate::handlers::{health_check, trigger_n8n_webhook, trigger_workflow};
use axum::{Router, routing::get, routing::post};

/// Creates and configures all application routes
pub fn create_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/trigger-n8n-webhook", post(trigger_n8n_webhook))
        .route("/trigger-workflow/", post(trigger_workflow))
}
