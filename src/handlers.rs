use crate::envelope::{CHAT_TRIGGER, WORKFLOW_TRIGGER, map_outcome};
use crate::error::AppResult;
use crate::extract::JsonObject;
use crate::forwarder::SharedForwarder;
use crate::models::{CHAT_INPUT_FIELD, HealthResponse, chat_input_envelope};
use axum::{Extension, response::Json as ResponseJson, response::Response};
use serde_json::Value;
use tracing::{debug, info};

/// Health check handler
/// Returns the service status and health information
pub async fn health_check() -> AppResult<ResponseJson<HealthResponse>> {
    debug!("Health check endpoint called");

    let response = HealthResponse::ok();

    info!("Health check successful");
    Ok(ResponseJson(response))
}

/// Relays `chatInput` to the webhook.
/// Failures are reported as a 200 `{status: "error"}` envelope.
pub async fn trigger_n8n_webhook(
    Extension(forwarder): Extension<SharedForwarder>,
    JsonObject(payload): JsonObject,
) -> Response {
    info!(
        "Chat trigger called (chatInput present: {})",
        payload.contains_key(CHAT_INPUT_FIELD)
    );

    let outbound = chat_input_envelope(&payload);
    let outcome = forwarder.forward(&outbound).await;
    map_outcome(&CHAT_TRIGGER, outcome)
}

/// Relays the whole body to the webhook.
/// Failures surface as HTTP 500 with `{detail}`.
pub async fn trigger_workflow(
    Extension(forwarder): Extension<SharedForwarder>,
    JsonObject(payload): JsonObject,
) -> Response {
    info!("Workflow trigger called with {} field(s)", payload.len());

    let outbound = Value::Object(payload);
    let outcome = forwarder.forward(&outbound).await;
    map_outcome(&WORKFLOW_TRIGGER, outcome)
}
