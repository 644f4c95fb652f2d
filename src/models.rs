use serde::Serialize;
use serde_json::{Map, Value};

/// Body accepted by both trigger endpoints: any JSON object, no schema
pub type InboundPayload = Map<String, Value>;

/// Field relayed by the chat trigger endpoint
pub const CHAT_INPUT_FIELD: &str = "chatInput";

/// Builds the `{chatInput: ...}` body sent to the webhook.
/// A missing field is relayed as `null`.
pub fn chat_input_envelope(payload: &InboundPayload) -> Value {
    let chat_input = payload.get(CHAT_INPUT_FIELD).cloned().unwrap_or(Value::Null);

    let mut outbound = Map::new();
    outbound.insert(CHAT_INPUT_FIELD.to_string(), chat_input);
    Value::Object(outbound)
}

/// Response payload for the health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Service is healthy".to_string(),
        }
    }
}
