//! Shapes webhook outcomes into the `{status, ...}` envelopes returned to callers.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::forwarder::ForwardError;

/// How a route reports a failed webhook call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// 200 with `{status: "error", message}`
    ReturnErrorEnvelope,
    /// 500 with `{detail}`
    RaiseHttpError,
}

/// Per-route envelope contract
#[derive(Debug, Clone, Copy)]
pub struct RelayRoute {
    /// Key the webhook reply is placed under on success
    pub success_key: &'static str,
    pub policy: ErrorPolicy,
}

/// `POST /trigger-n8n-webhook`
pub const CHAT_TRIGGER: RelayRoute = RelayRoute {
    success_key: "n8n_response",
    policy: ErrorPolicy::ReturnErrorEnvelope,
};

/// `POST /trigger-workflow/`
pub const WORKFLOW_TRIGGER: RelayRoute = RelayRoute {
    success_key: "data",
    policy: ErrorPolicy::RaiseHttpError,
};

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// `{status: "success", <key>: reply}`
pub fn success_envelope(key: &str, reply: Value) -> Value {
    let mut envelope = Map::new();
    envelope.insert("status".to_string(), Value::from(STATUS_SUCCESS));
    envelope.insert(key.to_string(), reply);
    Value::Object(envelope)
}

/// `{status: "error", message}`
pub fn error_envelope(message: impl Into<String>) -> Value {
    let mut envelope = Map::new();
    envelope.insert("status".to_string(), Value::from(STATUS_ERROR));
    envelope.insert("message".to_string(), Value::String(message.into()));
    Value::Object(envelope)
}

/// Turns the outcome of one webhook call into the HTTP response for `route`
pub fn map_outcome(route: &RelayRoute, outcome: Result<Value, ForwardError>) -> Response {
    match outcome {
        Ok(reply) => Json(success_envelope(route.success_key, reply)).into_response(),
        Err(err) => match route.policy {
            ErrorPolicy::ReturnErrorEnvelope => Json(error_envelope(err.to_string())).into_response(),
            ErrorPolicy::RaiseHttpError => AppError::from(err).into_response(),
        },
    }
}
