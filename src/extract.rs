//! Body extractor for the trigger endpoints.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};

use crate::error::AppError;
use crate::models::InboundPayload;

/// A JSON object body.
///
/// Unlike `axum::Json`, a request without `Content-Type` is still parsed as
/// JSON. Only an explicit non-JSON content type is refused.
#[derive(Debug)]
pub struct JsonObject(pub InboundPayload);

/// `None` when no content type was sent
fn declared_json(headers: &HeaderMap) -> Option<bool> {
    let value = headers.get(header::CONTENT_TYPE)?;
    let essence = value
        .to_str()
        .unwrap_or_default()
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    Some(essence == "application/json" || essence.ends_with("+json"))
}

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if declared_json(req.headers()) == Some(false) {
            return Err(AppError::UnsupportedMediaType(
                "Expected a JSON request body".to_string(),
            ));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::InvalidPayload(e.body_text()))?;

        serde_json::from_slice::<InboundPayload>(&bytes)
            .map(JsonObject)
            .map_err(|e| AppError::InvalidPayload(format!("Body must be a JSON object: {}", e)))
    }
}
