use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Errors raised while relaying a payload to the webhook
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    #[error("webhook request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("webhook returned {status} for url: {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("webhook response is not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Sends one JSON payload to the webhook and hands back its JSON reply
#[async_trait]
pub trait Forwarder: Send + Sync {
    async fn forward(&self, payload: &Value) -> Result<Value, ForwardError>;
}

/// Forwarder shared across request handlers
pub type SharedForwarder = Arc<dyn Forwarder>;

/// reqwest-backed forwarder for a single destination URL
#[derive(Debug, Clone)]
pub struct HttpForwarder {
    client: reqwest::Client,
    url: String,
}

impl HttpForwarder {
    /// Rejects destinations that are not absolute http(s) URLs
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let parsed = reqwest::Url::parse(url)
            .with_context(|| format!("Invalid webhook URL {:?}", url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("Webhook URL must use http or https, got {:?}", url);
        }
        Ok(Self::with_client(reqwest::Client::new(), url))
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Forwarder for HttpForwarder {
    async fn forward(&self, payload: &Value) -> Result<Value, ForwardError> {
        debug!("Forwarding payload to {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                warn!("Webhook request to {} failed: {}", self.url, e);
                ForwardError::Request(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Webhook {} responded with {}", self.url, status);
            return Err(ForwardError::Status {
                status,
                url: self.url.clone(),
            });
        }

        let body = response.json::<Value>().await.map_err(|e| {
            warn!("Webhook {} returned an unreadable body: {}", self.url, e);
            ForwardError::Decode(e)
        })?;

        info!("Webhook {} responded with {}", self.url, status);
        Ok(body)
    }
}
