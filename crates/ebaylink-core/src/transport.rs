//! Trading API transport: the submission seam and its HTTP implementation.

use async_trait::async_trait;

use crate::config::ConnectorConfig;

/// Errors raised by the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The HTTP request could not be performed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API endpoint answered with a non-success HTTP status.
    #[error("API endpoint returned HTTP status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },
}

/// Submits one rendered request document and returns the raw response text.
///
/// Object-safe so writers can hold `&dyn TransportClient` and tests can
/// substitute scripted implementations.
#[async_trait]
pub trait TransportClient: Send + Sync {
    /// POST `body` for the given Trading API call name.
    async fn send(&self, body: &str, call_name: &str) -> Result<String, TransportError>;
}

/// HTTP transport for the Trading API.
///
/// Carries the per-application header set; the call name varies per
/// request and is supplied by the caller.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    dev_id: String,
    app_id: String,
    cert_id: String,
    site_id: u32,
    compatibility_level: u32,
}

impl HttpTransport {
    /// Create a transport for the configured environment and key set.
    #[must_use]
    pub fn new(config: &ConnectorConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint().to_owned(),
            dev_id: config.dev_id.clone(),
            app_id: config.app_id.clone(),
            cert_id: config.cert_id.clone(),
            site_id: config.site_id,
            compatibility_level: config.compatibility_level,
        }
    }

    /// Override the endpoint URL (used by tests against a local server).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl TransportClient for HttpTransport {
    async fn send(&self, body: &str, call_name: &str) -> Result<String, TransportError> {
        tracing::debug!(call_name, endpoint = %self.endpoint, "sending Trading API request");

        let response = self
            .client
            .post(&self.endpoint)
            .header(
                "X-EBAY-API-COMPATIBILITY-LEVEL",
                self.compatibility_level.to_string(),
            )
            .header("X-EBAY-API-DEV-NAME", &self.dev_id)
            .header("X-EBAY-API-APP-NAME", &self.app_id)
            .header("X-EBAY-API-CERT-NAME", &self.cert_id)
            .header("X-EBAY-API-CALL-NAME", call_name)
            .header("X-EBAY-API-SITEID", self.site_id.to_string())
            .header("Content-Type", "text/xml; charset=utf-8")
            .body(body.to_owned())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(call_name, status = status.as_u16(), "Trading API request failed");
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
