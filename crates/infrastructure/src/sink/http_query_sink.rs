//! Delivery of parsed queries to the collector API.
//!
//! Wire format (HTTP):
//! ```text
//! POST {host}/collectors/{collector_id}/dns/queries?key={client_key}
//! Content-Type: application/json
//!
//! [{"timestamp": "...", "client_ip": "...", "type": "...", "name": "..."}, ...]
//! ```

use async_trait::async_trait;
use bindlog_collector_application::ports::QuerySink;
use bindlog_collector_domain::{CollectorConfig, DomainError, ParsedQuery};
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

const JSON_CONTENT_TYPE: &str = "application/json";

const USER_AGENT: &str = concat!("bindlog-collector/", env!("CARGO_PKG_VERSION"));

pub struct HttpQuerySink {
    client: reqwest::Client,
    url: String,
    client_key: String,
}

impl HttpQuerySink {
    pub fn new(config: &CollectorConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()
            .map_err(|e| DomainError::ConfigError(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.queries_url(),
            client_key: config.client_key.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl QuerySink for HttpQuerySink {
    async fn send_batch(&self, batch: &[ParsedQuery]) -> Result<(), DomainError> {
        let body = serde_json::to_vec(batch)
            .map_err(|e| DomainError::DeliveryFailed(format!("failed to encode batch: {}", e)))?;

        debug!(url = %self.url, queries = batch.len(), bytes = body.len(), "Posting batch");

        // without_url keeps the client key out of error messages.
        let response = self
            .client
            .post(&self.url)
            .query(&[("key", self.client_key.as_str())])
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                DomainError::DeliveryFailed(format!(
                    "request to {} failed: {}",
                    self.url,
                    e.without_url()
                ))
            })?;

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                let e = e.without_url();
                debug!(
                    status = status.as_u16(),
                    error = %e,
                    "Failed to read collector response body"
                );
                format!("<body unreadable: {}>", e)
            }
        };

        if !status.is_success() {
            return Err(DomainError::DeliveryFailed(format!(
                "HTTP {} from {}: {}",
                status.as_u16(),
                self.url,
                text
            )));
        }

        info!(
            queries = batch.len(),
            status = status.as_u16(),
            response = %text,
            "Sent queries to collector"
        );

        Ok(())
    }
}
