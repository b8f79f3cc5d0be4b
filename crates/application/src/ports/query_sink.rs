use async_trait::async_trait;
use bindlog_collector_domain::{DomainError, ParsedQuery};

/// Delivery target for one batch of parsed queries.
#[async_trait]
pub trait QuerySink: Send + Sync {
    async fn send_batch(&self, batch: &[ParsedQuery]) -> Result<(), DomainError>;
}
