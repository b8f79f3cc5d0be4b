use async_trait::async_trait;
use bindlog_collector_domain::{DomainError, RawLine};

/// Sequential reader over the lines of a query log.
#[async_trait]
pub trait LineSource: Send {
    /// Next line, or `None` once the source is exhausted.
    ///
    /// An `Err` means the source itself can no longer be read and ends the run.
    async fn next_line(&mut self) -> Result<Option<RawLine>, DomainError>;
}
