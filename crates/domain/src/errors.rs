use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Log source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Batch delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("Invalid extraction pattern: {0}")]
    InvalidPattern(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
