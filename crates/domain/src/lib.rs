//! Bindlog Collector Domain Layer
pub mod config;
pub mod errors;
pub mod frequency;
pub mod parse_failure;
pub mod parsed_query;
pub mod raw_line;

pub use config::{CliOverrides, CollectorConfig, Config, ConfigError, LoggingConfig, PipelineConfig};
pub use errors::DomainError;
pub use frequency::{FrequencyEntry, FrequencyReport, ReportField};
pub use parse_failure::{LineFailure, ParseErrorKind};
pub use parsed_query::ParsedQuery;
pub use raw_line::RawLine;
