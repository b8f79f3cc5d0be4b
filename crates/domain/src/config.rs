pub mod collector;
pub mod errors;
pub mod logging;
pub mod pipeline;
pub mod root;

pub use collector::CollectorConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use pipeline::PipelineConfig;
pub use root::{CliOverrides, Config};
