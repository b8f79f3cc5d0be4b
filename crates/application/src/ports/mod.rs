mod line_source;
mod query_sink;

pub use line_source::LineSource;
pub use query_sink::QuerySink;

// Re-export for convenience
pub use bindlog_collector_domain::{ParsedQuery, RawLine};
