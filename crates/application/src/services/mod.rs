pub mod frequency_analyzer;
pub mod line_parser;
pub mod query_batcher;

pub use frequency_analyzer::FrequencyAnalyzer;
pub use line_parser::LineParser;
pub use query_batcher::QueryBatcher;
