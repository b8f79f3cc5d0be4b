pub mod forward_queries;
pub mod rank_queries;

pub use forward_queries::{BatchError, ForwardQueriesUseCase, PipelineResult};
pub use rank_queries::{QueryRankings, RankQueriesUseCase};
