use bindlog_collector_application::ports::QuerySink;
use bindlog_collector_application::services::{FrequencyAnalyzer, LineParser, QueryBatcher};
use bindlog_collector_application::use_cases::{ForwardQueriesUseCase, RankQueriesUseCase};
use bindlog_collector_domain::Config;
use bindlog_collector_infrastructure::sink::HttpQuerySink;
use std::sync::Arc;
use tracing::info;

pub struct UseCases {
    pub forward_queries: Arc<ForwardQueriesUseCase>,
    pub rank_queries: Arc<RankQueriesUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let sink = HttpQuerySink::new(&config.collector)?;
        info!(
            url = sink.url(),
            timeout_secs = config.collector.timeout_secs,
            "Collector endpoint configured"
        );
        let sink: Arc<dyn QuerySink> = Arc::new(sink);

        let batcher = QueryBatcher::new(config.pipeline.chunk_size()?);

        Ok(Self {
            forward_queries: Arc::new(ForwardQueriesUseCase::new(
                sink,
                LineParser::new()?,
                batcher,
            )),
            rank_queries: Arc::new(RankQueriesUseCase::new(FrequencyAnalyzer::new())),
        })
    }
}
