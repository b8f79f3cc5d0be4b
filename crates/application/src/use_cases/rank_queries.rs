use crate::services::FrequencyAnalyzer;
use bindlog_collector_domain::{FrequencyReport, ParsedQuery, ReportField};

#[derive(Debug, Clone)]
pub struct QueryRankings {
    pub by_client_ip: FrequencyReport,
    pub by_name: FrequencyReport,
}

pub struct RankQueriesUseCase {
    analyzer: FrequencyAnalyzer,
}

impl RankQueriesUseCase {
    pub fn new(analyzer: FrequencyAnalyzer) -> Self {
        Self { analyzer }
    }

    pub fn execute(&self, records: &[ParsedQuery]) -> QueryRankings {
        QueryRankings {
            by_client_ip: self.analyzer.analyze(records, ReportField::ClientIp),
            by_name: self.analyzer.analyze(records, ReportField::Name),
        }
    }
}
