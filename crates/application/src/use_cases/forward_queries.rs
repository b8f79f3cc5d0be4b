use crate::ports::{LineSource, QuerySink};
use crate::services::{LineParser, QueryBatcher};
use bindlog_collector_domain::{DomainError, LineFailure, ParseErrorKind, ParsedQuery, RawLine};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A batch the sink refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchError {
    /// 0-based position of the batch in delivery order.
    pub batch_index: usize,
    pub reason: String,
}

/// Outcome of one pass over a log source.
#[derive(Debug, Clone, Default)]
pub struct PipelineResult {
    pub total_lines: usize,
    pub parsed_count: usize,
    pub failed_count: usize,
    /// Batches the sink accepted.
    pub batches_sent: usize,
    pub batch_errors: Vec<BatchError>,
    pub failures: Vec<LineFailure>,
    pub records: Vec<ParsedQuery>,
}

impl PipelineResult {
    pub fn batches_attempted(&self) -> usize {
        self.batches_sent + self.batch_errors.len()
    }

    pub fn failures_by_kind(&self) -> BTreeMap<ParseErrorKind, usize> {
        let mut counts = BTreeMap::new();
        for failure in &self.failures {
            *counts.entry(failure.kind).or_insert(0) += 1;
        }
        counts
    }
}

/// Reads every line of a source, parses it, and delivers the parsed queries
/// to the sink batch by batch.
///
/// Bad lines and refused batches are recorded and skipped; only a source read
/// error ends the run early.
pub struct ForwardQueriesUseCase {
    sink: Arc<dyn QuerySink>,
    parser: LineParser,
    batcher: QueryBatcher,
}

impl ForwardQueriesUseCase {
    pub fn new(sink: Arc<dyn QuerySink>, parser: LineParser, batcher: QueryBatcher) -> Self {
        Self {
            sink,
            parser,
            batcher,
        }
    }

    pub async fn execute(&self, source: &mut dyn LineSource) -> Result<PipelineResult, DomainError> {
        let mut total_lines = 0usize;
        let mut records = Vec::new();
        let mut failures = Vec::new();

        while let Some(line) = source.next_line().await? {
            total_lines += 1;

            let failure = match line {
                RawLine::Text(text) => match self.parser.parse(&text) {
                    Ok(query) => {
                        records.push(query);
                        continue;
                    }
                    Err(kind) => LineFailure::new(total_lines, kind, text.trim()),
                },
                RawLine::Undecodable { content, reason } => {
                    debug!(line = total_lines, %reason, "Log line is not valid UTF-8");
                    LineFailure::new(total_lines, ParseErrorKind::Undecodable, content.trim())
                }
            };

            warn!(
                line = failure.line_number,
                kind = failure.kind.as_str(),
                raw = %failure.raw,
                "Skipping unparseable log line"
            );
            failures.push(failure);
        }

        debug!(
            total_lines,
            parsed = records.len(),
            failed = failures.len(),
            "Log source exhausted"
        );

        let mut batches_sent = 0usize;
        let mut batch_errors = Vec::new();

        for (batch_index, batch) in self.batcher.batches(&records).enumerate() {
            match self.sink.send_batch(batch).await {
                Ok(()) => {
                    batches_sent += 1;
                    debug!(batch = batch_index, size = batch.len(), "Batch delivered");
                }
                Err(e) => {
                    warn!(
                        batch = batch_index,
                        size = batch.len(),
                        error = %e,
                        "Batch delivery failed"
                    );
                    batch_errors.push(BatchError {
                        batch_index,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let result = PipelineResult {
            total_lines,
            parsed_count: records.len(),
            failed_count: failures.len(),
            batches_sent,
            batch_errors,
            failures,
            records,
        };

        info!(
            lines = result.total_lines,
            parsed = result.parsed_count,
            failed = result.failed_count,
            batches_sent = result.batches_sent,
            batches_failed = result.batch_errors.len(),
            chunk_size = self.batcher.chunk_size().get(),
            "Processed {} queries in {} batches",
            result.parsed_count,
            self.batcher.batch_count(result.parsed_count)
        );

        Ok(result)
    }
}
