#![allow(dead_code)]

use async_trait::async_trait;
use bindlog_collector_application::ports::{LineSource, QuerySink};
use bindlog_collector_domain::{DomainError, ParsedQuery, RawLine};
use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};

pub struct MockLineSource {
    lines: VecDeque<RawLine>,
    fail_after: Option<usize>,
    served: usize,
}

impl MockLineSource {
    pub fn new(lines: Vec<RawLine>) -> Self {
        Self {
            lines: lines.into(),
            fail_after: None,
            served: 0,
        }
    }

    pub fn from_text(lines: &[&str]) -> Self {
        Self::new(lines.iter().map(|l| RawLine::text(*l)).collect())
    }

    /// Serve `count` lines, then report the source as unreadable.
    pub fn failing_after(mut self, count: usize) -> Self {
        self.fail_after = Some(count);
        self
    }
}

#[async_trait]
impl LineSource for MockLineSource {
    async fn next_line(&mut self) -> Result<Option<RawLine>, DomainError> {
        if self.fail_after == Some(self.served) {
            return Err(DomainError::SourceUnavailable(
                "mock source read failure".to_string(),
            ));
        }
        self.served += 1;
        Ok(self.lines.pop_front())
    }
}

#[derive(Clone, Default)]
pub struct MockQuerySink {
    batches: Arc<Mutex<Vec<Vec<ParsedQuery>>>>,
    failing_batches: Arc<Mutex<HashSet<usize>>>,
    calls: Arc<Mutex<usize>>,
}

impl MockQuerySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the batch at `index` (0-based call order).
    pub fn fail_batch(&self, index: usize) {
        self.failing_batches.lock().unwrap().insert(index);
    }

    pub fn delivered(&self) -> Vec<Vec<ParsedQuery>> {
        self.batches.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl QuerySink for MockQuerySink {
    async fn send_batch(&self, batch: &[ParsedQuery]) -> Result<(), DomainError> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            let index = *calls;
            *calls += 1;
            index
        };

        if self.failing_batches.lock().unwrap().contains(&index) {
            return Err(DomainError::DeliveryFailed(format!(
                "HTTP 500 for batch {}",
                index
            )));
        }

        self.batches.lock().unwrap().push(batch.to_vec());
        Ok(())
    }
}

pub fn query(n: usize) -> ParsedQuery {
    ParsedQuery::new(
        "2021-01-06T14:37:02Z",
        format!("10.0.{}.{}", n / 256, n % 256),
        "A",
        format!("host-{}.example.com", n),
    )
}

pub fn log_line(client_ip: &str, name: &str, record_type: &str) -> String {
    format!(
        "06-Jan-2021 14:37:02.228 queries: info: client @0x7f1c3c0dd1d8 {}#53 ({}): query: {} IN {} + (10.0.0.1)",
        client_ip, name, name, record_type
    )
}
