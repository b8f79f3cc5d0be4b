use bindlog_collector_domain::ParsedQuery;
use std::num::NonZeroUsize;
use std::slice::Chunks;

const DEFAULT_CHUNK_SIZE: usize = 500;

/// Splits the ordered record list into consecutive delivery batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryBatcher {
    chunk_size: NonZeroUsize,
}

impl QueryBatcher {
    pub fn new(chunk_size: NonZeroUsize) -> Self {
        Self { chunk_size }
    }

    pub fn chunk_size(&self) -> NonZeroUsize {
        self.chunk_size
    }

    /// Non-overlapping slices of `chunk_size` records in input order; the last
    /// one holds the remainder. Empty input yields no batches.
    pub fn batches<'a>(&self, records: &'a [ParsedQuery]) -> Chunks<'a, ParsedQuery> {
        records.chunks(self.chunk_size.get())
    }

    pub fn batch_count(&self, record_count: usize) -> usize {
        record_count.div_ceil(self.chunk_size.get())
    }
}

impl Default for QueryBatcher {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(DEFAULT_CHUNK_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}
