use serde::{Deserialize, Serialize};
use std::fmt;

/// Query field a frequency report is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportField {
    ClientIp,
    Name,
}

impl ReportField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportField::ClientIp => "client_ip",
            ReportField::Name => "name",
        }
    }
}

impl fmt::Display for ReportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub value: String,
    pub count: u64,
    /// Dense rank, 1 for the most frequent value(s).
    pub rank: u32,
    /// Share of all records, e.g. `"41.67%"`.
    pub percentage: String,
}

/// Value counts for one field, ordered by descending count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyReport {
    pub field: ReportField,
    pub total_records: u64,
    pub entries: Vec<FrequencyEntry>,
}

impl FrequencyReport {
    pub fn empty(field: ReportField) -> Self {
        Self {
            field,
            total_records: 0,
            entries: Vec::new(),
        }
    }

    pub fn get(&self, value: &str) -> Option<&FrequencyEntry> {
        self.entries.iter().find(|entry| entry.value == value)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
