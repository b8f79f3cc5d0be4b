use bindlog_collector_domain::{FrequencyEntry, FrequencyReport, ParsedQuery, ReportField};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Value counts with dense ranking over a set of parsed queries.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrequencyAnalyzer;

impl FrequencyAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Entries come out by descending count; equal counts keep first-seen order
    /// and share a rank.
    pub fn analyze(&self, records: &[ParsedQuery], field: ReportField) -> FrequencyReport {
        if records.is_empty() {
            return FrequencyReport::empty(field);
        }

        let mut positions: FxHashMap<&str, usize> = FxHashMap::default();
        let mut groups: Vec<(&str, u64)> = Vec::new();

        for record in records {
            let value = field_value(record, field);
            match positions.entry(value) {
                Entry::Occupied(slot) => groups[*slot.get()].1 += 1,
                Entry::Vacant(slot) => {
                    slot.insert(groups.len());
                    groups.push((value, 1));
                }
            }
        }

        // Stable sort keeps first-seen order among ties.
        groups.sort_by(|a, b| b.1.cmp(&a.1));

        let total_records = records.len() as u64;
        let mut rank = 0u32;
        let mut previous_count = None;

        let entries = groups
            .into_iter()
            .map(|(value, count)| {
                if previous_count != Some(count) {
                    rank += 1;
                    previous_count = Some(count);
                }
                FrequencyEntry {
                    value: value.to_string(),
                    count,
                    rank,
                    percentage: format_percentage(count, total_records),
                }
            })
            .collect();

        FrequencyReport {
            field,
            total_records,
            entries,
        }
    }
}

fn field_value(record: &ParsedQuery, field: ReportField) -> &str {
    match field {
        ReportField::ClientIp => &record.client_ip,
        ReportField::Name => &record.name,
    }
}

fn format_percentage(count: u64, total: u64) -> String {
    let percentage = count as f64 / total as f64 * 100.0;
    // Halves go to the even neighbour: 1 of 32 is "3.12%".
    let rounded = (percentage * 100.0).round_ties_even() / 100.0;
    format!("{:.2}%", rounded)
}
