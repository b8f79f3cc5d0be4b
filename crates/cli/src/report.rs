//! Console output printed after a run.

use bindlog_collector_application::use_cases::{PipelineResult, QueryRankings};
use bindlog_collector_domain::FrequencyReport;
use std::fmt::Write;

pub fn print_summary(result: &PipelineResult) {
    print!("{}", render_summary(result));
}

pub fn print_rankings(rankings: &QueryRankings) {
    println!("{}", render_report(&rankings.by_client_ip));
    println!("{}", render_report(&rankings.by_name));
}

fn render_summary(result: &PipelineResult) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Processed {} lines: {} parsed, {} failed",
        result.total_lines, result.parsed_count, result.failed_count
    );
    for (kind, count) in result.failures_by_kind() {
        let _ = writeln!(out, "  {:<18} {}", kind.as_str(), count);
    }

    let _ = writeln!(
        out,
        "Sent {} of {} batches",
        result.batches_sent,
        result.batches_attempted()
    );
    for error in &result.batch_errors {
        let _ = writeln!(out, "  batch {}: {}", error.batch_index, error.reason);
    }

    out
}

fn render_report(report: &FrequencyReport) -> String {
    let header = report.field.as_str();
    let width = report
        .entries
        .iter()
        .map(|entry| entry.value.len())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<width$}  {:>8}  {:>5}  {:>10}",
        header,
        "count",
        "rank",
        "percentage",
        width = width
    );

    if report.is_empty() {
        let _ = writeln!(out, "(no queries)");
        return out;
    }

    for entry in &report.entries {
        let _ = writeln!(
            out,
            "{:<width$}  {:>8}  {:>5}  {:>10}",
            entry.value,
            entry.count,
            entry.rank,
            entry.percentage,
            width = width
        );
    }

    out
}
