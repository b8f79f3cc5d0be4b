//! Field extraction for BIND query log lines.
//!
//! Each field is an independent pattern match over the trimmed line, e.g.
//!
//! ```text
//! 06-Jan-2021 14:37:02.228 client 192.168.0.103#53: query: www.example.com IN A
//! ```
//!
//! yields timestamp `2021-01-06T14:37:02Z`, client `192.168.0.103`, type `A`
//! and name `www.example.com`. A line missing any field is rejected; no field
//! is ever defaulted.

use bindlog_collector_domain::{DomainError, ParseErrorKind, ParsedQuery};
use chrono::NaiveDateTime;
use fancy_regex::Regex;

const TIMESTAMP_PATTERN: &str = r"\d{1,2}-[A-Za-z]{3}-\d{4} \d{2}:\d{2}:\d{2}\.\d{3}";
const CLIENT_IP_PATTERN: &str = r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}";
const RECORD_TYPE_PATTERN: &str = r"\bIN\s(\S+)";
const NAME_PATTERN: &str = r"query:\s(\S+)";

/// `06-Jan-2021 14:37:02.228`
const LOG_TIME_FORMAT: &str = "%d-%b-%Y %H:%M:%S%.f";
/// `2021-01-06T14:37:02Z`
const OUTPUT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub struct LineParser {
    timestamp: Regex,
    client_ip: Regex,
    record_type: Regex,
    name: Regex,
}

impl LineParser {
    pub fn new() -> Result<Self, DomainError> {
        Ok(Self {
            timestamp: compile(TIMESTAMP_PATTERN)?,
            client_ip: compile(CLIENT_IP_PATTERN)?,
            record_type: compile(RECORD_TYPE_PATTERN)?,
            name: compile(NAME_PATTERN)?,
        })
    }

    /// Extracts a query record, reporting the first missing field otherwise.
    pub fn parse(&self, line: &str) -> Result<ParsedQuery, ParseErrorKind> {
        let line = line.trim();

        let timestamp = self.extract_timestamp(line)?;
        let client_ip =
            first_match(&self.client_ip, line).ok_or(ParseErrorKind::MissingClientIp)?;
        let record_type =
            first_group(&self.record_type, line).ok_or(ParseErrorKind::MissingType)?;
        let name = first_group(&self.name, line).ok_or(ParseErrorKind::MissingName)?;

        Ok(ParsedQuery::new(timestamp, client_ip, record_type, name))
    }

    fn extract_timestamp(&self, line: &str) -> Result<String, ParseErrorKind> {
        let raw = first_match(&self.timestamp, line).ok_or(ParseErrorKind::MissingTimestamp)?;

        // Sub-second precision is dropped and the time is taken as UTC as-is.
        NaiveDateTime::parse_from_str(raw, LOG_TIME_FORMAT)
            .map(|dt| dt.format(OUTPUT_TIME_FORMAT).to_string())
            .map_err(|_| ParseErrorKind::InvalidTimestamp)
    }
}

fn compile(pattern: &str) -> Result<Regex, DomainError> {
    Regex::new(pattern).map_err(|e| DomainError::InvalidPattern(format!("{}: {}", pattern, e)))
}

fn first_match<'t>(regex: &Regex, line: &'t str) -> Option<&'t str> {
    regex.find(line).ok().flatten().map(|m| m.as_str())
}

fn first_group<'t>(regex: &Regex, line: &'t str) -> Option<&'t str> {
    regex
        .captures(line)
        .ok()
        .flatten()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
