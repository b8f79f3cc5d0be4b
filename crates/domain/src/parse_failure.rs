use std::fmt;
use thiserror::Error;

/// Why a log line did not produce a query record.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParseErrorKind {
    #[error("no date-time found in line")]
    MissingTimestamp,

    #[error("date-time found but not a valid calendar time")]
    InvalidTimestamp,

    #[error("no IPv4 client address found in line")]
    MissingClientIp,

    #[error("no record type after IN class")]
    MissingType,

    #[error("no name after query:")]
    MissingName,

    #[error("line is not valid UTF-8")]
    Undecodable,
}

impl ParseErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseErrorKind::MissingTimestamp => "MissingTimestamp",
            ParseErrorKind::InvalidTimestamp => "InvalidTimestamp",
            ParseErrorKind::MissingClientIp => "MissingClientIP",
            ParseErrorKind::MissingType => "MissingType",
            ParseErrorKind::MissingName => "MissingName",
            ParseErrorKind::Undecodable => "Undecodable",
        }
    }
}

/// A dropped line, kept for the end-of-run diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    /// 1-based position in the source.
    pub line_number: usize,
    pub kind: ParseErrorKind,
    pub raw: String,
}

impl LineFailure {
    pub fn new(line_number: usize, kind: ParseErrorKind, raw: impl Into<String>) -> Self {
        Self {
            line_number,
            kind,
            raw: raw.into(),
        }
    }
}

impl fmt::Display for LineFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {} ({})",
            self.line_number,
            self.kind.as_str(),
            self.raw
        )
    }
}
