use serde::{Deserialize, Serialize};

/// One DNS query event extracted from a BIND log line.
///
/// Serializes to the collector wire shape:
/// `{"timestamp": "...", "client_ip": "...", "type": "...", "name": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// `YYYY-MM-DDTHH:MM:SSZ`, UTC.
    pub timestamp: String,
    pub client_ip: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
}

impl ParsedQuery {
    pub fn new(
        timestamp: impl Into<String>,
        client_ip: impl Into<String>,
        record_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            client_ip: client_ip.into(),
            record_type: record_type.into(),
            name: name.into(),
        }
    }
}
