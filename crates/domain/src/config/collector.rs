use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Remote collection endpoint the parsed queries are posted to.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CollectorConfig {
    /// Base URL, e.g. `https://api.example.com`.
    #[serde(default)]
    pub host: String,

    #[serde(default)]
    pub collector_id: String,

    #[serde(default)]
    pub client_key: String,

    /// Per-request timeout for a batch POST.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl CollectorConfig {
    /// `{host}/collectors/{collector_id}/dns/queries`, without the key.
    pub fn queries_url(&self) -> String {
        format!(
            "{}/collectors/{}/dns/queries",
            self.host.trim_end_matches('/'),
            self.collector_id
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            collector_id: String::new(),
            client_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    20
}
