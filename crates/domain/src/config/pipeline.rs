use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

use super::errors::ConfigError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Maximum number of queries per delivered batch.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl PipelineConfig {
    pub fn chunk_size(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.chunk_size).ok_or_else(|| {
            ConfigError::Validation("pipeline.chunk_size must be at least 1".to_string())
        })
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
        }
    }
}

fn default_chunk_size() -> usize {
    500
}
