//! Search configuration

use serde::{Deserialize, Serialize};

/// Search index configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Index writer heap size in bytes (default: 50MB)
    #[serde(default = "default_writer_heap_size")]
    pub writer_heap_size: usize,

    /// Maximum results returned per query
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            writer_heap_size: default_writer_heap_size(),
            max_results: default_max_results(),
        }
    }
}

fn default_writer_heap_size() -> usize {
    50_000_000
}

fn default_max_results() -> usize {
    1000
}
