//! Configuration for the pipeline service

use serde::{Deserialize, Serialize};

/// Pipeline service configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Maximum operations accepted in a single run
    pub max_operations: usize,
    /// Emit a debug record for every applied operation
    pub log_steps: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_operations: 1024,
            log_steps: true,
        }
    }
}
