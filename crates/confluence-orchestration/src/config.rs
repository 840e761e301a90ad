//! Orchestrator configuration.

use std::time::Duration;

use confluence_core::constants::{
    DEFAULT_ENGINE_TIMEOUT, DEFAULT_MAX_WORKERS, DEFAULT_OVERALL_DEADLINE,
};

/// Limits applied to every engine batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestratorConfig {
    /// Number of worker threads engines run on.
    pub max_workers: usize,
    /// Time an engine may run once it has started.
    pub engine_timeout: Duration,
    /// Deadline for a whole batch, queueing included.
    pub overall_deadline: Duration,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            max_workers: DEFAULT_MAX_WORKERS,
            engine_timeout: DEFAULT_ENGINE_TIMEOUT,
            overall_deadline: DEFAULT_OVERALL_DEADLINE,
        }
    }
}

impl OrchestratorConfig {
    /// Normalize the configuration, replacing zero values with defaults.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.max_workers == 0 {
            self.max_workers = DEFAULT_MAX_WORKERS;
        }
        if self.engine_timeout.is_zero() {
            self.engine_timeout = DEFAULT_ENGINE_TIMEOUT;
        }
        if self.overall_deadline.is_zero() {
            self.overall_deadline = DEFAULT_OVERALL_DEADLINE;
        }
        self
    }
}
