//! Outcome of one workflow run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use confluence_core::{success_ratio, EngineId, ResultMap};
use confluence_synthesis::SynthesisResult;

use crate::definition::{ExecutionMode, WorkflowOptions};

/// Outcome of one workflow run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowResult {
    pub workflow_name: String,
    pub timestamp: DateTime<Utc>,
    /// Definition defaults with the caller's overrides applied.
    pub options: WorkflowOptions,
    pub execution_mode: ExecutionMode,
    pub engines_used: Vec<EngineId>,
    pub results: ResultMap,
    pub synthesis: SynthesisResult,
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
    /// Wall-clock duration of the whole run, in milliseconds.
    pub processing_time: f64,
}

impl WorkflowResult {
    #[must_use]
    pub fn success_ratio(&self) -> f64 {
        success_ratio(&self.results)
    }
}
