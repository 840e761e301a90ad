//! Orchestration interfaces.

use std::time::Duration;

use confluence_core::{EngineId, ResultMap};

/// Lifecycle stage of one engine within a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    Started,
    Succeeded,
    Failed,
    TimedOut,
}

/// Progress event emitted by the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineProgress {
    pub engine: EngineId,
    pub status: EngineStatus,
    /// Engines settled so far in this run.
    ///
    /// A sequential run counts across all of its steps.
    pub completed: usize,
    /// Engines in this run.
    pub total: usize,
    /// Time spent in the engine; zero for `Started`.
    pub elapsed: Duration,
}

/// Trait for reporting progress to the user.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress update.
    fn report(&self, update: &EngineProgress);

    /// Report that a parallel or sequential run has settled.
    ///
    /// Called once per run, after the last engine.
    fn complete(&self);
}

/// Trait for presenting per-engine results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present the result map of a run.
    fn present_results(&self, results: &ResultMap, elapsed: Duration);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Null progress reporter (does nothing).
pub struct NullProgressReporter;

impl ProgressReporter for NullProgressReporter {
    fn report(&self, _update: &EngineProgress) {}
    fn complete(&self) {}
}
