//! The raw outcome of one comprehensive orchestration run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use confluence_core::{success_ratio, BirthData, EngineId, ResultMap};

/// Per-engine results of a comprehensive reading.
///
/// A reading carries no synthesis; pairing it with one is a separate step
/// that produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveReading {
    pub timestamp: DateTime<Utc>,
    pub birth_data: BirthData,
    /// Engines that were configured for this run, in request order.
    pub engines_used: Vec<EngineId>,
    pub results: ResultMap,
    /// Wall-clock duration of the whole run, in milliseconds.
    pub processing_time: f64,
}

impl ComprehensiveReading {
    /// Fraction of engines that succeeded.
    #[must_use]
    pub fn success_ratio(&self) -> f64 {
        success_ratio(&self.results)
    }

    /// Engines whose result is a failure.
    #[must_use]
    pub fn failed_engines(&self) -> Vec<EngineId> {
        self.results
            .iter()
            .filter(|(_, r)| !r.is_success())
            .map(|(id, _)| *id)
            .collect()
    }
}
