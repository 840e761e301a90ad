//! Constants for orchestration defaults and failure codes.

use std::time::Duration;

use crate::engine_id::EngineId;

/// Code recorded when an engine throws (returns `Err`) or panics.
pub const ENGINE_ERROR_CODE: &str = "ENGINE_ERROR";

/// Code recorded when an engine misses its deadline.
pub const ENGINE_TIMEOUT_CODE: &str = "ENGINE_TIMEOUT";

/// Suggestion attached to every wrapped engine error.
pub const ENGINE_ERROR_SUGGESTION: &str = "Check input parameters";

/// Key under which sequential runs inject the results accumulated so far.
pub const PREVIOUS_RESULTS_KEY: &str = "previousResults";

/// Default size of the engine worker pool.
pub const DEFAULT_MAX_WORKERS: usize = 4;

/// Default time an individual engine may run once started.
pub const DEFAULT_ENGINE_TIMEOUT: Duration = Duration::from_secs(30);

/// Default deadline for a whole parallel or sequential batch.
pub const DEFAULT_OVERALL_DEADLINE: Duration = Duration::from_secs(120);

/// Engines used by a comprehensive reading when the caller names none.
pub const DEFAULT_READING_ENGINES: [EngineId; 9] = [
    EngineId::Numerology,
    EngineId::Biorhythm,
    EngineId::HumanDesign,
    EngineId::Vimshottari,
    EngineId::GeneKeys,
    EngineId::Tarot,
    EngineId::IChing,
    EngineId::Enneagram,
    EngineId::SacredGeometry,
];

/// Exit codes for the command-line front end.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Every engine failed and at least one of them timed out.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Invalid configuration (unknown workflow, unknown engine, bad input file).
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reading_engines_are_distinct() {
        let mut ids = DEFAULT_READING_ENGINES.to_vec();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 9);
        assert!(!ids.contains(&EngineId::SigilForge));
    }

    #[test]
    fn overall_deadline_exceeds_engine_timeout() {
        assert!(DEFAULT_OVERALL_DEADLINE > DEFAULT_ENGINE_TIMEOUT);
    }
}
