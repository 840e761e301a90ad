//! # confluence-core
//!
//! Shared building blocks for Confluence: the `Engine` contract, engine
//! identifiers, per-engine results, the engine-instance cache, and the
//! family input shapers that turn a birth-data bag into engine inputs.

pub mod birth_data;
pub mod constants;
pub mod engine;
pub mod engine_config;
pub mod engine_id;
pub mod progress;
pub mod registry;
pub mod result;
pub mod shaping;

// Re-exports
pub use birth_data::BirthData;
pub use constants::{
    exit_codes, DEFAULT_ENGINE_TIMEOUT, DEFAULT_MAX_WORKERS, DEFAULT_OVERALL_DEADLINE,
    DEFAULT_READING_ENGINES, ENGINE_ERROR_CODE, ENGINE_TIMEOUT_CODE, PREVIOUS_RESULTS_KEY,
};
pub use engine::{Engine, EngineError};
pub use engine_config::EngineConfig;
pub use engine_id::{EngineFamily, EngineId};
pub use progress::CancellationToken;
pub use registry::{EngineCache, EngineLoader, StaticLoader};
pub use result::{success_ratio, CalculationError, CalculationResult, ResultMap};
pub use shaping::{InputShaper, ShapeContext, ShaperRegistry};
