//! The `Engine` trait and its error type.
//!
//! `Engine` is the contract every calculation engine implements. The
//! orchestrator never looks inside an engine: it hands over a shaped JSON
//! input, optional engine options, and a cancellation token, and receives
//! either a `CalculationResult` (which may itself report an engine-defined
//! failure) or an `EngineError`, the equivalent of the engine throwing.

use serde_json::Value;

use crate::engine_id::EngineId;
use crate::progress::CancellationToken;
use crate::result::CalculationResult;

/// Error raised while resolving or invoking an engine.
///
/// Deadlines are enforced by the orchestrator, which records an expired
/// engine as an `ENGINE_TIMEOUT` result rather than an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// The engine name does not match any known identifier.
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    /// The loader has no implementation for this engine.
    #[error("engine unavailable: {0}")]
    Unavailable(EngineId),

    /// The engine failed while calculating.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// The engine rejected its input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The engine observed cancellation and stopped.
    #[error("calculation cancelled")]
    Cancelled,

    /// The engine panicked.
    #[error("engine panicked: {0}")]
    Panicked(String),
}

/// A calculation engine.
pub trait Engine: Send + Sync {
    /// Run the calculation for the given input.
    fn calculate(
        &self,
        input: &Value,
        options: Option<&Value>,
        cancel: &CancellationToken,
    ) -> Result<CalculationResult, EngineError>;

    /// Identifier this engine answers to.
    fn id(&self) -> EngineId;
}
