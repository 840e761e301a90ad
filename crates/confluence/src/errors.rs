//! Error handling and exit codes.

use confluence_core::{exit_codes, EngineError};
use confluence_workflow::WorkflowError;

/// Failures of the application layer itself.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bad flags, unreadable input or no engine source.
    #[error("{0}")]
    Config(String),

    /// Every engine in the run failed.
    #[error("all {total} engines failed ({timed_out} timed out)")]
    AllEnginesFailed { total: usize, timed_out: usize },
}

/// Map an error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(err) = err.downcast_ref::<AppError>() {
        return match err {
            AppError::Config(_) => exit_codes::ERROR_CONFIG,
            AppError::AllEnginesFailed { timed_out, .. } if *timed_out > 0 => exit_codes::ERROR_TIMEOUT,
            AppError::AllEnginesFailed { .. } => exit_codes::ERROR_GENERIC,
        };
    }
    if err.downcast_ref::<WorkflowError>().is_some() {
        return exit_codes::ERROR_CONFIG;
    }
    if let Some(err) = err.downcast_ref::<EngineError>() {
        return match err {
            EngineError::UnknownEngine(_) | EngineError::InvalidInput(_) => exit_codes::ERROR_CONFIG,
            _ => exit_codes::ERROR_GENERIC,
        };
    }
    exit_codes::ERROR_GENERIC
}
