//! Workflow errors.

use confluence_core::EngineId;

/// Errors raised by the workflow manager.
///
/// All of these indicate a configuration mistake; per-engine failures are
/// recorded in the result map instead.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("unknown workflow: {0}")]
    UnknownWorkflow(String),

    #[error("workflow {0} has no engines")]
    EmptyEngineList(String),

    #[error("workflow {workflow} references unavailable engine {engine}")]
    UnavailableEngine { workflow: String, engine: EngineId },

    #[error("{0} is a built-in workflow and cannot be redefined")]
    ReservedName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            WorkflowError::UnknownWorkflow("nope".into()).to_string(),
            "unknown workflow: nope"
        );
        let err = WorkflowError::UnavailableEngine {
            workflow: "mine".into(),
            engine: EngineId::Tarot,
        };
        assert_eq!(err.to_string(), "workflow mine references unavailable engine tarot");
    }
}
