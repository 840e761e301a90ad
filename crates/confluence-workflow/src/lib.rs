//! # confluence-workflow
//!
//! Named, reusable workflow templates. A workflow fixes an engine subset,
//! a scheduling mode and default options; running one produces the
//! per-engine results, their synthesis and workflow-specific guidance.

pub mod builtin;
pub mod definition;
pub mod error;
pub mod manager;
pub mod result;

pub use definition::{
    AnalysisDepth, ExecutionMode, ReportFormat, WorkflowDefinition, WorkflowOptions,
    WorkflowOverrides,
};
pub use error::WorkflowError;
pub use manager::WorkflowManager;
pub use result::WorkflowResult;
