//! # confluence-orchestration
//!
//! Engine execution under parallel and sequential scheduling, per-engine
//! failure isolation, and comprehensive readings.

pub mod config;
pub(crate) mod dispatch;
pub mod engine_selection;
pub mod interfaces;
pub mod orchestrator;
pub mod reading;

pub use config::OrchestratorConfig;
pub use interfaces::{EngineProgress, EngineStatus, ProgressReporter, ResultPresenter};
pub use orchestrator::Orchestrator;
pub use reading::ComprehensiveReading;
