//! The workflow manager.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use parking_lot::RwLock;
use tracing::{info, warn};

use confluence_core::{BirthData, EngineId, EngineLoader};
use confluence_orchestration::{Orchestrator, OrchestratorConfig};
use confluence_synthesis::Synthesizer;

use crate::builtin::{self, BUILTIN_NAMES};
use crate::definition::{ExecutionMode, WorkflowDefinition, WorkflowOptions, WorkflowOverrides};
use crate::error::WorkflowError;
use crate::result::WorkflowResult;

/// Divination engine added when a workflow asks for divination and has none.
const FALLBACK_DIVINATION: EngineId = EngineId::Tarot;

/// Runs named workflows: orchestration, synthesis and recommendation text
/// in one call.
///
/// Each manager owns its own workflow table, seeded with the built-ins.
pub struct WorkflowManager {
    orchestrator: Arc<Orchestrator>,
    synthesizer: Synthesizer,
    workflows: RwLock<HashMap<String, WorkflowDefinition>>,
}

impl WorkflowManager {
    pub fn new(orchestrator: Arc<Orchestrator>) -> Self {
        let workflows = builtin::definitions()
            .into_iter()
            .map(|def| (def.name.clone(), def))
            .collect();
        Self {
            orchestrator,
            synthesizer: Synthesizer::default(),
            workflows: RwLock::new(workflows),
        }
    }

    /// Build a manager with a fresh orchestrator over `loader`.
    #[must_use]
    pub fn from_loader(loader: Arc<dyn EngineLoader>, config: OrchestratorConfig) -> Self {
        Self::new(Arc::new(Orchestrator::new(loader, config)))
    }

    #[must_use]
    pub fn with_synthesizer(mut self, synthesizer: Synthesizer) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    pub fn orchestrator(&self) -> &Arc<Orchestrator> {
        &self.orchestrator
    }

    pub fn synthesizer(&self) -> &Synthesizer {
        &self.synthesizer
    }

    /// Registered workflow names, sorted.
    pub fn available_workflows(&self) -> Vec<String> {
        let mut names: Vec<String> = self.workflows.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn workflow(&self, name: &str) -> Option<WorkflowDefinition> {
        self.workflows.read().get(name).cloned()
    }

    /// Run a workflow end to end.
    ///
    /// An unknown name fails before any engine is called. Individual engine
    /// failures do not fail the workflow; they show up in `results` and
    /// lower the synthesis coherence.
    pub fn run_workflow(
        &self,
        name: &str,
        birth: &BirthData,
        overrides: Option<&WorkflowOverrides>,
    ) -> Result<WorkflowResult, WorkflowError> {
        let start = Instant::now();
        let definition = self
            .workflow(name)
            .ok_or_else(|| WorkflowError::UnknownWorkflow(name.to_string()))?;

        let options = match overrides {
            Some(overrides) => definition.options.merged(overrides),
            None => definition.options.clone(),
        };
        let engines = engines_for(&definition.engines, &options);

        let configs = self
            .orchestrator
            .build_engine_configs(birth, &engines, &options.shape_context());
        let results = match definition.execution_mode {
            ExecutionMode::Parallel => self.orchestrator.run_parallel_engines(&configs),
            ExecutionMode::Sequential => self.orchestrator.run_sequential_engines(&configs),
        };
        let synthesis = self.synthesizer.synthesize_reading(&results);

        let result = WorkflowResult {
            workflow_name: definition.name.clone(),
            timestamp: Utc::now(),
            execution_mode: definition.execution_mode,
            engines_used: configs.iter().map(|c| c.name()).collect(),
            recommendations: builtin::recommendations(&definition.name),
            next_steps: builtin::next_steps(&definition.name),
            options,
            results,
            synthesis,
            processing_time: start.elapsed().as_secs_f64() * 1000.0,
        };
        info!(
            workflow = %result.workflow_name,
            engines = result.engines_used.len(),
            coherence = result.synthesis.field_signature.coherence,
            elapsed_ms = result.processing_time,
            "workflow finished"
        );
        Ok(result)
    }

    /// Register a workflow at runtime.
    ///
    /// Validated eagerly: the engine list must be non-empty, every engine
    /// must be available from the loader, and built-in names are reserved.
    /// Registering an existing custom name replaces it.
    pub fn create_custom_workflow(
        &self,
        name: &str,
        description: &str,
        engines: Vec<EngineId>,
        options: WorkflowOptions,
        execution_mode: ExecutionMode,
    ) -> Result<(), WorkflowError> {
        if BUILTIN_NAMES.contains(&name) {
            return Err(WorkflowError::ReservedName(name.to_string()));
        }
        if engines.is_empty() {
            return Err(WorkflowError::EmptyEngineList(name.to_string()));
        }
        let available = self.orchestrator.available_engines();
        if let Some(&engine) = engines.iter().find(|e| !available.contains(*e)) {
            return Err(WorkflowError::UnavailableEngine {
                workflow: name.to_string(),
                engine,
            });
        }

        let definition = WorkflowDefinition {
            name: name.to_string(),
            description: description.to_string(),
            engines,
            execution_mode,
            options,
        };
        if self.workflows.write().insert(name.to_string(), definition).is_some() {
            warn!(workflow = name, "replaced existing custom workflow");
        }
        Ok(())
    }
}

/// The definition's engines, plus a divination engine when requested and missing.
fn engines_for(engines: &[EngineId], options: &WorkflowOptions) -> Vec<EngineId> {
    let mut engines = engines.to_vec();
    if options.include_divination && !engines.iter().any(|e| e.is_divination()) {
        engines.push(FALLBACK_DIVINATION);
    }
    engines
}
