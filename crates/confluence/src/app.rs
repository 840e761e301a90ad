//! Application entry point and dispatch.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use confluence_cli::output::{to_json, write_json};
use confluence_cli::presenter::CLIResultPresenter;
use confluence_cli::progress::CLIProgressReporter;
use confluence_core::{BirthData, EngineId, EngineLoader, ResultMap, StaticLoader, ENGINE_TIMEOUT_CODE};
use confluence_orchestration::engine_selection::select_engines;
use confluence_orchestration::{Orchestrator, OrchestratorConfig};
use confluence_synthesis::Synthesizer;
use confluence_workflow::WorkflowManager;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::fixtures::FixtureLoader;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        confluence_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if config.list_workflows {
        return list_workflows(config);
    }
    if config.list_engines {
        return list_engines(config);
    }
    if let Some(path) = &config.synthesize {
        return run_synthesis(config, path);
    }

    let manager = build_manager(config)?;
    let birth = read_birth_data(config.input.as_deref())?;
    match &config.workflow {
        Some(name) => run_workflow(config, &manager, name, &birth),
        None => run_reading(config, &manager, &birth),
    }
}

fn build_manager(config: &AppConfig) -> Result<WorkflowManager> {
    let dir = config.fixtures.as_ref().ok_or_else(|| {
        AppError::Config("no engine source: pass --fixtures <dir> or set CONFLUENCE_FIXTURES".into())
    })?;
    if !dir.is_dir() {
        return Err(AppError::Config(format!("fixture directory not found: {}", dir.display())).into());
    }

    let loader: Arc<dyn EngineLoader> = Arc::new(FixtureLoader::new(dir));
    let mut orchestrator = Orchestrator::new(loader, config.orchestrator_config()?);
    if !config.quiet && !config.json {
        orchestrator = orchestrator.with_reporter(Arc::new(CLIProgressReporter::new()));
    }
    info!(
        fixtures = %dir.display(),
        available = orchestrator.available_engines().len(),
        "engine source ready"
    );
    Ok(WorkflowManager::new(Arc::new(orchestrator)))
}

fn read_birth_data(path: Option<&Path>) -> Result<BirthData> {
    let Some(path) = path else {
        warn!("no --input given, running with empty birth data");
        return Ok(BirthData::new());
    };
    match read_json(path)? {
        value @ Value::Object(_) => Ok(BirthData::from_value(value)),
        _ => Err(AppError::Config(format!("{}: birth data must be a JSON object", path.display())).into()),
    }
}

fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
    let value = serde_json::from_str(&text)
        .map_err(|e| AppError::Config(format!("invalid JSON in {}: {e}", path.display())))?;
    Ok(value)
}

fn run_reading(config: &AppConfig, manager: &WorkflowManager, birth: &BirthData) -> Result<()> {
    let orchestrator = manager.orchestrator();
    let engines = select_engines(&config.engines, &orchestrator.available_engines())?;
    let reading = orchestrator.create_comprehensive_reading(birth, Some(engines.as_slice()));
    let report = manager.synthesizer().compose(reading);

    emit(config, &report, |presenter| presenter.present_report(&report))?;
    ensure_some_success(&report.reading().results)
}

fn run_workflow(
    config: &AppConfig,
    manager: &WorkflowManager,
    name: &str,
    birth: &BirthData,
) -> Result<()> {
    let result = manager.run_workflow(name, birth, Some(&config.overrides()))?;
    emit(config, &result, |presenter| presenter.present_workflow(&result))?;
    ensure_some_success(&result.results)
}

fn run_synthesis(config: &AppConfig, path: &Path) -> Result<()> {
    let mut value = read_json(path)?;
    // Accept a bare result map or a saved reading/workflow carrying one.
    if let Some(results) = value.get_mut("results") {
        value = results.take();
    }
    let results: ResultMap = serde_json::from_value(value)
        .map_err(|e| AppError::Config(format!("{}: not a result map: {e}", path.display())))?;

    let synthesis = Synthesizer::default().synthesize_reading(&results);
    emit(config, &synthesis, |presenter| presenter.present_synthesis(&synthesis))
}

fn list_workflows(config: &AppConfig) -> Result<()> {
    let manager = WorkflowManager::from_loader(Arc::new(StaticLoader::new()), OrchestratorConfig::default());
    let definitions: Vec<_> = manager
        .available_workflows()
        .iter()
        .filter_map(|name| manager.workflow(name))
        .collect();

    if config.json {
        println!("{}", to_json(&definitions)?);
        return Ok(());
    }
    for def in &definitions {
        let engines: Vec<&str> = def.engines.iter().map(|e| e.as_str()).collect();
        if config.quiet {
            println!("{}", def.name);
        } else {
            println!("{:<28} {:<10} {}", def.name, format!("{:?}", def.execution_mode).to_lowercase(), engines.join(","));
            if config.verbose {
                println!("    {}", def.description);
            }
        }
    }
    Ok(())
}

fn list_engines(config: &AppConfig) -> Result<()> {
    let available = config
        .fixtures
        .as_ref()
        .map(|dir| FixtureLoader::new(dir).available())
        .unwrap_or_default();

    if config.json {
        let rows: Vec<Value> = EngineId::ALL
            .iter()
            .map(|id| {
                serde_json::json!({
                    "engine": id,
                    "family": id.family(),
                    "available": available.contains(id),
                })
            })
            .collect();
        println!("{}", to_json(&rows)?);
        return Ok(());
    }
    for id in EngineId::ALL {
        let marker = if available.contains(&id) { "available" } else { "-" };
        println!("{:<16} {:<14} {marker}", id.as_str(), format!("{:?}", id.family()).to_lowercase());
    }
    Ok(())
}

/// Write `value` to `--output` if given, then print it as JSON or text.
fn emit<T: Serialize>(
    config: &AppConfig,
    value: &T,
    present: impl FnOnce(&CLIResultPresenter),
) -> Result<()> {
    if let Some(path) = &config.output {
        write_json(path, value).with_context(|| format!("writing {}", path.display()))?;
    }
    if config.json {
        println!("{}", to_json(value)?);
    } else {
        present(&CLIResultPresenter::new(config.verbose, config.quiet));
    }
    Ok(())
}

fn ensure_some_success(results: &ResultMap) -> Result<()> {
    if results.is_empty() || results.values().any(|r| r.is_success()) {
        return Ok(());
    }
    let timed_out = results
        .values()
        .filter(|r| r.error_code() == Some(ENGINE_TIMEOUT_CODE))
        .count();
    Err(AppError::AllEnginesFailed {
        total: results.len(),
        timed_out,
    }
    .into())
}
