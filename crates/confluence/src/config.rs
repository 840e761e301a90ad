//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use confluence_core::DEFAULT_MAX_WORKERS;
use confluence_orchestration::OrchestratorConfig;
use confluence_workflow::WorkflowOverrides;

use crate::errors::AppError;

/// Confluence: run calculation engines, correlate their results, and
/// synthesize one report.
#[derive(Parser, Debug)]
#[command(name = "confluence", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Workflow to run (see --list-workflows). Without it a comprehensive reading runs.
    #[arg(short, long, env = "CONFLUENCE_WORKFLOW")]
    pub workflow: Option<String>,

    /// Engines for a comprehensive reading: "default", "all", or a comma-separated list.
    #[arg(short, long, default_value = "default", env = "CONFLUENCE_ENGINES")]
    pub engines: String,

    /// Birth data JSON file.
    #[arg(short, long, env = "CONFLUENCE_INPUT")]
    pub input: Option<PathBuf>,

    /// Directory of recorded engine outputs, one <engine>.json per engine.
    #[arg(long, env = "CONFLUENCE_FIXTURES")]
    pub fixtures: Option<PathBuf>,

    /// Synthesize a saved result map instead of running engines.
    #[arg(long, value_name = "RESULTS")]
    pub synthesize: Option<PathBuf>,

    /// List registered workflows.
    #[arg(long)]
    pub list_workflows: bool,

    /// List known engines and whether they are available.
    #[arg(long)]
    pub list_engines: bool,

    /// Focus area for the workflow, e.g. "career".
    #[arg(long)]
    pub focus: Option<String>,

    /// Add a divination engine to the workflow when it has none.
    #[arg(long)]
    pub include_divination: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write the result as JSON to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Engines run at the same time.
    #[arg(long, default_value_t = DEFAULT_MAX_WORKERS, env = "CONFLUENCE_MAX_WORKERS")]
    pub max_workers: usize,

    /// Per-engine timeout (e.g., "30s", "500ms").
    #[arg(long, default_value = "30s", env = "CONFLUENCE_ENGINE_TIMEOUT")]
    pub engine_timeout: String,

    /// Deadline for a whole batch of engines (e.g., "2m").
    #[arg(long, default_value = "2m", env = "CONFLUENCE_DEADLINE")]
    pub deadline: String,

    /// Quiet mode (summary lines only).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output and INFO logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Orchestrator settings from the worker and timeout flags.
    pub fn orchestrator_config(&self) -> Result<OrchestratorConfig, AppError> {
        Ok(OrchestratorConfig {
            max_workers: self.max_workers,
            engine_timeout: flag_duration("--engine-timeout", &self.engine_timeout)?,
            overall_deadline: flag_duration("--deadline", &self.deadline)?,
        }
        .normalize())
    }

    /// Workflow option overrides from the flags; unset flags keep the
    /// workflow's defaults.
    #[must_use]
    pub fn overrides(&self) -> WorkflowOverrides {
        WorkflowOverrides {
            include_divination: self.include_divination.then_some(true),
            focus_area: self.focus.clone(),
            ..WorkflowOverrides::default()
        }
    }
}

fn flag_duration(flag: &str, value: &str) -> Result<Duration, AppError> {
    parse_duration(value)
        .ok_or_else(|| AppError::Config(format!("invalid duration for {flag}: {value:?}")))
}

/// Parse a duration string like "500ms", "30s", "2m", "1h"; a bare number is seconds.
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        Some(Duration::from_millis(ms.parse().ok()?))
    } else if let Some(secs) = s.strip_suffix('s') {
        Some(Duration::from_secs(secs.parse().ok()?))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else {
        Some(Duration::from_secs(s.parse().ok()?))
    }
}
