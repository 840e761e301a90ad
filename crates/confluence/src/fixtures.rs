//! Engines replayed from recorded JSON outputs.
//!
//! A fixture directory holds one `<engine_id>.json` per engine, containing
//! the output that engine would return. Two top-level keys are reserved:
//!
//! - `"error": "<message>"` makes the engine fail as if it had thrown;
//! - `"delayMs": <n>` makes the engine take `n` milliseconds, honouring
//!   cancellation, before answering.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::debug;

use confluence_core::{
    CalculationResult, CancellationToken, Engine, EngineError, EngineId, EngineLoader,
};

const ERROR_KEY: &str = "error";
const DELAY_KEY: &str = "delayMs";
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Loads engines from a fixture directory.
#[derive(Debug, Clone)]
pub struct FixtureLoader {
    dir: PathBuf,
}

impl FixtureLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, engine: EngineId) -> PathBuf {
        self.dir.join(format!("{}.json", engine.as_str()))
    }
}

impl EngineLoader for FixtureLoader {
    fn load(&self, engine: EngineId) -> Result<Arc<dyn Engine>, EngineError> {
        let path = self.path(engine);
        if !path.is_file() {
            return Err(EngineError::Unavailable(engine));
        }
        let fixture = FixtureEngine::from_file(engine, &path)?;
        debug!(engine = %engine, path = %path.display(), "loaded fixture");
        Ok(Arc::new(fixture))
    }

    fn available(&self) -> Vec<EngineId> {
        EngineId::ALL
            .into_iter()
            .filter(|&engine| self.path(engine).is_file())
            .collect()
    }
}

/// An engine that answers with a recorded output.
#[derive(Debug, Clone)]
pub struct FixtureEngine {
    id: EngineId,
    reply: Result<Value, String>,
    delay: Duration,
}

impl FixtureEngine {
    pub fn from_value(id: EngineId, mut value: Value) -> Self {
        let delay = value
            .as_object_mut()
            .and_then(|map| map.remove(DELAY_KEY))
            .and_then(|v| v.as_u64())
            .map_or(Duration::ZERO, Duration::from_millis);
        let reply = match value.get(ERROR_KEY).and_then(Value::as_str) {
            Some(message) => Err(message.to_string()),
            None => Ok(value),
        };
        Self { id, reply, delay }
    }

    pub fn from_file(id: EngineId, path: &Path) -> Result<Self, EngineError> {
        let text = fs::read_to_string(path)
            .map_err(|e| EngineError::InvalidInput(format!("{}: {e}", path.display())))?;
        let value = serde_json::from_str(&text)
            .map_err(|e| EngineError::InvalidInput(format!("{}: {e}", path.display())))?;
        Ok(Self::from_value(id, value))
    }
}

impl Engine for FixtureEngine {
    fn calculate(
        &self,
        _input: &Value,
        _options: Option<&Value>,
        cancel: &CancellationToken,
    ) -> Result<CalculationResult, EngineError> {
        let start = Instant::now();
        while start.elapsed() < self.delay {
            cancel.check_cancelled()?;
            std::thread::sleep(POLL_INTERVAL.min(self.delay.saturating_sub(start.elapsed())));
        }
        match &self.reply {
            Ok(data) => Ok(CalculationResult::success(data.clone(), start.elapsed())),
            Err(message) => Err(EngineError::Calculation(message.clone())),
        }
    }

    fn id(&self) -> EngineId {
        self.id
    }
}
