//! One engine invocation request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine_id::EngineId;

/// Engine name, shaped input and optional engine options for one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    name: EngineId,
    input: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    config: Option<Value>,
}

impl EngineConfig {
    #[must_use]
    pub fn new(name: EngineId, input: Value) -> Self {
        Self {
            name,
            input,
            config: None,
        }
    }

    /// Attach engine-specific options.
    #[must_use]
    pub fn with_config(mut self, config: Value) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn name(&self) -> EngineId {
        self.name
    }

    #[must_use]
    pub fn input(&self) -> &Value {
        &self.input
    }

    #[must_use]
    pub fn config(&self) -> Option<&Value> {
        self.config.as_ref()
    }
}
