//! Per-engine calculation results, the unit of failure isolation.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::constants::{ENGINE_ERROR_CODE, ENGINE_ERROR_SUGGESTION, ENGINE_TIMEOUT_CODE};
use crate::engine::EngineError;
use crate::engine_id::EngineId;

/// Results of one orchestration run, keyed by engine.
pub type ResultMap = BTreeMap<EngineId, CalculationResult>;

/// Structured description of a failed calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationError {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub context: Value,
    #[serde(default)]
    pub suggestions: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl CalculationError {
    /// Create an error with empty context and no suggestions.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: Value::Null,
            suggestions: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = context;
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

/// Outcome of a single engine invocation.
///
/// Exactly one of `data` and `error` is populated: `data` when `success` is
/// true, `error` otherwise. Build values through the constructors, which
/// uphold that rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<CalculationError>,
    /// Wall-clock time spent in the engine, in milliseconds.
    pub processing_time: f64,
    pub timestamp: DateTime<Utc>,
}

impl CalculationResult {
    /// A successful result carrying the engine's output.
    #[must_use]
    pub fn success(data: Value, elapsed: Duration) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            processing_time: duration_ms(elapsed),
            timestamp: Utc::now(),
        }
    }

    /// A failed result carrying a structured error.
    #[must_use]
    pub fn failure(error: CalculationError, elapsed: Duration) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            processing_time: duration_ms(elapsed),
            timestamp: Utc::now(),
        }
    }

    /// Wrap an engine that threw into an `ENGINE_ERROR` failure.
    #[must_use]
    pub fn engine_error(err: &EngineError, input: &Value, elapsed: Duration) -> Self {
        let error = CalculationError::new(ENGINE_ERROR_CODE, err.to_string())
            .with_context(json!({ "input": input }))
            .with_suggestion(ENGINE_ERROR_SUGGESTION);
        Self::failure(error, elapsed)
    }

    /// An `ENGINE_TIMEOUT` failure for an engine that missed its deadline.
    #[must_use]
    pub fn timed_out(engine: EngineId, input: &Value, elapsed: Duration) -> Self {
        let error = CalculationError::new(
            ENGINE_TIMEOUT_CODE,
            format!("{engine} did not finish within {}ms", duration_ms(elapsed).round()),
        )
        .with_context(json!({ "input": input }))
        .with_suggestion("Retry with a longer engine timeout")
        .with_suggestion(ENGINE_ERROR_SUGGESTION);
        Self::failure(error, elapsed)
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Engine output, present only on success.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        if self.success {
            self.data.as_ref()
        } else {
            None
        }
    }

    /// Error code of a failed result.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.code.as_str())
    }
}

#[allow(clippy::cast_precision_loss)]
fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Fraction of successful results, 0.0 for an empty map.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn success_ratio(results: &ResultMap) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let ok = results.values().filter(|r| r.is_success()).count();
    ok as f64 / results.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_populates_data_only() {
        let r = CalculationResult::success(json!({"rawData": {"lifePath": 7}}), Duration::from_millis(3));
        assert!(r.is_success());
        assert!(r.data().is_some());
        assert!(r.error.is_none());
        assert!((r.processing_time - 3.0).abs() < 1e-9);
    }

    #[test]
    fn engine_error_shape() {
        let input = json!({"birthDate": "1990-01-01"});
        let r = CalculationResult::engine_error(
            &EngineError::Calculation("boom".into()),
            &input,
            Duration::ZERO,
        );
        assert!(!r.is_success());
        assert!(r.data.is_none());
        let err = r.error.as_ref().unwrap();
        assert_eq!(err.code, "ENGINE_ERROR");
        assert_eq!(err.message, "calculation error: boom");
        assert_eq!(err.context["input"], input);
        assert_eq!(err.suggestions, vec!["Check input parameters".to_string()]);
    }

    #[test]
    fn timed_out_shape() {
        let r = CalculationResult::timed_out(EngineId::Tarot, &Value::Null, Duration::from_secs(2));
        assert_eq!(r.error_code(), Some("ENGINE_TIMEOUT"));
        assert!(r.error.as_ref().unwrap().message.contains("tarot"));
    }

    #[test]
    fn serializes_camel_case() {
        let r = CalculationResult::success(json!(1), Duration::ZERO);
        let v = serde_json::to_value(&r).unwrap();
        assert!(v.get("processingTime").is_some());
        assert!(v.get("error").is_none());
    }

    #[test]
    fn success_ratio_counts() {
        let mut map = ResultMap::new();
        assert!(success_ratio(&map).abs() < f64::EPSILON);
        map.insert(EngineId::Tarot, CalculationResult::success(json!({}), Duration::ZERO));
        map.insert(
            EngineId::IChing,
            CalculationResult::failure(CalculationError::new("X", "y"), Duration::ZERO),
        );
        assert!((success_ratio(&map) - 0.5).abs() < f64::EPSILON);
    }
}
