//! Lenient read access to engine output.
//!
//! Engines may expose `rawData`, `formattedOutput`, `recommendations` and
//! `realityPatches`. Every accessor here returns an empty contribution for
//! absent or mistyped fields instead of failing.

use serde_json::Value;

use confluence_core::{EngineId, ResultMap};

#[derive(Debug, Clone, Copy)]
pub(crate) struct OutputView<'a> {
    data: &'a Value,
}

impl<'a> OutputView<'a> {
    pub(crate) fn new(data: &'a Value) -> Self {
        Self { data }
    }

    fn field(&self, camel: &str, snake: &str) -> Option<&'a Value> {
        self.data.get(camel).or_else(|| self.data.get(snake))
    }

    pub(crate) fn raw_data(&self) -> Option<&'a Value> {
        self.field("rawData", "raw_data")
    }

    pub(crate) fn formatted_output(&self) -> &'a str {
        self.field("formattedOutput", "formatted_output")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    pub(crate) fn recommendations(&self) -> Vec<&'a str> {
        string_list(self.field("recommendations", "recommendations"))
    }

    pub(crate) fn reality_patches(&self) -> Vec<&'a str> {
        string_list(self.field("realityPatches", "reality_patches"))
    }

    /// The whole output serialized and lowercased, for keyword matching.
    pub(crate) fn searchable_text(&self) -> String {
        serde_json::to_string(self.data)
            .unwrap_or_default()
            .to_lowercase()
    }
}

fn string_list(value: Option<&Value>) -> Vec<&str> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// First of `keys` present on an object.
pub(crate) fn lookup<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| value.get(*k))
}

/// Successful results with their output, in engine order.
pub(crate) fn successful(results: &ResultMap) -> impl Iterator<Item = (EngineId, OutputView<'_>)> {
    results
        .iter()
        .filter_map(|(id, result)| result.data().map(|data| (*id, OutputView::new(data))))
}
