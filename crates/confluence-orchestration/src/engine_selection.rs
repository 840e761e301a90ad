//! Engine selection logic for command-line engine lists.

use confluence_core::{EngineError, EngineId, DEFAULT_READING_ENGINES};

/// Resolve an engine list argument.
///
/// `"all"` selects every available engine, `"default"` the comprehensive
/// reading set, anything else is a comma-separated list of engine names.
/// Duplicates are dropped, keeping the first occurrence.
pub fn select_engines(spec: &str, available: &[EngineId]) -> Result<Vec<EngineId>, EngineError> {
    match spec.trim() {
        "all" => Ok(available.to_vec()),
        "default" | "" => Ok(DEFAULT_READING_ENGINES.to_vec()),
        list => {
            let mut engines = Vec::new();
            for name in list.split(',').filter(|s| !s.trim().is_empty()) {
                let id: EngineId = name.parse()?;
                if !engines.contains(&id) {
                    engines.push(id);
                }
            }
            Ok(engines)
        }
    }
}
