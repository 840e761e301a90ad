//! Integration guidance and reality patches.

use confluence_core::{EngineId, ResultMap};

use crate::output::successful;
use crate::types::{GuidancePriority, IntegrationGuidance, RealityPatch};

/// Length-based priority: more than 100 characters is high, more than 50 medium.
#[must_use]
pub fn priority(text: &str) -> GuidancePriority {
    match text.chars().count() {
        n if n > 100 => GuidancePriority::High,
        n if n > 50 => GuidancePriority::Medium,
        _ => GuidancePriority::Low,
    }
}

/// Flatten every engine's `recommendations`, highest priority first, capped at `limit`.
///
/// Equal priorities keep engine order, then list order.
pub fn integration_guidance(results: &ResultMap, limit: usize) -> Vec<IntegrationGuidance> {
    let mut guidance: Vec<IntegrationGuidance> = successful(results)
        .flat_map(|(source, output)| {
            output
                .recommendations()
                .into_iter()
                .map(move |text| IntegrationGuidance {
                    guidance: text.to_string(),
                    source,
                    priority: priority(text),
                })
        })
        .collect();
    guidance.sort_by(|a, b| b.priority.cmp(&a.priority));
    guidance.truncate(limit);
    guidance
}

/// Flatten every engine's `realityPatches` with an activation method and expected outcome.
pub fn reality_patches(results: &ResultMap) -> Vec<RealityPatch> {
    successful(results)
        .flat_map(|(source, output)| {
            output
                .reality_patches()
                .into_iter()
                .map(move |patch| RealityPatch {
                    activation_method: activation_method(source, patch),
                    expected_outcome: expected_outcome(patch),
                    patch: patch.to_string(),
                    source,
                })
        })
        .collect()
}

fn activation_method(source: EngineId, patch: &str) -> String {
    format!("Daily intention: \"{patch}\", anchored through {source} practice")
}

fn expected_outcome(patch: &str) -> String {
    let focus = patch.trim_end_matches(['.', '!']).to_lowercase();
    format!("Increased alignment and embodiment of {focus}")
}
