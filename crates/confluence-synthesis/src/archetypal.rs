//! Archetypes echoed by several engines.

use confluence_core::{EngineId, ResultMap};

use crate::output::successful;
use crate::types::ArchetypalCorrelation;

/// Archetype name and the lowercase tokens that signal it.
pub const ARCHETYPE_KEYWORDS: &[(&str, &[&str])] = &[
    ("leadership", &["leader", "leadership", "pioneer", "initiator", "manifestor", "emperor", "authority"]),
    ("wisdom", &["wisdom", "sage", "teacher", "hermit", "knowledge", "mentor"]),
    ("creativity", &["creative", "creativity", "artist", "expression", "innovation", "imagination"]),
    ("reflection", &["reflector", "reflection", "mirror", "contemplation", "introspection"]),
    ("transformation", &["transformation", "death", "rebirth", "phoenix", "metamorphosis", "change"]),
    ("communication", &["communication", "messenger", "expression", "voice", "throat"]),
    ("harmony", &["harmony", "balance", "peace", "mediator", "peacemaker"]),
    ("intuition", &["intuition", "intuitive", "psychic", "high priestess", "insight"]),
];

/// Archetypes matched by at least two engines, strongest first.
///
/// Ties keep table order.
pub fn correlate(results: &ResultMap) -> Vec<ArchetypalCorrelation> {
    let texts: Vec<(EngineId, String)> = successful(results)
        .map(|(engine, output)| (engine, output.searchable_text()))
        .collect();

    let mut correlations: Vec<ArchetypalCorrelation> = ARCHETYPE_KEYWORDS
        .iter()
        .filter_map(|(archetype, keywords)| {
            let engines: Vec<EngineId> = texts
                .iter()
                .filter(|(_, text)| keywords.iter().any(|k| text.contains(k)))
                .map(|(engine, _)| *engine)
                .collect();
            (engines.len() >= 2).then(|| ArchetypalCorrelation {
                archetype: (*archetype).to_string(),
                strength: engines.len(),
                interpretation: interpretation(archetype, &engines),
                engines,
            })
        })
        .collect();

    correlations.sort_by(|a, b| b.strength.cmp(&a.strength));
    correlations
}

fn interpretation(archetype: &str, engines: &[EngineId]) -> String {
    let names: Vec<&str> = engines.iter().map(|e| e.as_str()).collect();
    format!(
        "The {archetype} archetype resonates through {}, suggesting a strong theme of {archetype} in your current expression",
        names.join(", ")
    )
}
