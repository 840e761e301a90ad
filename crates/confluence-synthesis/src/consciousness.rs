//! Consciousness map built from the field signature and the correlations.

use crate::types::{
    ArchetypalCorrelation, ConsciousnessMap, EnergyCorrelation, FieldSignature, TemporalCorrelation,
};

/// Summarise where the reading sits on the integration scale.
pub fn map(
    field: &FieldSignature,
    archetypal: &[ArchetypalCorrelation],
    temporal: &[TemporalCorrelation],
    energy: &[EnergyCorrelation],
) -> ConsciousnessMap {
    let level = field.consciousness_level;
    ConsciousnessMap {
        level,
        active_archetypes: archetypal.iter().map(|a| a.archetype.clone()).collect(),
        active_cycles: temporal
            .iter()
            .map(|t| match &t.phase {
                Some(phase) => format!("{} ({phase})", t.cycle),
                None => t.cycle.clone(),
            })
            .collect(),
        energy_centers: energy
            .iter()
            .filter(|e| e.state == "defined")
            .map(|e| e.source.clone())
            .collect(),
        integration_stage: format!("Stage {} of 4: {level}", level.stage()),
    }
}
