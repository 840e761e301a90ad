//! Field signature: coherence and the values derived from it.

use confluence_core::{success_ratio, ResultMap};

use crate::types::{ArchetypalCorrelation, ConsciousnessLevel, FieldSignature, NumericalCorrelation};

const NEUTRAL_VECTOR: &str = "Integration of diverse perspectives";

/// Compute the field signature.
///
/// `stability_factor` scales coherence into the stability index.
pub fn signature(
    results: &ResultMap,
    numerical: &[NumericalCorrelation],
    archetypal: &[ArchetypalCorrelation],
    stability_factor: f64,
) -> FieldSignature {
    let coherence = success_ratio(results);
    FieldSignature {
        coherence,
        dominant_frequency: numerical.first().map_or(0.0, |c| c.number),
        stability_index: coherence * stability_factor,
        consciousness_level: ConsciousnessLevel::from_coherence(coherence),
        evolution_vector: archetypal.first().map_or_else(
            || NEUTRAL_VECTOR.to_string(),
            |a| format!("Evolving toward {}", a.archetype),
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use confluence_core::{CalculationError, CalculationResult, EngineId};
    use serde_json::json;

    use super::*;

    fn mixed(successes: usize, failures: usize) -> ResultMap {
        EngineId::ALL
            .iter()
            .take(successes + failures)
            .enumerate()
            .map(|(i, id)| {
                let result = if i < successes {
                    CalculationResult::success(json!({}), Duration::ZERO)
                } else {
                    CalculationResult::failure(CalculationError::new("ENGINE_ERROR", "x"), Duration::ZERO)
                };
                (*id, result)
            })
            .collect()
    }

    #[test]
    fn three_of_four_is_moderate() {
        let field = signature(&mixed(3, 1), &[], &[], 0.8);
        assert!((field.coherence - 0.75).abs() < f64::EPSILON);
        assert!((field.stability_index - 0.6).abs() < 1e-12);
        assert_eq!(field.consciousness_level, ConsciousnessLevel::ModerateIntegration);
        assert_eq!(field.consciousness_level.label(), "Moderate Integration");
    }

    #[test]
    fn empty_and_all_failed_are_zero() {
        for results in [ResultMap::new(), mixed(0, 3)] {
            let field = signature(&results, &[], &[], 0.8);
            assert!(field.coherence.abs() < f64::EPSILON);
            assert_eq!(field.consciousness_level, ConsciousnessLevel::BeginningIntegration);
            assert_eq!(field.evolution_vector, NEUTRAL_VECTOR);
        }
    }

    #[test]
    fn dominant_frequency_and_vector_follow_top_correlations() {
        let numerical = [NumericalCorrelation {
            number: 7.0,
            frequency: 3,
            sources: vec![],
            significance: String::new(),
        }];
        let archetypal = [ArchetypalCorrelation {
            archetype: "wisdom".to_string(),
            engines: vec![],
            strength: 2,
            interpretation: String::new(),
        }];
        let field = signature(&mixed(2, 0), &numerical, &archetypal, 0.5);
        assert!((field.dominant_frequency - 7.0).abs() < f64::EPSILON);
        assert!((field.stability_index - 0.5).abs() < f64::EPSILON);
        assert_eq!(field.evolution_vector, "Evolving toward wisdom");
    }
}
