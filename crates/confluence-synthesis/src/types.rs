//! Synthesis output types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use confluence_core::EngineId;

/// A number reached from at least two engines' raw data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericalCorrelation {
    pub number: f64,
    /// Number of distinct engines the value was found in (at least 2).
    pub frequency: usize,
    pub sources: Vec<EngineId>,
    pub significance: String,
}

/// An archetype whose keywords appear in at least two engines' output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypalCorrelation {
    pub archetype: String,
    pub engines: Vec<EngineId>,
    /// Equal to `engines.len()`.
    pub strength: usize,
    pub interpretation: String,
}

/// A cycle or period reported by a time-aware engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalCorrelation {
    pub engine: EngineId,
    pub cycle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

/// A center, sphere or vibration reported by an energy-aware engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyCorrelation {
    pub engine: EngineId,
    pub source: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Correlations {
    pub numerical_patterns: Vec<NumericalCorrelation>,
    pub archetypal_resonance: Vec<ArchetypalCorrelation>,
    pub temporal_alignments: Vec<TemporalCorrelation>,
    pub energy_signatures: Vec<EnergyCorrelation>,
}

/// Life themes surfaced from the engines' formatted text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedThemes {
    pub themes: Vec<String>,
    pub narrative: String,
}

/// Ordinal bucket on field coherence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConsciousnessLevel {
    #[serde(rename = "Beginning Integration")]
    BeginningIntegration,
    #[serde(rename = "Emerging Awareness")]
    EmergingAwareness,
    #[serde(rename = "Moderate Integration")]
    ModerateIntegration,
    #[serde(rename = "High Integration")]
    HighIntegration,
}

impl ConsciousnessLevel {
    /// Bucket a coherence value: >0.8 high, >0.6 moderate, >0.4 emerging.
    #[must_use]
    pub fn from_coherence(coherence: f64) -> Self {
        if coherence > 0.8 {
            Self::HighIntegration
        } else if coherence > 0.6 {
            Self::ModerateIntegration
        } else if coherence > 0.4 {
            Self::EmergingAwareness
        } else {
            Self::BeginningIntegration
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::BeginningIntegration => "Beginning Integration",
            Self::EmergingAwareness => "Emerging Awareness",
            Self::ModerateIntegration => "Moderate Integration",
            Self::HighIntegration => "High Integration",
        }
    }

    /// 1-based position of this level on the four-step scale.
    #[must_use]
    pub fn stage(self) -> u8 {
        match self {
            Self::BeginningIntegration => 1,
            Self::EmergingAwareness => 2,
            Self::ModerateIntegration => 3,
            Self::HighIntegration => 4,
        }
    }
}

impl fmt::Display for ConsciousnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSignature {
    /// Successful engines over attempted engines, in [0, 1].
    pub coherence: f64,
    pub dominant_frequency: f64,
    pub stability_index: f64,
    pub consciousness_level: ConsciousnessLevel,
    pub evolution_vector: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsciousnessMap {
    pub level: ConsciousnessLevel,
    pub active_archetypes: Vec<String>,
    pub active_cycles: Vec<String>,
    pub energy_centers: Vec<String>,
    pub integration_stage: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuidancePriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationGuidance {
    pub guidance: String,
    pub source: EngineId,
    pub priority: GuidancePriority,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealityPatch {
    pub patch: String,
    pub source: EngineId,
    pub activation_method: String,
    pub expected_outcome: String,
}

/// Cross-engine analysis of one result map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisResult {
    /// Latest result timestamp in the analysed map (the Unix epoch when empty).
    pub timestamp: DateTime<Utc>,
    pub engines_analyzed: Vec<EngineId>,
    pub correlations: Correlations,
    pub unified_themes: UnifiedThemes,
    pub field_signature: FieldSignature,
    pub consciousness_map: ConsciousnessMap,
    pub integration_guidance: Vec<IntegrationGuidance>,
    pub reality_patches: Vec<RealityPatch>,
}
