//! # confluence-synthesis
//!
//! Turns a per-engine result map into one cross-engine analysis: numeric,
//! archetypal, temporal and energy correlations, life themes, the field
//! signature, and ranked guidance.

pub mod archetypal;
pub mod consciousness;
pub mod energy;
pub mod field;
pub mod guidance;
pub mod numerical;
pub(crate) mod output;
pub mod report;
pub mod synthesizer;
pub mod temporal;
pub mod themes;
pub mod types;

// Re-exports
pub use report::ReadingReport;
pub use synthesizer::{SynthesisConfig, Synthesizer, DEFAULT_MAX_GUIDANCE, DEFAULT_STABILITY_FACTOR};
pub use types::{
    ArchetypalCorrelation, ConsciousnessLevel, ConsciousnessMap, Correlations, EnergyCorrelation,
    FieldSignature, GuidancePriority, IntegrationGuidance, NumericalCorrelation, RealityPatch,
    SynthesisResult, TemporalCorrelation, UnifiedThemes,
};
