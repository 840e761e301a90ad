//! The synthesis pipeline.

use chrono::{DateTime, Utc};
use tracing::debug;

use confluence_core::ResultMap;
use confluence_orchestration::ComprehensiveReading;

use crate::report::ReadingReport;
use crate::types::{Correlations, SynthesisResult};
use crate::{archetypal, consciousness, energy, field, guidance, numerical, temporal, themes};

/// Default cap on integration guidance items.
pub const DEFAULT_MAX_GUIDANCE: usize = 10;

/// Default scaling from coherence to stability index.
pub const DEFAULT_STABILITY_FACTOR: f64 = 0.8;

/// Tunable heuristics of the synthesizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisConfig {
    pub max_guidance: usize,
    pub stability_factor: f64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            max_guidance: DEFAULT_MAX_GUIDANCE,
            stability_factor: DEFAULT_STABILITY_FACTOR,
        }
    }
}

impl SynthesisConfig {
    /// Replace zero or non-finite values with defaults and clamp the
    /// stability factor into [0, 1].
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.max_guidance == 0 {
            self.max_guidance = DEFAULT_MAX_GUIDANCE;
        }
        if !self.stability_factor.is_finite() || self.stability_factor <= 0.0 {
            self.stability_factor = DEFAULT_STABILITY_FACTOR;
        }
        self.stability_factor = self.stability_factor.min(1.0);
        self
    }
}

/// Stateless cross-engine synthesizer.
///
/// The output depends only on the result map, so synthesizing the same map
/// twice yields equal values.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    config: SynthesisConfig,
}

impl Synthesizer {
    #[must_use]
    pub fn new(config: SynthesisConfig) -> Self {
        Self {
            config: config.normalize(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Correlate and summarise a result map. Never fails: missing or
    /// malformed engine output contributes nothing.
    #[must_use]
    pub fn synthesize_reading(&self, results: &ResultMap) -> SynthesisResult {
        let correlations = Correlations {
            numerical_patterns: numerical::correlate(results),
            archetypal_resonance: archetypal::correlate(results),
            temporal_alignments: temporal::correlate(results),
            energy_signatures: energy::correlate(results),
        };
        let field_signature = field::signature(
            results,
            &correlations.numerical_patterns,
            &correlations.archetypal_resonance,
            self.config.stability_factor,
        );
        let consciousness_map = consciousness::map(
            &field_signature,
            &correlations.archetypal_resonance,
            &correlations.temporal_alignments,
            &correlations.energy_signatures,
        );

        debug!(
            engines = results.len(),
            numerical = correlations.numerical_patterns.len(),
            archetypal = correlations.archetypal_resonance.len(),
            coherence = field_signature.coherence,
            "synthesized reading"
        );

        SynthesisResult {
            timestamp: latest_timestamp(results),
            engines_analyzed: results.keys().copied().collect(),
            unified_themes: themes::extract(results),
            integration_guidance: guidance::integration_guidance(results, self.config.max_guidance),
            reality_patches: guidance::reality_patches(results),
            correlations,
            field_signature,
            consciousness_map,
        }
    }

    /// Pair a finished reading with its synthesis.
    #[must_use]
    pub fn compose(&self, reading: ComprehensiveReading) -> ReadingReport {
        let synthesis = self.synthesize_reading(&reading.results);
        ReadingReport::new(reading, synthesis)
    }
}

fn latest_timestamp(results: &ResultMap) -> DateTime<Utc> {
    results
        .values()
        .map(|r| r.timestamp)
        .max()
        .unwrap_or_default()
}
