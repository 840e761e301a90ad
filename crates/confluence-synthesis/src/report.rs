//! A comprehensive reading paired with its synthesis.

use serde::{Deserialize, Serialize};

use confluence_orchestration::ComprehensiveReading;

use crate::types::SynthesisResult;

/// A finished reading together with its synthesis.
///
/// Only constructed from two complete values; there is no partially
/// filled state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingReport {
    reading: ComprehensiveReading,
    synthesis: SynthesisResult,
}

impl ReadingReport {
    #[must_use]
    pub fn new(reading: ComprehensiveReading, synthesis: SynthesisResult) -> Self {
        Self { reading, synthesis }
    }

    #[must_use]
    pub fn reading(&self) -> &ComprehensiveReading {
        &self.reading
    }

    #[must_use]
    pub fn synthesis(&self) -> &SynthesisResult {
        &self.synthesis
    }

    #[must_use]
    pub fn into_parts(self) -> (ComprehensiveReading, SynthesisResult) {
        (self.reading, self.synthesis)
    }
}
