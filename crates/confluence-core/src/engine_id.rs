//! Engine identifiers and engine families.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Closed set of engines the orchestrator knows how to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineId {
    Numerology,
    Biorhythm,
    HumanDesign,
    Vimshottari,
    GeneKeys,
    Tarot,
    #[serde(rename = "iching")]
    IChing,
    Enneagram,
    SacredGeometry,
    SigilForge,
}

/// Input-shaping family an engine belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineFamily {
    /// Engines that only need name and birth date.
    Basic,
    /// Engines that need exact birth time and place.
    Astronomical,
    /// Engines derived from astronomical activations.
    Lineage,
    /// Question-driven engines.
    Divination,
    /// Personality assessments.
    Personality,
    /// Symbolic and geometric engines driven by an intention.
    Symbolic,
}

impl EngineId {
    /// Every engine identifier, in declaration order.
    pub const ALL: [EngineId; 10] = [
        EngineId::Numerology,
        EngineId::Biorhythm,
        EngineId::HumanDesign,
        EngineId::Vimshottari,
        EngineId::GeneKeys,
        EngineId::Tarot,
        EngineId::IChing,
        EngineId::Enneagram,
        EngineId::SacredGeometry,
        EngineId::SigilForge,
    ];

    /// Canonical snake_case name, identical to the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EngineId::Numerology => "numerology",
            EngineId::Biorhythm => "biorhythm",
            EngineId::HumanDesign => "human_design",
            EngineId::Vimshottari => "vimshottari",
            EngineId::GeneKeys => "gene_keys",
            EngineId::Tarot => "tarot",
            EngineId::IChing => "iching",
            EngineId::Enneagram => "enneagram",
            EngineId::SacredGeometry => "sacred_geometry",
            EngineId::SigilForge => "sigil_forge",
        }
    }

    /// Family used to shape this engine's input.
    #[must_use]
    pub fn family(self) -> EngineFamily {
        match self {
            EngineId::Numerology | EngineId::Biorhythm => EngineFamily::Basic,
            EngineId::HumanDesign | EngineId::Vimshottari => EngineFamily::Astronomical,
            EngineId::GeneKeys => EngineFamily::Lineage,
            EngineId::Tarot | EngineId::IChing => EngineFamily::Divination,
            EngineId::Enneagram => EngineFamily::Personality,
            EngineId::SacredGeometry | EngineId::SigilForge => EngineFamily::Symbolic,
        }
    }

    /// Whether this engine answers a question rather than reading birth data.
    #[must_use]
    pub fn is_divination(self) -> bool {
        self.family() == EngineFamily::Divination
    }
}

impl fmt::Display for EngineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let id = match normalized.as_str() {
            "numerology" => EngineId::Numerology,
            "biorhythm" => EngineId::Biorhythm,
            "human_design" | "humandesign" => EngineId::HumanDesign,
            "vimshottari" => EngineId::Vimshottari,
            "gene_keys" | "genekeys" => EngineId::GeneKeys,
            "tarot" => EngineId::Tarot,
            "iching" | "i_ching" => EngineId::IChing,
            "enneagram" => EngineId::Enneagram,
            "sacred_geometry" | "sacredgeometry" => EngineId::SacredGeometry,
            "sigil_forge" | "sigilforge" => EngineId::SigilForge,
            _ => return Err(EngineError::UnknownEngine(s.to_string())),
        };
        Ok(id)
    }
}
