//! Narrative structure models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::hook::fits_niche;
use crate::technique::StructureType;

/// Allowed drift of the section fractions around 1.0.
pub const FRACTION_TOLERANCE: f64 = 0.01;

/// One ordered section of a narrative structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NarrativeSection {
    pub name: String,

    /// What the section has to achieve
    pub purpose: String,

    /// Share of the total video duration (0.0-1.0)
    pub target_fraction_of_duration: f64,

    /// Free-form writing guidance
    pub content_guidance: String,

    /// Guidance keywords; a section counts as present in a text when any of them occurs
    pub key_elements: Vec<String>,

    /// Typical opening phrases
    #[serde(default)]
    pub examples: Vec<String>,
}

/// Ordered section template governing the story arc of a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NarrativeStructure {
    pub name: String,

    #[serde(rename = "type")]
    pub structure_type: StructureType,

    pub description: String,

    /// Rendering order is section order
    pub sections: Vec<NarrativeSection>,

    pub best_for: Vec<String>,

    /// Design constant in [0, 1]
    pub engagement_score: f64,

    /// Human readable, e.g. "5-12 minutos"
    pub typical_duration: String,

    pub psychological_principle: String,
}

impl NarrativeStructure {
    pub fn fits_niche(&self, niche: &str) -> bool {
        fits_niche(&self.best_for, niche)
    }

    pub fn fraction_sum(&self) -> f64 {
        self.sections
            .iter()
            .map(|s| s.target_fraction_of_duration)
            .sum()
    }

    /// Whether the section fractions sum to 1.0 within [`FRACTION_TOLERANCE`].
    pub fn has_valid_fractions(&self) -> bool {
        !self.sections.is_empty()
            && self
                .sections
                .iter()
                .all(|s| s.target_fraction_of_duration > 0.0)
            && (self.fraction_sum() - 1.0).abs() <= FRACTION_TOLERANCE
    }
}
