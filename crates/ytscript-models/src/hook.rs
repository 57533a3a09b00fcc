//! Hook models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::technique::HookType;

/// Opening technique meant to capture attention in the first seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Hook {
    /// Display name
    pub name: String,

    /// Taxonomy key
    #[serde(rename = "type")]
    pub hook_type: HookType,

    pub description: String,

    /// Personalised variant, rendered when a description is supplied
    pub template: String,

    /// Generic variants; the first one is the default rendering
    pub examples: Vec<String>,

    /// Design constant in [0, 1]
    pub effectiveness_score: f64,

    /// Niche tags this hook performs best in
    pub best_niches: Vec<String>,

    pub psychological_principle: String,

    /// Case-insensitive regular expressions that characterise the hook in free text
    #[serde(default)]
    pub markers: Vec<String>,
}

impl Hook {
    /// Case-insensitive exact tag match.
    pub fn fits_niche(&self, niche: &str) -> bool {
        fits_niche(&self.best_niches, niche)
    }

    pub fn first_example(&self) -> Option<&str> {
        self.examples.first().map(String::as_str)
    }
}

pub(crate) fn fits_niche(tags: &[String], niche: &str) -> bool {
    let niche = niche.trim().to_lowercase();
    tags.iter().any(|tag| tag.to_lowercase() == niche)
}
