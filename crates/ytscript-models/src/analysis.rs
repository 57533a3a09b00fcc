//! Script analysis result models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::technique::{EngagementType, HookType, StructureType};

/// Story arc markers recognised in free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StoryElement {
    Beginning,
    Conflict,
    Resolution,
    Lesson,
}

impl StoryElement {
    pub const ALL: &'static [StoryElement] = &[
        StoryElement::Beginning,
        StoryElement::Conflict,
        StoryElement::Resolution,
        StoryElement::Lesson,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoryElement::Beginning => "beginning",
            StoryElement::Conflict => "conflict",
            StoryElement::Resolution => "resolution",
            StoryElement::Lesson => "lesson",
        }
    }
}

impl fmt::Display for StoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Techniques detected in a text, grouped by category, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IdentifiedTechniques {
    pub hooks: Vec<HookType>,
    pub patterns: Vec<EngagementType>,
    pub story_elements: Vec<StoryElement>,
}

impl IdentifiedTechniques {
    pub fn total(&self) -> usize {
        self.hooks.len() + self.patterns.len() + self.story_elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Category -> type keys.
    pub fn to_map(&self) -> BTreeMap<String, Vec<String>> {
        let mut map = BTreeMap::new();
        map.insert(
            "hooks".to_string(),
            self.hooks.iter().map(|h| h.as_str().to_string()).collect(),
        );
        map.insert(
            "patterns".to_string(),
            self.patterns.iter().map(|p| p.as_str().to_string()).collect(),
        );
        map.insert(
            "story_elements".to_string(),
            self.story_elements
                .iter()
                .map(|e| e.as_str().to_string())
                .collect(),
        );
        map
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SectionPresence {
    pub name: String,
    pub found: bool,
}

/// Structural view of an analysed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StructureAnalysis {
    pub total_words: usize,
    pub estimated_duration_minutes: f64,
    /// Structure the text was evaluated against (declared or best match)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure_type: Option<StructureType>,
    pub sections: Vec<SectionPresence>,
    pub hook_strength: f64,
    pub conclusion_strength: f64,
    pub narrative_flow: f64,
}

/// Sub-scores, each in [0, 1].
///
/// The first four feed the composite score; the rest are informational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QualityMetrics {
    pub hook_quality: f64,
    pub engagement_density: f64,
    pub structure_presence: f64,
    pub length_appropriateness: f64,
    pub readability: f64,
    pub technique_diversity: f64,
}

impl QualityMetrics {
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        BTreeMap::from([
            ("hook_quality".to_string(), self.hook_quality),
            ("engagement_density".to_string(), self.engagement_density),
            ("structure_presence".to_string(), self.structure_presence),
            ("length_appropriateness".to_string(), self.length_appropriateness),
            ("readability".to_string(), self.readability),
            ("technique_diversity".to_string(), self.technique_diversity),
        ])
    }
}

/// Result of analysing a script, generated or external.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    pub script_text: String,
    pub identified_techniques: IdentifiedTechniques,
    pub structure_analysis: StructureAnalysis,
    /// Weighted composite in [0, 1]
    pub engagement_score: f64,
    pub quality_metrics: QualityMetrics,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identified_map_keeps_all_categories() {
        let identified = IdentifiedTechniques {
            hooks: vec![HookType::QuestionDirect],
            patterns: Vec::new(),
            story_elements: vec![StoryElement::Lesson],
        };
        let map = identified.to_map();
        assert_eq!(map["hooks"], vec!["question_direct".to_string()]);
        assert!(map["patterns"].is_empty());
        assert_eq!(identified.total(), 2);
    }

    #[test]
    fn test_metrics_map_names() {
        let map = QualityMetrics::default().to_map();
        assert_eq!(map.len(), 6);
        assert!(map.contains_key("engagement_density"));
    }
}
