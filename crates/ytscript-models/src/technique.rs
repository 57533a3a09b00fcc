//! Technique taxonomy: the closed set of hook, structure and pattern types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Catalog category a technique belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TechniqueCategory {
    Hooks,
    Structures,
    Patterns,
}

impl TechniqueCategory {
    pub const ALL: &'static [TechniqueCategory] = &[
        TechniqueCategory::Hooks,
        TechniqueCategory::Structures,
        TechniqueCategory::Patterns,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TechniqueCategory::Hooks => "hooks",
            TechniqueCategory::Structures => "structures",
            TechniqueCategory::Patterns => "patterns",
        }
    }
}

impl fmt::Display for TechniqueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TechniqueCategory {
    type Err = TechniqueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hooks" | "hook" => Ok(TechniqueCategory::Hooks),
            "structures" | "structure" => Ok(TechniqueCategory::Structures),
            "patterns" | "pattern" | "engagement" => Ok(TechniqueCategory::Patterns),
            _ => Err(TechniqueParseError::new("category", s)),
        }
    }
}

/// Error returned when a technique type key is not part of the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {category} type: {value}")]
pub struct TechniqueParseError {
    pub category: &'static str,
    pub value: String,
}

impl TechniqueParseError {
    pub fn new(category: &'static str, value: impl Into<String>) -> Self {
        Self {
            category,
            value: value.into(),
        }
    }
}

/// Opening hook types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HookType {
    CuriosityGap,
    Controversy,
    PersonalStory,
    StatisticsShock,
    QuestionDirect,
    PatternInterrupt,
    PreviewTeaser,
    EmotionalTrigger,
    AuthorityStatement,
}

impl HookType {
    pub const ALL: &'static [HookType] = &[
        HookType::CuriosityGap,
        HookType::Controversy,
        HookType::PersonalStory,
        HookType::StatisticsShock,
        HookType::QuestionDirect,
        HookType::PatternInterrupt,
        HookType::PreviewTeaser,
        HookType::EmotionalTrigger,
        HookType::AuthorityStatement,
    ];

    /// Type key as used on the wire and in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            HookType::CuriosityGap => "curiosity_gap",
            HookType::Controversy => "controversy",
            HookType::PersonalStory => "personal_story",
            HookType::StatisticsShock => "statistics_shock",
            HookType::QuestionDirect => "question_direct",
            HookType::PatternInterrupt => "pattern_interrupt",
            HookType::PreviewTeaser => "preview_teaser",
            HookType::EmotionalTrigger => "emotional_trigger",
            HookType::AuthorityStatement => "authority_statement",
        }
    }
}

impl fmt::Display for HookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HookType {
    type Err = TechniqueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        HookType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| TechniqueParseError::new("hook", s))
    }
}

/// Narrative structure types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StructureType {
    HeroJourney,
    ProblemSolution,
    BeforeAfter,
    ListFormat,
    TutorialStep,
    StoryLesson,
    CompareContrast,
    Chronological,
}

impl StructureType {
    pub const ALL: &'static [StructureType] = &[
        StructureType::HeroJourney,
        StructureType::ProblemSolution,
        StructureType::BeforeAfter,
        StructureType::ListFormat,
        StructureType::TutorialStep,
        StructureType::StoryLesson,
        StructureType::CompareContrast,
        StructureType::Chronological,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StructureType::HeroJourney => "hero_journey",
            StructureType::ProblemSolution => "problem_solution",
            StructureType::BeforeAfter => "before_after",
            StructureType::ListFormat => "list_format",
            StructureType::TutorialStep => "tutorial_step",
            StructureType::StoryLesson => "story_lesson",
            StructureType::CompareContrast => "compare_contrast",
            StructureType::Chronological => "chronological",
        }
    }
}

impl fmt::Display for StructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StructureType {
    type Err = TechniqueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        StructureType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| TechniqueParseError::new("structure", s))
    }
}

/// Mid-video engagement pattern types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EngagementType {
    PatternInterrupt,
    Callback,
    SuspenseBuilder,
    InteractionPrompt,
    VisualTransition,
    EnergyShift,
    PreviewHook,
    SocialProof,
}

impl EngagementType {
    pub const ALL: &'static [EngagementType] = &[
        EngagementType::PatternInterrupt,
        EngagementType::Callback,
        EngagementType::SuspenseBuilder,
        EngagementType::InteractionPrompt,
        EngagementType::VisualTransition,
        EngagementType::EnergyShift,
        EngagementType::PreviewHook,
        EngagementType::SocialProof,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementType::PatternInterrupt => "pattern_interrupt",
            EngagementType::Callback => "callback",
            EngagementType::SuspenseBuilder => "suspense_builder",
            EngagementType::InteractionPrompt => "interaction_prompt",
            EngagementType::VisualTransition => "visual_transition",
            EngagementType::EnergyShift => "energy_shift",
            EngagementType::PreviewHook => "preview_hook",
            EngagementType::SocialProof => "social_proof",
        }
    }
}

impl fmt::Display for EngagementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EngagementType {
    type Err = TechniqueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        EngagementType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| TechniqueParseError::new("pattern", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_type_round_trips_through_key() {
        for hook in HookType::ALL {
            assert_eq!(hook.as_str().parse::<HookType>().unwrap(), *hook);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "Problem_Solution".parse::<StructureType>().unwrap(),
            StructureType::ProblemSolution
        );
        assert_eq!(" callback ".parse::<EngagementType>().unwrap(), EngagementType::Callback);
    }

    #[test]
    fn test_unknown_key_reports_category() {
        let err = "clickbait".parse::<HookType>().unwrap_err();
        assert_eq!(err.category, "hook");
        assert_eq!(err.to_string(), "Unknown hook type: clickbait");
    }

    #[test]
    fn test_serde_uses_snake_case_keys() {
        let json = serde_json::to_string(&HookType::StatisticsShock).unwrap();
        assert_eq!(json, "\"statistics_shock\"");
        let parsed: StructureType = serde_json::from_str("\"hero_journey\"").unwrap();
        assert_eq!(parsed, StructureType::HeroJourney);
    }

    #[test]
    fn test_category_aliases() {
        assert_eq!("engagement".parse::<TechniqueCategory>().unwrap(), TechniqueCategory::Patterns);
        assert!("colors".parse::<TechniqueCategory>().is_err());
    }
}
