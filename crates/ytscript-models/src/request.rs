//! Script generation request and its enumerated parameters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::{Validate, ValidationError};

use crate::technique::{HookType, StructureType};

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Maximum supported video length in minutes.
pub const MAX_TARGET_DURATION: u32 = 180;

/// Narration tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Casual,
    Professional,
    Enthusiastic,
    Educational,
}

impl Tone {
    pub const ALL: &'static [Tone] = &[
        Tone::Casual,
        Tone::Professional,
        Tone::Enthusiastic,
        Tone::Educational,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Casual => "casual",
            Tone::Professional => "professional",
            Tone::Enthusiastic => "enthusiastic",
            Tone::Educational => "educational",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tone {
    type Err = ToneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "casual" => Ok(Tone::Casual),
            "professional" | "profissional" => Ok(Tone::Professional),
            "enthusiastic" | "entusiasmado" => Ok(Tone::Enthusiastic),
            "educational" | "educacional" => Ok(Tone::Educational),
            _ => Err(ToneParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown tone: {0}")]
pub struct ToneParseError(pub String);

/// Target audience level. Wire names are the Portuguese tags used by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
pub enum Audience {
    #[serde(rename = "iniciantes")]
    Beginner,
    #[serde(rename = "intermediarios")]
    Intermediate,
    #[serde(rename = "avancados")]
    Advanced,
    #[default]
    #[serde(rename = "geral")]
    General,
}

impl Audience {
    pub const ALL: &'static [Audience] = &[
        Audience::Beginner,
        Audience::Intermediate,
        Audience::Advanced,
        Audience::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Beginner => "iniciantes",
            Audience::Intermediate => "intermediarios",
            Audience::Advanced => "avancados",
            Audience::General => "geral",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Audience {
    type Err = AudienceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "iniciantes" | "beginner" => Ok(Audience::Beginner),
            "intermediarios" | "intermediate" => Ok(Audience::Intermediate),
            "avancados" | "advanced" => Ok(Audience::Advanced),
            "geral" | "general" => Ok(Audience::General),
            _ => Err(AudienceParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown target audience: {0}")]
pub struct AudienceParseError(pub String);

/// Caller-supplied parameters for one script.
///
/// `hook_type` / `structure_type` left as `None` let the recommendation
/// engine pick the top-ranked technique for the niche.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Validate)]
pub struct ScriptGenerationRequest {
    #[validate(length(min = 1), custom(function = "validate_not_blank"))]
    pub topic: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub description: Option<String>,

    pub niche: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook_type: Option<HookType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure_type: Option<StructureType>,

    /// Minutes
    #[validate(range(min = 1, max = 180))]
    pub target_duration: u32,

    #[serde(default)]
    pub tone: Tone,

    #[serde(default)]
    pub target_audience: Audience,

    #[serde(default = "default_include_cta")]
    pub include_cta: bool,

    /// Extra template placeholders
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_context: BTreeMap<String, serde_json::Value>,
}

fn default_include_cta() -> bool {
    true
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl ScriptGenerationRequest {
    /// Create a request with default tone, audience and a closing CTA.
    pub fn new(topic: impl Into<String>, niche: impl Into<String>, target_duration: u32) -> Self {
        Self {
            topic: topic.into(),
            description: None,
            niche: niche.into(),
            hook_type: None,
            structure_type: None,
            target_duration,
            tone: Tone::default(),
            target_audience: Audience::default(),
            include_cta: true,
            custom_context: BTreeMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_hook(mut self, hook_type: HookType) -> Self {
        self.hook_type = Some(hook_type);
        self
    }

    pub fn with_structure(mut self, structure_type: StructureType) -> Self {
        self.structure_type = Some(structure_type);
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_audience(mut self, audience: Audience) -> Self {
        self.target_audience = audience;
        self
    }

    pub fn with_cta(mut self, include_cta: bool) -> Self {
        self.include_cta = include_cta;
        self
    }

    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.custom_context.insert(key.into(), value.into());
        self
    }

    /// Description with surrounding whitespace removed; empty strings count as absent.
    pub fn effective_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = ScriptGenerationRequest::new("Como aprender Python", "tecnologia", 10);
        assert_eq!(request.tone, Tone::Casual);
        assert_eq!(request.target_audience, Audience::General);
        assert!(request.include_cta);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_blank_topic_rejected() {
        let request = ScriptGenerationRequest::new("   ", "tecnologia", 10);
        assert!(request.validate().is_err());
        let request = ScriptGenerationRequest::new("", "tecnologia", 10);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_duration_bounds() {
        assert!(ScriptGenerationRequest::new("t", "n", 0).validate().is_err());
        assert!(ScriptGenerationRequest::new("t", "n", MAX_TARGET_DURATION).validate().is_ok());
        assert!(ScriptGenerationRequest::new("t", "n", MAX_TARGET_DURATION + 1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_description_limit() {
        let ok = "a".repeat(MAX_DESCRIPTION_CHARS);
        assert!(ScriptGenerationRequest::new("t", "n", 5)
            .with_description(ok)
            .validate()
            .is_ok());

        let too_long = "a".repeat(MAX_DESCRIPTION_CHARS + 1);
        assert!(ScriptGenerationRequest::new("t", "n", 5)
            .with_description(too_long)
            .validate()
            .is_err());
    }

    #[test]
    fn test_effective_description() {
        let request = ScriptGenerationRequest::new("t", "n", 5).with_description("  ");
        assert_eq!(request.effective_description(), None);
        let request = ScriptGenerationRequest::new("t", "n", 5).with_description(" criar um app ");
        assert_eq!(request.effective_description(), Some("criar um app"));
    }

    #[test]
    fn test_audience_wire_names() {
        assert_eq!("iniciantes".parse::<Audience>().unwrap(), Audience::Beginner);
        assert_eq!(serde_json::to_string(&Audience::Advanced).unwrap(), "\"avancados\"");
        assert!("experts".parse::<Audience>().is_err());
        assert!("shouting".parse::<Tone>().is_err());
    }

    #[test]
    fn test_name_aliases() {
        assert_eq!("Educacional".parse::<Tone>().unwrap(), Tone::Educational);
        assert_eq!("profissional".parse::<Tone>().unwrap(), Tone::Professional);
        assert_eq!("entusiasmado".parse::<Tone>().unwrap(), Tone::Enthusiastic);
        assert_eq!("advanced".parse::<Audience>().unwrap(), Audience::Advanced);
        assert_eq!(" General ".parse::<Audience>().unwrap(), Audience::General);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let request: ScriptGenerationRequest = serde_json::from_str(
            r#"{"topic": "Como aprender Python", "niche": "tecnologia", "target_duration": 10}"#,
        )
        .unwrap();
        assert!(request.include_cta);
        assert!(request.hook_type.is_none());
        assert!(request.custom_context.is_empty());
    }
}
