//! Engine configuration.
//!
//! The engine never reads files. Front-ends deserialize these structs from
//! whatever source they like and may layer `YTSCRIPT_*` environment
//! variables on top with [`EngineConfig::with_env_overrides`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

use ytscript_catalog::TechniqueCatalog;
use ytscript_models::{EngagementType, HookType, StructureType};

use crate::error::{EngineError, EngineResult};

/// Which part of the catalog the engine considers.
///
/// `None` keeps every built-in type of that category; a list keeps exactly
/// the listed types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorytellingConfig {
    pub hook_types: Option<Vec<HookType>>,
    pub narrative_structures: Option<Vec<StructureType>>,
    pub engagement_patterns: Option<Vec<EngagementType>>,
}

impl StorytellingConfig {
    pub fn is_unrestricted(&self) -> bool {
        self.hook_types.is_none()
            && self.narrative_structures.is_none()
            && self.engagement_patterns.is_none()
    }

    /// The subset of `catalog` this configuration selects.
    pub fn apply(&self, catalog: &TechniqueCatalog) -> EngineResult<TechniqueCatalog> {
        Ok(catalog.restricted(
            self.hook_types.as_deref(),
            self.narrative_structures.as_deref(),
            self.engagement_patterns.as_deref(),
        )?)
    }
}

/// Rendering bounds and pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Minimum rendered length in words
    pub min_script_length: usize,
    /// Maximum rendered length in words
    pub max_script_length: usize,
    /// Attach a full analysis to every generated script
    pub include_analysis: bool,
    /// Assumed speaking rate
    pub words_per_minute: u32,
    /// Duration added for the closing call-to-action
    pub cta_duration_minutes: f64,
    /// Engagement patterns placed in each script
    pub patterns_per_script: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_script_length: 50,
            max_script_length: 5000,
            include_analysis: false,
            words_per_minute: 150,
            cta_duration_minutes: 0.5,
            patterns_per_script: 3,
        }
    }
}

impl GenerationConfig {
    pub fn with_include_analysis(mut self, include: bool) -> Self {
        self.include_analysis = include;
        self
    }

    pub fn with_length_bounds(mut self, min_words: usize, max_words: usize) -> Self {
        self.min_script_length = min_words;
        self.max_script_length = max_words;
        self
    }

    pub fn with_patterns_per_script(mut self, count: usize) -> Self {
        self.patterns_per_script = count;
        self
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.max_script_length == 0 || self.min_script_length > self.max_script_length {
            return Err(EngineError::invalid_parameter(format!(
                "script length bounds must satisfy 0 <= min <= max and max > 0, got {}..{}",
                self.min_script_length, self.max_script_length
            )));
        }
        if self.words_per_minute == 0 {
            return Err(EngineError::invalid_parameter("words_per_minute must be positive"));
        }
        if !self.cta_duration_minutes.is_finite() || self.cta_duration_minutes < 0.0 {
            return Err(EngineError::invalid_parameter(
                "cta_duration_minutes must be a non-negative number",
            ));
        }
        Ok(())
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub storytelling: StorytellingConfig,
    pub generation: GenerationConfig,
}

impl EngineConfig {
    /// Defaults overridden by `YTSCRIPT_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Override fields from `YTSCRIPT_*` environment variables.
    ///
    /// Unset or unparsable variables leave the current value in place.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let s = &mut self.storytelling;
        if let Some(list) = parse_list("YTSCRIPT_HOOK_TYPES", &lookup) {
            s.hook_types = Some(list);
        }
        if let Some(list) = parse_list("YTSCRIPT_NARRATIVE_STRUCTURES", &lookup) {
            s.narrative_structures = Some(list);
        }
        if let Some(list) = parse_list("YTSCRIPT_ENGAGEMENT_PATTERNS", &lookup) {
            s.engagement_patterns = Some(list);
        }

        let g = &mut self.generation;
        g.min_script_length = parse_or("YTSCRIPT_MIN_SCRIPT_LENGTH", &lookup, g.min_script_length);
        g.max_script_length = parse_or("YTSCRIPT_MAX_SCRIPT_LENGTH", &lookup, g.max_script_length);
        g.include_analysis = parse_or("YTSCRIPT_INCLUDE_ANALYSIS", &lookup, g.include_analysis);
        g.words_per_minute = parse_or("YTSCRIPT_WORDS_PER_MINUTE", &lookup, g.words_per_minute);
        g.cta_duration_minutes =
            parse_or("YTSCRIPT_CTA_DURATION_MINUTES", &lookup, g.cta_duration_minutes);
        g.patterns_per_script =
            parse_or("YTSCRIPT_PATTERNS_PER_SCRIPT", &lookup, g.patterns_per_script);
        self
    }

    pub fn validate(&self) -> EngineResult<()> {
        self.generation.validate()
    }
}

fn parse_or<T: FromStr>(key: &str, lookup: &impl Fn(&str) -> Option<String>, current: T) -> T {
    lookup(key)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(current)
}

/// Comma separated type keys. Any unknown key discards the whole variable.
fn parse_list<T: FromStr>(key: &str, lookup: &impl Fn(&str) -> Option<String>) -> Option<Vec<T>> {
    let raw = lookup(key)?;
    let parsed: Result<Vec<T>, _> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<T>())
        .collect();
    match parsed {
        Ok(list) => Some(list),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring unparsable technique list");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.generation.min_script_length, 50);
        assert_eq!(config.generation.max_script_length, 5000);
        assert!(!config.generation.include_analysis);
        assert!(config.storytelling.is_unrestricted());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = EngineConfig::default().with_overrides(lookup(&[
            ("YTSCRIPT_HOOK_TYPES", "curiosity_gap, question_direct"),
            ("YTSCRIPT_MAX_SCRIPT_LENGTH", "800"),
            ("YTSCRIPT_INCLUDE_ANALYSIS", "true"),
            ("YTSCRIPT_WORDS_PER_MINUTE", "fast"),
        ]));
        assert_eq!(
            config.storytelling.hook_types,
            Some(vec![HookType::CuriosityGap, HookType::QuestionDirect])
        );
        assert_eq!(config.generation.max_script_length, 800);
        assert!(config.generation.include_analysis);
        // unparsable value keeps the default
        assert_eq!(config.generation.words_per_minute, 150);
    }

    #[test]
    fn test_unknown_type_discards_list() {
        let config = EngineConfig::default().with_overrides(lookup(&[(
            "YTSCRIPT_NARRATIVE_STRUCTURES",
            "hero_journey,space_opera",
        )]));
        assert!(config.storytelling.narrative_structures.is_none());
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let generation = GenerationConfig::default().with_length_bounds(600, 100);
        assert!(generation.validate().unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_partial_toml() {
        let config: EngineConfig = toml::from_str(
            r#"
            [storytelling]
            hook_types = ["curiosity_gap"]

            [generation]
            include_analysis = true
            "#,
        )
        .unwrap();
        assert_eq!(config.storytelling.hook_types, Some(vec![HookType::CuriosityGap]));
        assert!(config.storytelling.narrative_structures.is_none());
        assert!(config.generation.include_analysis);
        assert_eq!(config.generation.patterns_per_script, 3);
    }

    #[test]
    fn test_apply_restricts_catalog() {
        let storytelling = StorytellingConfig {
            narrative_structures: Some(vec![StructureType::ListFormat]),
            ..Default::default()
        };
        let catalog = storytelling.apply(&TechniqueCatalog::builtin()).unwrap();
        assert_eq!(catalog.list_structures().len(), 1);
        assert_eq!(catalog.list_hooks().len(), 9);
    }
}
