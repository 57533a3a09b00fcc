//! Immutable technique catalog.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::hash::Hash;
use tracing::debug;

use ytscript_models::{
    EngagementTechnique, EngagementType, Hook, HookType, NarrativeStructure, StructureType,
    TechniqueCategory, FRACTION_TOLERANCE,
};

use crate::error::{CatalogError, CatalogResult};
use crate::seed::{builtin_hooks, builtin_patterns, builtin_structures};

/// Default threshold for [`TechniqueCatalog::best_hooks`].
pub const DEFAULT_MIN_HOOK_SCORE: f64 = 0.75;

/// Default threshold for [`TechniqueCatalog::best_structures`].
pub const DEFAULT_MIN_STRUCTURE_SCORE: f64 = 0.80;

/// Default threshold for [`TechniqueCatalog::best_patterns`].
pub const DEFAULT_MIN_PATTERN_SCORE: f64 = 0.75;

/// Marks up to this minute count as the opening of a video.
pub const OPENING_MINUTES: u32 = 2;

/// Share of the video after which the closing patterns apply.
pub const CLOSING_FRACTION: f64 = 0.8;

/// Middle-of-video minutes divisible by this also get a pattern interrupt.
pub const PATTERN_INTERRUPT_EVERY_MINUTES: u32 = 3;

/// Video shares at which [`TechniqueCatalog::engagement_plan`] places suggestions.
pub const PLAN_FRACTIONS: [f64; 3] = [0.25, 0.5, 0.75];

/// Suggestions kept per plan mark.
pub const PLAN_SUGGESTIONS_PER_MARK: usize = 2;

/// Registry of hooks, narrative structures and engagement patterns.
///
/// Built once and shared read-only. Every collection keeps its insertion
/// order, which is the tie-break order for rankings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechniqueCatalog {
    hooks: Vec<Hook>,
    structures: Vec<NarrativeStructure>,
    patterns: Vec<EngagementTechnique>,
}

#[derive(Deserialize)]
struct RawCatalog {
    hooks: Vec<Hook>,
    structures: Vec<NarrativeStructure>,
    patterns: Vec<EngagementTechnique>,
}

/// A catalog entry of any category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TechniqueRef<'a> {
    Hook(&'a Hook),
    Structure(&'a NarrativeStructure),
    Pattern(&'a EngagementTechnique),
}

impl<'a> TechniqueRef<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            TechniqueRef::Hook(h) => &h.name,
            TechniqueRef::Structure(s) => &s.name,
            TechniqueRef::Pattern(p) => &p.name,
        }
    }

    pub fn category(&self) -> TechniqueCategory {
        match self {
            TechniqueRef::Hook(_) => TechniqueCategory::Hooks,
            TechniqueRef::Structure(_) => TechniqueCategory::Structures,
            TechniqueRef::Pattern(_) => TechniqueCategory::Patterns,
        }
    }
}

/// Counts and type keys per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStatistics {
    pub total_hooks: usize,
    pub total_structures: usize,
    pub total_patterns: usize,
    pub hook_types: Vec<HookType>,
    pub structure_types: Vec<StructureType>,
    pub pattern_types: Vec<EngagementType>,
    /// Sorted union of hook and structure niche tags
    pub supported_niches: BTreeSet<String>,
}

impl TechniqueCatalog {
    /// Build a catalog from explicit collections, checking every invariant.
    pub fn new(
        hooks: Vec<Hook>,
        structures: Vec<NarrativeStructure>,
        patterns: Vec<EngagementTechnique>,
    ) -> CatalogResult<Self> {
        let catalog = Self {
            hooks,
            structures,
            patterns,
        };
        catalog.validate()?;
        debug!(
            hooks = catalog.hooks.len(),
            structures = catalog.structures.len(),
            patterns = catalog.patterns.len(),
            "Technique catalog loaded"
        );
        Ok(catalog)
    }

    /// The built-in catalog covering every technique type.
    pub fn builtin() -> Self {
        Self {
            hooks: builtin_hooks(),
            structures: builtin_structures(),
            patterns: builtin_patterns(),
        }
    }

    /// Parse and validate a catalog exported with [`TechniqueCatalog::to_json`].
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::new(raw.hooks, raw.structures, raw.patterns)
    }

    pub fn to_json(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check scores, section fractions, marker syntax and type uniqueness.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.hooks.is_empty() || self.structures.is_empty() || self.patterns.is_empty() {
            return Err(CatalogError::invalid_catalog(
                "every category needs at least one technique",
            ));
        }

        ensure_unique(self.hooks.iter().map(|h| h.hook_type), TechniqueCategory::Hooks)?;
        ensure_unique(
            self.structures.iter().map(|s| s.structure_type),
            TechniqueCategory::Structures,
        )?;
        ensure_unique(
            self.patterns.iter().map(|p| p.technique_type),
            TechniqueCategory::Patterns,
        )?;

        for hook in &self.hooks {
            ensure_score(&hook.name, hook.effectiveness_score)?;
            ensure_markers(&hook.name, &hook.markers)?;
        }
        for structure in &self.structures {
            ensure_score(&structure.name, structure.engagement_score)?;
            if !structure.has_valid_fractions() {
                return Err(CatalogError::invalid_catalog(format!(
                    "section fractions of '{}' sum to {:.3}, expected 1.0 ± {}",
                    structure.name,
                    structure.fraction_sum(),
                    FRACTION_TOLERANCE
                )));
            }
        }
        for pattern in &self.patterns {
            ensure_score(&pattern.name, pattern.effectiveness_score)?;
            ensure_markers(&pattern.name, &pattern.markers)?;
            if pattern.timing_recommendations.is_empty() {
                return Err(CatalogError::invalid_catalog(format!(
                    "'{}' has no timing recommendations",
                    pattern.name
                )));
            }
        }
        Ok(())
    }

    pub fn list_hooks(&self) -> &[Hook] {
        &self.hooks
    }

    pub fn list_structures(&self) -> &[NarrativeStructure] {
        &self.structures
    }

    pub fn list_patterns(&self) -> &[EngagementTechnique] {
        &self.patterns
    }

    pub fn hook(&self, hook_type: HookType) -> CatalogResult<&Hook> {
        self.hooks
            .iter()
            .find(|h| h.hook_type == hook_type)
            .ok_or_else(|| CatalogError::not_found(TechniqueCategory::Hooks, hook_type.as_str()))
    }

    pub fn structure(&self, structure_type: StructureType) -> CatalogResult<&NarrativeStructure> {
        self.structures
            .iter()
            .find(|s| s.structure_type == structure_type)
            .ok_or_else(|| {
                CatalogError::not_found(TechniqueCategory::Structures, structure_type.as_str())
            })
    }

    pub fn pattern(&self, pattern_type: EngagementType) -> CatalogResult<&EngagementTechnique> {
        self.patterns
            .iter()
            .find(|p| p.technique_type == pattern_type)
            .ok_or_else(|| {
                CatalogError::not_found(TechniqueCategory::Patterns, pattern_type.as_str())
            })
    }

    /// Look up an entry by its wire type key, e.g. `("hooks", "curiosity_gap")`.
    pub fn get_by_type(
        &self,
        category: TechniqueCategory,
        type_key: &str,
    ) -> CatalogResult<TechniqueRef<'_>> {
        let not_found = || CatalogError::not_found(category, type_key);
        match category {
            TechniqueCategory::Hooks => {
                let hook_type = type_key.parse::<HookType>().map_err(|_| not_found())?;
                self.hook(hook_type).map(TechniqueRef::Hook)
            }
            TechniqueCategory::Structures => {
                let structure_type = type_key.parse::<StructureType>().map_err(|_| not_found())?;
                self.structure(structure_type).map(TechniqueRef::Structure)
            }
            TechniqueCategory::Patterns => {
                let pattern_type = type_key.parse::<EngagementType>().map_err(|_| not_found())?;
                self.pattern(pattern_type).map(TechniqueRef::Pattern)
            }
        }
    }

    pub fn get_statistics(&self) -> CatalogStatistics {
        let supported_niches = self
            .hooks
            .iter()
            .flat_map(|h| h.best_niches.iter())
            .chain(self.structures.iter().flat_map(|s| s.best_for.iter()))
            .map(|n| n.to_lowercase())
            .collect();

        CatalogStatistics {
            total_hooks: self.hooks.len(),
            total_structures: self.structures.len(),
            total_patterns: self.patterns.len(),
            hook_types: self.hooks.iter().map(|h| h.hook_type).collect(),
            structure_types: self.structures.iter().map(|s| s.structure_type).collect(),
            pattern_types: self.patterns.iter().map(|p| p.technique_type).collect(),
            supported_niches,
        }
    }

    /// A copy holding only the selected types, in catalog order.
    ///
    /// `None` keeps a whole category. Selecting a type the catalog lacks is
    /// `NotFound`; an empty selection is `InvalidParameter`.
    pub fn restricted(
        &self,
        hook_types: Option<&[HookType]>,
        structure_types: Option<&[StructureType]>,
        pattern_types: Option<&[EngagementType]>,
    ) -> CatalogResult<Self> {
        let hooks = match hook_types {
            None => self.hooks.clone(),
            Some(types) => {
                ensure_selection(TechniqueCategory::Hooks, types.len())?;
                for t in types {
                    self.hook(*t)?;
                }
                self.hooks
                    .iter()
                    .filter(|h| types.contains(&h.hook_type))
                    .cloned()
                    .collect()
            }
        };
        let structures = match structure_types {
            None => self.structures.clone(),
            Some(types) => {
                ensure_selection(TechniqueCategory::Structures, types.len())?;
                for t in types {
                    self.structure(*t)?;
                }
                self.structures
                    .iter()
                    .filter(|s| types.contains(&s.structure_type))
                    .cloned()
                    .collect()
            }
        };
        let patterns = match pattern_types {
            None => self.patterns.clone(),
            Some(types) => {
                ensure_selection(TechniqueCategory::Patterns, types.len())?;
                for t in types {
                    self.pattern(*t)?;
                }
                self.patterns
                    .iter()
                    .filter(|p| types.contains(&p.technique_type))
                    .cloned()
                    .collect()
            }
        };
        Self::new(hooks, structures, patterns)
    }

    /// Hooks scoring at least `min_score`, in catalog order.
    pub fn best_hooks(&self, min_score: f64) -> Vec<&Hook> {
        self.hooks
            .iter()
            .filter(|h| h.effectiveness_score >= min_score)
            .collect()
    }

    pub fn best_structures(&self, min_score: f64) -> Vec<&NarrativeStructure> {
        self.structures
            .iter()
            .filter(|s| s.engagement_score >= min_score)
            .collect()
    }

    pub fn best_patterns(&self, min_score: f64) -> Vec<&EngagementTechnique> {
        self.patterns
            .iter()
            .filter(|p| p.effectiveness_score >= min_score)
            .collect()
    }

    /// Writing outline: `"Section: purpose"` followed by `"  - element"` lines.
    pub fn outline(&self, structure_type: StructureType) -> CatalogResult<Vec<String>> {
        let structure = self.structure(structure_type)?;
        let mut lines = Vec::new();
        for section in &structure.sections {
            lines.push(format!("{}: {}", section.name, section.purpose));
            lines.extend(section.key_elements.iter().map(|e| format!("  - {e}")));
        }
        Ok(lines)
    }

    /// Patterns with a timing label containing `fragment` (case-insensitive).
    pub fn patterns_for_timing(&self, fragment: &str) -> Vec<&EngagementTechnique> {
        let fragment = fragment.to_lowercase();
        self.patterns
            .iter()
            .filter(|p| {
                p.timing_recommendations
                    .iter()
                    .any(|t| t.label().to_lowercase().contains(&fragment))
            })
            .collect()
    }

    /// Patterns suited to minute `minute` of a `video_length`-minute video.
    ///
    /// The first two minutes get the opening patterns, the last 20% the
    /// closing ones, everything between the middle ones. Middle minutes that
    /// fall on a three-minute beat also get a pattern interrupt.
    pub fn suggest_patterns_for_timestamp(&self, minute: u32, video_length: u32) -> Vec<&EngagementTechnique> {
        if minute <= OPENING_MINUTES {
            return self.patterns_for_timing("início");
        }
        if f64::from(minute) > f64::from(video_length) * CLOSING_FRACTION {
            return self.patterns_for_timing("final");
        }

        let mut suggestions = self.patterns_for_timing("meio");
        if minute % PATTERN_INTERRUPT_EVERY_MINUTES == 0 {
            if let Ok(interrupt) = self.pattern(EngagementType::PatternInterrupt) {
                if !suggestions.iter().any(|p| p.technique_type == interrupt.technique_type) {
                    suggestions.push(interrupt);
                }
            }
        }
        suggestions
    }

    /// Pattern names to use at the 25%, 50% and 75% minute marks.
    ///
    /// Marks are truncated to whole minutes, so short videos may collapse
    /// several marks into one key.
    pub fn engagement_plan(&self, video_length: u32) -> BTreeMap<u32, Vec<String>> {
        let mut plan = BTreeMap::new();
        for fraction in PLAN_FRACTIONS {
            let minute = (f64::from(video_length) * fraction) as u32;
            let names = self
                .suggest_patterns_for_timestamp(minute, video_length)
                .into_iter()
                .take(PLAN_SUGGESTIONS_PER_MARK)
                .map(|p| p.name.clone())
                .collect();
            plan.insert(minute, names);
        }
        plan
    }
}

impl Default for TechniqueCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn ensure_unique<T>(types: impl Iterator<Item = T>, category: TechniqueCategory) -> CatalogResult<()>
where
    T: Eq + Hash + std::fmt::Display,
{
    let mut seen = std::collections::HashSet::new();
    for t in types {
        let key = t.to_string();
        if !seen.insert(t) {
            return Err(CatalogError::invalid_catalog(format!(
                "duplicate {category} type: {key}"
            )));
        }
    }
    Ok(())
}

fn ensure_score(name: &str, score: f64) -> CatalogResult<()> {
    if !(0.0..=1.0).contains(&score) {
        return Err(CatalogError::invalid_catalog(format!(
            "score of '{name}' must be within [0, 1], got {score}"
        )));
    }
    Ok(())
}

fn ensure_markers(name: &str, markers: &[String]) -> CatalogResult<()> {
    for marker in markers {
        Regex::new(marker).map_err(|e| {
            CatalogError::invalid_catalog(format!("invalid marker '{marker}' on '{name}': {e}"))
        })?;
    }
    Ok(())
}

fn ensure_selection(category: TechniqueCategory, len: usize) -> CatalogResult<()> {
    if len == 0 {
        return Err(CatalogError::invalid_parameter(format!(
            "{category} selection must not be empty"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = TechniqueCatalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.list_hooks().len(), HookType::ALL.len());
        assert_eq!(catalog.list_structures().len(), StructureType::ALL.len());
        assert_eq!(catalog.list_patterns().len(), EngagementType::ALL.len());
    }

    #[test]
    fn test_builtin_order_follows_type_order() {
        let catalog = TechniqueCatalog::builtin();
        let hook_types: Vec<_> = catalog.list_hooks().iter().map(|h| h.hook_type).collect();
        assert_eq!(hook_types, HookType::ALL);
        let structure_types: Vec<_> = catalog
            .list_structures()
            .iter()
            .map(|s| s.structure_type)
            .collect();
        assert_eq!(structure_types, StructureType::ALL);
    }

    #[test]
    fn test_hook_examples_carry_their_own_markers() {
        let catalog = TechniqueCatalog::builtin();
        for hook in catalog.list_hooks() {
            let example = hook.first_example().unwrap();
            let matched = hook
                .markers
                .iter()
                .any(|m| Regex::new(&format!("(?i){m}")).unwrap().is_match(example));
            assert!(matched, "{} example does not match its markers", hook.name);
        }
    }

    #[test]
    fn test_pattern_templates_carry_their_own_markers() {
        let catalog = TechniqueCatalog::builtin();
        for pattern in catalog.list_patterns() {
            let matched = pattern
                .markers
                .iter()
                .any(|m| Regex::new(&format!("(?i){m}")).unwrap().is_match(&pattern.template));
            assert!(matched, "{} template does not match its markers", pattern.name);
        }
    }

    #[test]
    fn test_get_by_type() {
        let catalog = TechniqueCatalog::builtin();
        let entry = catalog
            .get_by_type(TechniqueCategory::Hooks, "curiosity_gap")
            .unwrap();
        assert_eq!(entry.name(), "Curiosity Gap");
        assert_eq!(entry.category(), TechniqueCategory::Hooks);

        let entry = catalog
            .get_by_type(TechniqueCategory::Structures, "problem_solution")
            .unwrap();
        assert_eq!(entry.name(), "Problema-Solução");

        let err = catalog
            .get_by_type(TechniqueCategory::Patterns, "telepathy")
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_statistics() {
        let stats = TechniqueCatalog::builtin().get_statistics();
        assert_eq!(stats.total_hooks, 9);
        assert_eq!(stats.total_structures, 8);
        assert_eq!(stats.total_patterns, 8);
        assert!(stats.supported_niches.contains("tecnologia"));
    }

    #[test]
    fn test_bad_fractions_rejected() {
        let mut structures = builtin_structures();
        structures[0].sections[0].target_fraction_of_duration += 0.2;
        let err = TechniqueCatalog::new(builtin_hooks(), structures, builtin_patterns()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCatalog(_)));
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let mut hooks = builtin_hooks();
        hooks.push(hooks[0].clone());
        let err = TechniqueCatalog::new(hooks, builtin_structures(), builtin_patterns()).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_bad_marker_rejected() {
        let mut patterns = builtin_patterns();
        patterns[0].markers.push("(unclosed".to_string());
        let err = TechniqueCatalog::new(builtin_hooks(), builtin_structures(), patterns).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCatalog(_)));
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let catalog = TechniqueCatalog::builtin();
        let json = catalog.to_json().unwrap();
        let parsed = TechniqueCatalog::from_json(&json).unwrap();
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn test_restricted() {
        let catalog = TechniqueCatalog::builtin();
        let subset = catalog
            .restricted(
                Some(&[HookType::QuestionDirect, HookType::CuriosityGap]),
                None,
                Some(&[EngagementType::Callback]),
            )
            .unwrap();
        let hook_types: Vec<_> = subset.list_hooks().iter().map(|h| h.hook_type).collect();
        assert_eq!(hook_types, vec![HookType::CuriosityGap, HookType::QuestionDirect]);
        assert_eq!(subset.list_structures().len(), 8);
        assert_eq!(subset.list_patterns().len(), 1);

        let err = catalog.restricted(Some(&[]), None, None).unwrap_err();
        assert!(err.is_invalid_parameter());

        let err = subset
            .restricted(Some(&[HookType::Controversy]), None, None)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_threshold_queries() {
        let catalog = TechniqueCatalog::builtin();
        let best: Vec<_> = catalog
            .best_structures(DEFAULT_MIN_STRUCTURE_SCORE)
            .iter()
            .map(|s| s.structure_type)
            .collect();
        assert_eq!(
            best,
            vec![
                StructureType::HeroJourney,
                StructureType::ProblemSolution,
                StructureType::BeforeAfter,
                StructureType::TutorialStep,
            ]
        );
        assert!(catalog
            .best_hooks(DEFAULT_MIN_HOOK_SCORE)
            .iter()
            .all(|h| h.effectiveness_score >= 0.75));
        assert_eq!(catalog.best_patterns(DEFAULT_MIN_PATTERN_SCORE).len(), 5);
    }

    #[test]
    fn test_outline() {
        let lines = TechniqueCatalog::builtin()
            .outline(StructureType::ListFormat)
            .unwrap();
        assert_eq!(lines[0], "Introduction & Promise: Prometer valor e estabelecer expectativas");
        assert_eq!(lines[1], "  - Promessa");
        assert_eq!(lines.len(), 3 + 9);
    }

    #[test]
    fn test_patterns_for_timing() {
        let catalog = TechniqueCatalog::builtin();
        let middle: Vec<_> = catalog
            .patterns_for_timing("MEIO")
            .iter()
            .map(|p| p.technique_type)
            .collect();
        assert_eq!(
            middle,
            vec![
                EngagementType::Callback,
                EngagementType::SuspenseBuilder,
                EngagementType::InteractionPrompt,
                EngagementType::SocialProof,
            ]
        );
    }

    #[test]
    fn test_opening_timestamp_suggestions() {
        let catalog = TechniqueCatalog::builtin();
        let types: Vec<_> = catalog
            .suggest_patterns_for_timestamp(1, 10)
            .iter()
            .map(|p| p.technique_type)
            .collect();
        assert_eq!(types, vec![EngagementType::VisualTransition, EngagementType::PreviewHook]);
    }

    #[test]
    fn test_middle_timestamp_adds_pattern_interrupt_on_beat() {
        let catalog = TechniqueCatalog::builtin();
        let off_beat: Vec<_> = catalog
            .suggest_patterns_for_timestamp(5, 10)
            .iter()
            .map(|p| p.technique_type)
            .collect();
        assert_eq!(
            off_beat,
            vec![
                EngagementType::Callback,
                EngagementType::SuspenseBuilder,
                EngagementType::InteractionPrompt,
                EngagementType::SocialProof,
            ]
        );

        let on_beat = catalog.suggest_patterns_for_timestamp(6, 10);
        assert_eq!(on_beat.len(), 5);
        assert_eq!(on_beat[4].technique_type, EngagementType::PatternInterrupt);
    }

    #[test]
    fn test_closing_timestamp_suggestions() {
        let catalog = TechniqueCatalog::builtin();
        let closing = catalog.suggest_patterns_for_timestamp(9, 10);
        assert_eq!(closing.len(), 1);
        assert_eq!(closing[0].technique_type, EngagementType::InteractionPrompt);
        // the 80% mark itself still counts as the middle
        assert!(catalog
            .suggest_patterns_for_timestamp(8, 10)
            .iter()
            .any(|p| p.technique_type == EngagementType::Callback));
    }

    #[test]
    fn test_timestamp_suggestions_in_restricted_catalog() {
        let catalog = TechniqueCatalog::builtin()
            .restricted(None, None, Some(&[EngagementType::Callback][..]))
            .unwrap();
        let on_beat = catalog.suggest_patterns_for_timestamp(3, 10);
        assert_eq!(on_beat.len(), 1);
        assert_eq!(on_beat[0].technique_type, EngagementType::Callback);
        assert!(catalog.suggest_patterns_for_timestamp(0, 10).is_empty());
    }

    #[test]
    fn test_engagement_plan() {
        let catalog = TechniqueCatalog::builtin();
        let plan = catalog.engagement_plan(10);
        assert_eq!(plan.keys().copied().collect::<Vec<_>>(), vec![2, 5, 7]);
        assert_eq!(plan[&2], vec!["Visual Transition", "Preview Hook"]);
        assert_eq!(plan[&5], vec!["Callback Reference", "Suspense Builder"]);
        assert_eq!(plan[&7], plan[&5]);

        let short = catalog.engagement_plan(2);
        assert_eq!(short.keys().copied().collect::<Vec<_>>(), vec![0, 1]);
    }
}
