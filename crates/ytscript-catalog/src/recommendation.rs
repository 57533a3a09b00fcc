//! Niche-aware ranking, search and combination resolution.

use serde::Serialize;
use tracing::{debug, warn};

use ytscript_models::{
    EngagementTechnique, Hook, HookType, NarrativeStructure, StructureType, TechniqueCategory,
};

use crate::catalog::TechniqueCatalog;
use crate::error::{CatalogError, CatalogResult};

/// Patterns recommended for a niche must score at least this much.
pub const PATTERN_RECOMMENDATION_THRESHOLD: f64 = 0.75;

/// Entries grouped by category. Used for both recommendations and search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TechniqueSelection<'a> {
    pub hooks: Vec<&'a Hook>,
    pub structures: Vec<&'a NarrativeStructure>,
    pub patterns: Vec<&'a EngagementTechnique>,
}

impl TechniqueSelection<'_> {
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty() && self.structures.is_empty() && self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hooks.len() + self.structures.len() + self.patterns.len()
    }
}

/// A (hook, structure) pair considered for one script.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Combination<'a> {
    pub hook: &'a Hook,
    pub structure: &'a NarrativeStructure,
}

/// How well a hook and a structure suit a niche.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinationReport {
    pub hook_type: HookType,
    pub structure_type: StructureType,
    pub niche: String,
    /// Mean of hook effectiveness and structure engagement
    pub compatibility_score: f64,
    pub hook_compatible: bool,
    pub structure_compatible: bool,
    pub notes: Vec<String>,
}

/// Stable descending sort: equal scores keep catalog order.
fn rank_by<T>(mut items: Vec<&T>, score: impl Fn(&T) -> f64) -> Vec<&T> {
    items.sort_by(|a, b| score(b).total_cmp(&score(a)));
    items
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl TechniqueCatalog {
    /// Hooks fitting `niche`, best first. Falls back to every hook.
    pub fn ranked_hooks(&self, niche: &str) -> Vec<&Hook> {
        let mut matching: Vec<&Hook> = self.list_hooks().iter().filter(|h| h.fits_niche(niche)).collect();
        if matching.is_empty() {
            warn!(niche, "No hook tagged for niche, using full collection");
            matching = self.list_hooks().iter().collect();
        }
        rank_by(matching, |h| h.effectiveness_score)
    }

    /// Structures fitting `niche`, best first. Falls back to every structure.
    pub fn ranked_structures(&self, niche: &str) -> Vec<&NarrativeStructure> {
        let mut matching: Vec<&NarrativeStructure> = self
            .list_structures()
            .iter()
            .filter(|s| s.fits_niche(niche))
            .collect();
        if matching.is_empty() {
            warn!(niche, "No structure tagged for niche, using full collection");
            matching = self.list_structures().iter().collect();
        }
        rank_by(matching, |s| s.engagement_score)
    }

    /// Patterns above [`PATTERN_RECOMMENDATION_THRESHOLD`], best first.
    /// Falls back to every pattern.
    pub fn ranked_patterns(&self) -> Vec<&EngagementTechnique> {
        let mut matching: Vec<&EngagementTechnique> = self
            .list_patterns()
            .iter()
            .filter(|p| p.effectiveness_score >= PATTERN_RECOMMENDATION_THRESHOLD)
            .collect();
        if matching.is_empty() {
            matching = self.list_patterns().iter().collect();
        }
        rank_by(matching, |p| p.effectiveness_score)
    }

    /// Ranked recommendations for a niche. Never empty for a non-empty category.
    pub fn get_recommendations_for_niche(&self, niche: &str) -> TechniqueSelection<'_> {
        TechniqueSelection {
            hooks: self.ranked_hooks(niche),
            structures: self.ranked_structures(niche),
            patterns: self.ranked_patterns(),
        }
    }

    /// Case-insensitive substring search, in catalog order.
    ///
    /// Hooks match on name, description, template and niche tags; structures
    /// on name, description and niche tags; patterns on name, description,
    /// template and when-to-use text.
    pub fn search_techniques(
        &self,
        query: &str,
        category: Option<TechniqueCategory>,
    ) -> TechniqueSelection<'_> {
        let query = query.trim().to_lowercase();
        let wanted = |c: TechniqueCategory| category.map_or(true, |only| only == c);
        let mut results = TechniqueSelection::default();

        if wanted(TechniqueCategory::Hooks) {
            results.hooks = self
                .list_hooks()
                .iter()
                .filter(|h| {
                    contains_ci(&h.name, &query)
                        || contains_ci(&h.description, &query)
                        || contains_ci(&h.template, &query)
                        || h.best_niches.iter().any(|n| contains_ci(n, &query))
                })
                .collect();
        }
        if wanted(TechniqueCategory::Structures) {
            results.structures = self
                .list_structures()
                .iter()
                .filter(|s| {
                    contains_ci(&s.name, &query)
                        || contains_ci(&s.description, &query)
                        || s.best_for.iter().any(|n| contains_ci(n, &query))
                })
                .collect();
        }
        if wanted(TechniqueCategory::Patterns) {
            results.patterns = self
                .list_patterns()
                .iter()
                .filter(|p| {
                    contains_ci(&p.name, &query)
                        || contains_ci(&p.description, &query)
                        || contains_ci(&p.template, &query)
                        || contains_ci(&p.when_to_use, &query)
                })
                .collect();
        }
        results
    }

    /// Resolve the hook and structure for a script.
    ///
    /// Explicit types are looked up directly; omitted ones default to the
    /// top-ranked entry for the niche.
    pub fn resolve_combination(
        &self,
        niche: &str,
        hook_type: Option<HookType>,
        structure_type: Option<StructureType>,
    ) -> CatalogResult<Combination<'_>> {
        let hook = match hook_type {
            Some(t) => self.hook(t)?,
            None => self
                .ranked_hooks(niche)
                .into_iter()
                .next()
                .ok_or_else(|| CatalogError::invalid_catalog("catalog has no hooks"))?,
        };
        let structure = match structure_type {
            Some(t) => self.structure(t)?,
            None => self
                .ranked_structures(niche)
                .into_iter()
                .next()
                .ok_or_else(|| CatalogError::invalid_catalog("catalog has no structures"))?,
        };
        debug!(
            niche,
            hook = %hook.hook_type,
            structure = %structure.structure_type,
            "Resolved technique combination"
        );
        Ok(Combination { hook, structure })
    }

    /// Top `count` patterns for a script, rotated by `offset` through the ranking.
    pub fn patterns_for_script(&self, count: usize, offset: usize) -> Vec<&EngagementTechnique> {
        let ranked = self.ranked_patterns();
        if ranked.is_empty() {
            return ranked;
        }
        let start = offset % ranked.len();
        ranked
            .iter()
            .cycle()
            .skip(start)
            .take(count.min(ranked.len()))
            .copied()
            .collect()
    }

    /// Every distinct (hook, structure) pair for a niche, best first.
    ///
    /// Pairs are ordered by the sum of their ranks, then by hook rank. A pinned
    /// type restricts its side to that single entry.
    pub fn combinations_for_niche(
        &self,
        niche: &str,
        hook_type: Option<HookType>,
        structure_type: Option<StructureType>,
    ) -> CatalogResult<Vec<Combination<'_>>> {
        let hooks = match hook_type {
            Some(t) => vec![self.hook(t)?],
            None => self.ranked_hooks(niche),
        };
        let structures = match structure_type {
            Some(t) => vec![self.structure(t)?],
            None => self.ranked_structures(niche),
        };

        let mut indexed = Vec::with_capacity(hooks.len() * structures.len());
        for (hi, &hook) in hooks.iter().enumerate() {
            for (si, &structure) in structures.iter().enumerate() {
                indexed.push((hi + si, hi, Combination { hook, structure }));
            }
        }
        indexed.sort_by_key(|(rank_sum, hook_rank, _)| (*rank_sum, *hook_rank));
        Ok(indexed.into_iter().map(|(_, _, c)| c).collect())
    }

    pub fn validate_combination(
        &self,
        hook_type: HookType,
        structure_type: StructureType,
        niche: &str,
    ) -> CatalogResult<CombinationReport> {
        let hook = self.hook(hook_type)?;
        let structure = self.structure(structure_type)?;
        let hook_compatible = hook.fits_niche(niche);
        let structure_compatible = structure.fits_niche(niche);
        let score = (hook.effectiveness_score + structure.engagement_score) / 2.0;

        Ok(CombinationReport {
            hook_type,
            structure_type,
            niche: niche.to_string(),
            compatibility_score: score,
            hook_compatible,
            structure_compatible,
            notes: vec![
                format!("Hook effectiveness: {:.2}", hook.effectiveness_score),
                format!("Structure engagement: {:.2}", structure.engagement_score),
                format!("Combined score: {score:.2}"),
                format!(
                    "Niche compatibility: Hook={hook_compatible}, Structure={structure_compatible}"
                ),
            ],
        })
    }
}
