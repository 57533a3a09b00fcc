//! Script structure builder.
//!
//! Expands a narrative structure into timed sections, opens the first
//! section with the chosen hook and places engagement patterns at their
//! recommended marks. Timing is computed in whole seconds so section
//! durations always add up to the video length.

use std::collections::BTreeMap;
use tracing::debug;

use ytscript_catalog::Combination;
use ytscript_models::{
    AssignedTechnique, EngagementTechnique, ScriptStructure, StructureSection, MAX_TARGET_DURATION,
};

use crate::error::{EngineError, EngineResult};

/// Builds [`ScriptStructure`]s at a fixed speaking rate.
#[derive(Debug, Clone, Copy)]
pub struct StructureBuilder {
    words_per_minute: u32,
}

impl StructureBuilder {
    pub fn new(words_per_minute: u32) -> Self {
        Self { words_per_minute }
    }

    /// Lay out `combination` over `video_length` minutes.
    pub fn build(
        &self,
        combination: Combination<'_>,
        patterns: &[&EngagementTechnique],
        niche: &str,
        video_length: u32,
        topic: &str,
    ) -> EngineResult<ScriptStructure> {
        if topic.trim().is_empty() {
            return Err(EngineError::invalid_parameter("topic must not be empty"));
        }
        if video_length == 0 || video_length > MAX_TARGET_DURATION {
            return Err(EngineError::invalid_parameter(format!(
                "video length must be within 1..={MAX_TARGET_DURATION} minutes, got {video_length}"
            )));
        }

        let structure = combination.structure;
        if structure.sections.is_empty() {
            return Err(EngineError::invalid_parameter(format!(
                "structure '{}' has no sections",
                structure.name
            )));
        }

        let total_seconds = video_length * 60;
        let boundaries = section_boundaries(
            structure.sections.iter().map(|s| s.target_fraction_of_duration),
            total_seconds,
        );

        let mut sections: Vec<StructureSection> = structure
            .sections
            .iter()
            .zip(boundaries.windows(2))
            .enumerate()
            .map(|(index, (section, bounds))| {
                let duration_seconds = bounds[1] - bounds[0];
                StructureSection {
                    index,
                    name: section.name.clone(),
                    purpose: section.purpose.clone(),
                    key_elements: section.key_elements.clone(),
                    start_minute: seconds_to_minutes(bounds[0]),
                    end_minute: seconds_to_minutes(bounds[1]),
                    duration_seconds,
                    target_words: (f64::from(duration_seconds) * f64::from(self.words_per_minute)
                        / 60.0)
                        .round() as u32,
                    assigned_techniques: Vec::new(),
                }
            })
            .collect();

        // Every script opens with the chosen hook
        sections[0].assigned_techniques.push(AssignedTechnique::Hook {
            hook_type: combination.hook.hook_type,
            name: combination.hook.name.clone(),
        });

        let length = f64::from(video_length);
        let mut placements: Vec<(usize, AssignedTechnique)> = Vec::new();
        for pattern in patterns {
            for marker in &pattern.timing_recommendations {
                let requested = marker.offset_minutes(length);
                let at_minute = requested.clamp(0.0, length);
                if at_minute != requested {
                    debug!(
                        pattern = %pattern.technique_type,
                        requested,
                        at_minute,
                        "Clamped pattern mark to video bounds"
                    );
                }
                let index = containing_section(&boundaries, at_minute * 60.0);
                placements.push((
                    index,
                    AssignedTechnique::Pattern {
                        pattern_type: pattern.technique_type,
                        name: pattern.name.clone(),
                        at_minute,
                        timing_label: marker.label().to_string(),
                    },
                ));
            }
        }
        placements.sort_by(|(_, a), (_, b)| pattern_minute(a).total_cmp(&pattern_minute(b)));
        for (index, technique) in placements {
            sections[index].assigned_techniques.push(technique);
        }

        debug!(
            structure = %structure.structure_type,
            sections = sections.len(),
            video_length,
            "Built script structure"
        );

        Ok(ScriptStructure {
            topic: topic.trim().to_string(),
            niche: niche.to_string(),
            video_length,
            hook: combination.hook.clone(),
            structure: structure.clone(),
            patterns: patterns.iter().map(|p| (*p).clone()).collect(),
            sections,
            engagement_plan: BTreeMap::new(),
        })
    }
}

/// Cumulative section boundaries in seconds, from 0 to `total_seconds`.
///
/// Each boundary is the rounded cumulative fraction, so rounding error never
/// accumulates and the last section absorbs the remainder.
fn section_boundaries(fractions: impl Iterator<Item = f64>, total_seconds: u32) -> Vec<u32> {
    let fractions: Vec<f64> = fractions.collect();
    let mut boundaries = Vec::with_capacity(fractions.len() + 1);
    boundaries.push(0);
    let mut cumulative = 0.0;
    for (i, fraction) in fractions.iter().enumerate() {
        if i + 1 == fractions.len() {
            boundaries.push(total_seconds);
            break;
        }
        cumulative += fraction;
        let previous = boundaries[boundaries.len() - 1];
        let boundary = (cumulative * f64::from(total_seconds)).round() as u32;
        boundaries.push(boundary.clamp(previous, total_seconds));
    }
    boundaries
}

/// Index of the section containing `second`; the end of the video belongs to the last one.
fn containing_section(boundaries: &[u32], second: f64) -> usize {
    let last = boundaries.len().saturating_sub(2);
    boundaries
        .windows(2)
        .position(|w| second < f64::from(w[1]))
        .unwrap_or(last)
}

fn pattern_minute(technique: &AssignedTechnique) -> f64 {
    match technique {
        AssignedTechnique::Pattern { at_minute, .. } => *at_minute,
        AssignedTechnique::Hook { .. } => 0.0,
    }
}

fn seconds_to_minutes(seconds: u32) -> f64 {
    f64::from(seconds) / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use ytscript_catalog::TechniqueCatalog;
    use ytscript_models::{EngagementType, HookType, StructureType};

    fn build(
        catalog: &TechniqueCatalog,
        hook: HookType,
        structure: StructureType,
        video_length: u32,
    ) -> EngineResult<ScriptStructure> {
        let combination = catalog
            .resolve_combination("tecnologia", Some(hook), Some(structure))
            .unwrap();
        let patterns = catalog.patterns_for_script(3, 0);
        StructureBuilder::new(150).build(combination, &patterns, "tecnologia", video_length, "Python")
    }

    #[test]
    fn test_boundaries_sum_exactly() {
        let boundaries = section_boundaries([0.1, 0.15, 0.5, 0.2, 0.05].into_iter(), 420);
        assert_eq!(boundaries, vec![0, 42, 105, 315, 399, 420]);
    }

    #[test]
    fn test_boundaries_tolerate_overshoot() {
        let boundaries = section_boundaries([0.5, 0.51, 0.0].into_iter(), 60);
        assert_eq!(boundaries, vec![0, 30, 60, 60]);
    }

    #[test]
    fn test_durations_sum_to_video_length() {
        let catalog = TechniqueCatalog::builtin();
        for structure in StructureType::ALL {
            for video_length in [1, 3, 7, 10, 13, 45, 180] {
                let built = build(&catalog, HookType::CuriosityGap, *structure, video_length).unwrap();
                assert_eq!(built.total_duration_seconds(), video_length * 60);
                let last = built.sections.last().unwrap();
                assert!((last.end_minute - f64::from(video_length)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_hook_opens_first_section() {
        let catalog = TechniqueCatalog::builtin();
        let built = build(&catalog, HookType::QuestionDirect, StructureType::HeroJourney, 10).unwrap();
        assert_eq!(
            built.sections[0].assigned_techniques[0],
            AssignedTechnique::Hook {
                hook_type: HookType::QuestionDirect,
                name: "Direct Question".to_string(),
            }
        );
        assert!(built.sections[1..].iter().all(|s| s.hook().is_none()));
    }

    #[test]
    fn test_out_of_range_marks_are_clamped_not_dropped() {
        let catalog = TechniqueCatalog::builtin();
        let combination = catalog
            .resolve_combination("tecnologia", None, Some(StructureType::ListFormat))
            .unwrap();
        let interrupt = catalog.pattern(EngagementType::PatternInterrupt).unwrap();
        let built = StructureBuilder::new(150)
            .build(combination, &[interrupt], "tecnologia", 5, "Python")
            .unwrap();

        let placed: Vec<_> = built
            .sections
            .iter()
            .flat_map(|s| s.assigned_techniques.iter())
            .filter(|t| !t.is_hook())
            .collect();
        assert_eq!(placed.len(), interrupt.timing_recommendations.len());

        // "7-8 minutos" in a 5 minute video lands at the end, in the last section
        let last = built.sections.last().unwrap();
        assert!(last.assigned_techniques.iter().any(|t| matches!(
            t,
            AssignedTechnique::Pattern { at_minute, .. } if (*at_minute - 5.0).abs() < 1e-9
        )));
    }

    #[test]
    fn test_target_words_follow_speaking_rate() {
        let catalog = TechniqueCatalog::builtin();
        let built = build(&catalog, HookType::CuriosityGap, StructureType::ProblemSolution, 10).unwrap();
        assert_eq!(built.sections[0].duration_seconds, 150);
        assert_eq!(built.sections[0].target_words, 375);
    }

    #[test]
    fn test_invalid_inputs() {
        let catalog = TechniqueCatalog::builtin();
        let err = build(&catalog, HookType::CuriosityGap, StructureType::ListFormat, 0).unwrap_err();
        assert!(err.is_invalid_parameter());

        let combination = catalog.resolve_combination("tecnologia", None, None).unwrap();
        let err = StructureBuilder::new(150)
            .build(combination, &[], "tecnologia", 10, "   ")
            .unwrap_err();
        assert!(err.is_invalid_parameter());
    }
}
