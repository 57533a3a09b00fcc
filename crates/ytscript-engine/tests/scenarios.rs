//! End-to-end generation and analysis scenarios.

use std::collections::BTreeSet;
use std::sync::Arc;

use ytscript_catalog::TechniqueCatalog;
use ytscript_engine::{EngineConfig, GenerationConfig, ScriptGenerator, StorytellingConfig};
use ytscript_models::{
    Audience, EngagementType, HookType, ScriptGenerationRequest, SectionKind, StructureType, Tone,
};

fn generator() -> ScriptGenerator {
    ScriptGenerator::with_defaults().unwrap()
}

fn python_request() -> ScriptGenerationRequest {
    ScriptGenerationRequest::new("Como aprender Python", "tecnologia", 10)
        .with_hook(HookType::CuriosityGap)
        .with_structure(StructureType::ProblemSolution)
        .with_tone(Tone::Educational)
        .with_audience(Audience::Beginner)
        .with_cta(true)
}

/// Test that every niche gets a recommendation in every category.
#[test]
fn test_recommendations_cover_every_niche() {
    let catalog = TechniqueCatalog::builtin();
    let mut niches: Vec<String> = catalog.get_statistics().supported_niches.into_iter().collect();
    niches.push("culinaria".to_string());

    for niche in &niches {
        let selection = catalog.get_recommendations_for_niche(niche);
        assert!(!selection.hooks.is_empty(), "no hooks for {niche}");
        assert!(!selection.structures.is_empty(), "no structures for {niche}");
        assert!(!selection.patterns.is_empty(), "no patterns for {niche}");
    }
}

/// Test that section durations add up to the video length for every structure.
#[test]
fn test_structure_durations_are_exact() {
    let generator = generator();
    for structure in StructureType::ALL {
        for length in [1, 2, 5, 8, 11, 17, 60, 180] {
            let built = generator
                .generate_complete_script_structure("tecnologia", None, Some(*structure), length, "Rust")
                .unwrap();
            assert_eq!(
                built.total_duration_seconds(),
                length * 60,
                "{structure} over {length} minutes"
            );
            assert_eq!(built.sections[0].start_minute, 0.0);
            for pair in built.sections.windows(2) {
                assert_eq!(pair[0].end_minute, pair[1].start_minute);
            }
        }
    }
}

/// Test that identical requests produce identical output.
#[test]
fn test_generation_is_deterministic() {
    let generator = generator();
    let request = ScriptGenerationRequest::new("Investir em ações", "financas", 12);
    let first = generator.generate_script(&request).unwrap();
    let second = generator.generate_script(&request).unwrap();
    assert_eq!(first.script_text, second.script_text);
    assert_eq!(first.quality_score, second.quality_score);

    let other = ScriptGenerator::with_defaults().unwrap().generate_script(&request).unwrap();
    assert_eq!(first, other);
}

/// Test that a description personalises text without changing techniques.
#[test]
fn test_description_personalises_text() {
    let generator = generator();
    let plain = generator.generate_script(&python_request()).unwrap();
    let personal = generator
        .generate_script(&python_request().with_description("conseguir meu primeiro emprego"))
        .unwrap();

    assert_ne!(plain.script_text, personal.script_text);
    assert_eq!(plain.techniques_used, personal.techniques_used);
    assert!(personal.script_text.contains("conseguir meu primeiro emprego"));
    assert_eq!(
        personal.metadata.description.as_deref(),
        Some("conseguir meu primeiro emprego")
    );
}

/// Test that a blank description behaves like no description.
#[test]
fn test_blank_description_is_ignored() {
    let generator = generator();
    let plain = generator.generate_script(&python_request()).unwrap();
    let blank = generator
        .generate_script(&python_request().with_description("   "))
        .unwrap();
    assert_eq!(plain.script_text, blank.script_text);
}

/// Test that quality scores stay in range across tones and audiences.
#[test]
fn test_quality_score_in_range() {
    let generator = generator();
    for tone in Tone::ALL {
        for audience in Audience::ALL {
            let request = ScriptGenerationRequest::new("Produtividade", "lifestyle", 8)
                .with_tone(*tone)
                .with_audience(*audience);
            let script = generator.generate_script(&request).unwrap();
            assert!(
                (0.0..=1.0).contains(&script.quality_score),
                "{tone}/{audience}: {}",
                script.quality_score
            );
        }
    }
}

/// Test the reference scenario for a beginner Python tutorial.
#[test]
fn test_python_scenario() {
    let script = generator().generate_script(&python_request()).unwrap();

    let first = script.first_section().unwrap();
    assert!(first.assigned_techniques.iter().any(|t| matches!(
        t,
        ytscript_models::AssignedTechnique::Hook {
            hook_type: HookType::CuriosityGap,
            ..
        }
    )));

    let last = script.last_section().unwrap();
    assert_eq!(last.kind, SectionKind::CallToAction);
    assert!(last.text.contains("Como aprender Python"));

    assert!((script.estimated_duration - 10.5).abs() < 1e-9);
    assert!((0.0..=1.0).contains(&script.quality_score));
    assert!(script.analysis.is_none());

    assert!(script.techniques_used.contains("Curiosity Gap"));
    assert!(script.techniques_used.contains("Problema-Solução"));
    assert_eq!(script.metadata.pattern_types.len(), 3);
    assert_eq!(script.structure_breakdown.len(), script.sections.len());

    // rendered text carries the structure's own guidance keywords
    let analysis = generator().analyze_script(&script.script_text, None);
    assert!(analysis.quality_metrics.structure_presence > 0.99);
    assert!(analysis
        .identified_techniques
        .hooks
        .contains(&HookType::CuriosityGap));
}

/// Test detection on a short external hook.
#[test]
fn test_analyze_short_hook() {
    let result = generator().analyze_script(
        "Galera, você já se perguntou por que 97% das pessoas falham?",
        None,
    );
    let hooks = &result.identified_techniques.hooks;
    assert!(hooks.contains(&HookType::QuestionDirect));
    assert!(hooks.contains(&HookType::StatisticsShock));
    assert!((0.0..=1.0).contains(&result.engagement_score));
}

/// Test that text without markers scores zero where markers are required.
#[test]
fn test_analyze_text_without_markers() {
    let result = generator().analyze_script("Hoje choveu bastante na cidade inteira.", Some("abc"));
    assert!(result.identified_techniques.hooks.is_empty());
    assert!(result.identified_techniques.patterns.is_empty());
    assert_eq!(result.quality_metrics.hook_quality, 0.0);
    assert_eq!(result.quality_metrics.engagement_density, 0.0);
    assert_eq!(result.video_id.as_deref(), Some("abc"));
}

/// Test that variations use distinct technique sets.
#[test]
fn test_variations_are_distinct() {
    let request = ScriptGenerationRequest::new("Como aprender Python", "tecnologia", 10);
    let variations = generator().generate_multiple_variations(&request, 3).unwrap();
    assert_eq!(variations.len(), 3);

    let sets: BTreeSet<_> = variations.iter().map(|v| v.techniques_used.clone()).collect();
    assert_eq!(sets.len(), 3);

    let combos: BTreeSet<_> = variations
        .iter()
        .map(|v| (v.metadata.hook_type, v.metadata.structure_type))
        .collect();
    assert_eq!(combos.len(), 3);

    // the first variation is the top pick
    let top = generator().generate_script(&request).unwrap();
    assert_eq!(variations[0], top);
}

/// Test that pinned types stay pinned across variations.
#[test]
fn test_variations_honour_pinned_hook() {
    let request = ScriptGenerationRequest::new("Rust", "tecnologia", 10).with_hook(HookType::AuthorityStatement);
    let variations = generator().generate_multiple_variations(&request, 3).unwrap();
    assert!(variations
        .iter()
        .all(|v| v.metadata.hook_type == HookType::AuthorityStatement));

    // tecnologia ranks three structures, so a pinned hook allows three variations
    let err = generator()
        .generate_multiple_variations(&request, 4)
        .unwrap_err();
    assert!(err.is_invalid_parameter());
}

/// Test that too many variations for a restricted catalog fail.
#[test]
fn test_variations_exceeding_combinations() {
    let config = EngineConfig {
        storytelling: StorytellingConfig {
            hook_types: Some(vec![HookType::CuriosityGap]),
            narrative_structures: Some(vec![StructureType::ListFormat, StructureType::TutorialStep]),
            engagement_patterns: None,
        },
        generation: GenerationConfig::default(),
    };
    let generator = ScriptGenerator::new(Arc::new(TechniqueCatalog::builtin()), config).unwrap();
    // no niche tags match, so both structures stay in the ranking
    let request = ScriptGenerationRequest::new("Bolo de cenoura", "culinaria", 10);

    assert_eq!(generator.generate_multiple_variations(&request, 2).unwrap().len(), 2);
    let err = generator.generate_multiple_variations(&request, 3).unwrap_err();
    assert!(err.is_invalid_parameter());
}

/// Test that the analysis is attached when configured.
#[test]
fn test_include_analysis() {
    let config = EngineConfig {
        generation: GenerationConfig::default().with_include_analysis(true),
        ..Default::default()
    };
    let generator = ScriptGenerator::new(Arc::new(TechniqueCatalog::builtin()), config).unwrap();
    let script = generator.generate_script(&python_request()).unwrap();

    let analysis = script.analysis.as_ref().unwrap();
    assert_eq!(analysis.engagement_score, script.quality_score);
    assert_eq!(analysis.script_text, script.script_text);
    assert_eq!(
        analysis.structure_analysis.structure_type,
        Some(StructureType::ProblemSolution)
    );
}

/// Test that a length bound the rendered text exceeds fails the call.
#[test]
fn test_length_bounds_fail_generation() {
    let config = EngineConfig {
        generation: GenerationConfig::default().with_length_bounds(1, 30),
        ..Default::default()
    };
    let generator = ScriptGenerator::new(Arc::new(TechniqueCatalog::builtin()), config).unwrap();
    let err = generator.generate_script(&python_request()).unwrap_err();
    assert!(err.is_invalid_parameter());
}

/// Test that a template with an unknown placeholder is a render error.
#[test]
fn test_unknown_placeholder_in_catalog() {
    let builtin = TechniqueCatalog::builtin();
    let mut hooks = builtin.list_hooks().to_vec();
    for hook in &mut hooks {
        if hook.hook_type == HookType::CuriosityGap {
            hook.template = "Olha o que {channel_name} descobriu sobre {topic}".to_string();
        }
    }
    let catalog = TechniqueCatalog::new(
        hooks,
        builtin.list_structures().to_vec(),
        builtin.list_patterns().to_vec(),
    )
    .unwrap();
    let generator = ScriptGenerator::new(Arc::new(catalog), EngineConfig::default()).unwrap();

    let err = generator.generate_script(&python_request()).unwrap_err();
    assert!(err.is_render());

    // supplying the key through custom context makes it renderable
    let script = generator
        .generate_script(&python_request().with_context("channel_name", "Canal Dev"))
        .unwrap();
    assert!(script.script_text.contains("Canal Dev"));
}

/// Test that a generator can be shared across threads.
#[test]
fn test_concurrent_generation() {
    let generator = Arc::new(generator());
    let expected = generator.generate_script(&python_request()).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let generator = Arc::clone(&generator);
                scope.spawn(move || generator.generate_script(&python_request()).unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

/// Test that patterns land inside the video and keep their order.
#[test]
fn test_pattern_placement() {
    let structure = generator()
        .generate_complete_script_structure("tecnologia", None, None, 5, "Rust")
        .unwrap();
    let minutes: Vec<f64> = structure
        .sections
        .iter()
        .flat_map(|s| s.assigned_techniques.iter())
        .filter_map(|t| match t {
            ytscript_models::AssignedTechnique::Pattern { at_minute, .. } => Some(*at_minute),
            ytscript_models::AssignedTechnique::Hook { .. } => None,
        })
        .collect();
    assert!(!minutes.is_empty());
    assert!(minutes.iter().all(|m| (0.0..=5.0).contains(m)));
    assert!(minutes.windows(2).all(|w| w[0] <= w[1]));

    let placed: BTreeSet<EngagementType> = structure.patterns.iter().map(|p| p.technique_type).collect();
    assert_eq!(placed.len(), 3);
}
