//! Script generation entry points.

use std::sync::Arc;
use tracing::{debug, info, info_span, warn};
use validator::Validate;

use ytscript_catalog::{Combination, TechniqueCatalog};
use ytscript_models::{
    AnalysisResult, GeneratedScript, HookType, ScriptGenerationRequest, ScriptMetadata,
    ScriptStructure, StructureType,
};

use crate::analyzer::ScriptAnalyzer;
use crate::builder::StructureBuilder;
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::metrics;
use crate::renderer::{RenderContext, ScriptRenderer};

/// Builds, renders and scores scripts from one immutable catalog.
///
/// Every call works on its own values; a generator can be shared across
/// threads behind an `Arc`.
#[derive(Debug)]
pub struct ScriptGenerator {
    catalog: Arc<TechniqueCatalog>,
    analyzer: ScriptAnalyzer,
    builder: StructureBuilder,
    renderer: ScriptRenderer,
    config: EngineConfig,
}

impl ScriptGenerator {
    /// Create a generator, narrowing `catalog` to the configured storytelling subset.
    pub fn new(catalog: Arc<TechniqueCatalog>, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let catalog = if config.storytelling.is_unrestricted() {
            catalog
        } else {
            Arc::new(config.storytelling.apply(&catalog)?)
        };

        let generation = &config.generation;
        let analyzer = ScriptAnalyzer::new(&catalog, generation.words_per_minute)?;
        let builder = StructureBuilder::new(generation.words_per_minute);
        let renderer = ScriptRenderer::new(generation);

        let stats = catalog.get_statistics();
        info!(
            hooks = stats.total_hooks,
            structures = stats.total_structures,
            patterns = stats.total_patterns,
            include_analysis = generation.include_analysis,
            "Script generator ready"
        );

        Ok(Self {
            catalog,
            analyzer,
            builder,
            renderer,
            config,
        })
    }

    /// Generator over the built-in catalog with default configuration.
    pub fn with_defaults() -> EngineResult<Self> {
        Self::new(Arc::new(TechniqueCatalog::builtin()), EngineConfig::default())
    }

    pub fn catalog(&self) -> &TechniqueCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn analyzer(&self) -> &ScriptAnalyzer {
        &self.analyzer
    }

    /// Timed section layout for a script, without rendering any text.
    ///
    /// Omitted hook or structure types default to the best ranked entry for `niche`.
    pub fn generate_complete_script_structure(
        &self,
        niche: &str,
        hook_type: Option<HookType>,
        structure_type: Option<StructureType>,
        video_length: u32,
        topic: &str,
    ) -> EngineResult<ScriptStructure> {
        let combination = self
            .catalog
            .resolve_combination(niche, hook_type, structure_type)?;
        self.build_structure(combination, niche, video_length, topic, 0)
    }

    pub fn generate_script(&self, request: &ScriptGenerationRequest) -> EngineResult<GeneratedScript> {
        let span = info_span!("generate_script", topic = %request.topic, niche = %request.niche);
        let _guard = span.enter();

        let result = request
            .validate()
            .map_err(EngineError::from)
            .and_then(|()| {
                let combination = self.catalog.resolve_combination(
                    &request.niche,
                    request.hook_type,
                    request.structure_type,
                )?;
                self.generate_with(request, combination, 0)
            });
        self.record(request, result)
    }

    /// `count` scripts over distinct (hook, structure) combinations, best first.
    ///
    /// Variation `i` uses the `i`-th ranked combination and rotates the
    /// pattern selection by `i`. Pinned hook or structure types stay pinned.
    pub fn generate_multiple_variations(
        &self,
        request: &ScriptGenerationRequest,
        count: usize,
    ) -> EngineResult<Vec<GeneratedScript>> {
        let span = info_span!("generate_variations", topic = %request.topic, niche = %request.niche, count);
        let _guard = span.enter();

        let combinations = match self.variation_combinations(request, count) {
            Ok(combinations) => combinations,
            Err(e) => {
                record_failure(&e);
                return Err(e);
            }
        };

        combinations
            .into_iter()
            .enumerate()
            .map(|(i, combination)| {
                let result = self.generate_with(request, combination, i);
                self.record(request, result)
            })
            .collect()
    }

    /// The first `count` combinations for a validated request.
    fn variation_combinations(
        &self,
        request: &ScriptGenerationRequest,
        count: usize,
    ) -> EngineResult<Vec<Combination<'_>>> {
        if count == 0 {
            return Err(EngineError::invalid_parameter("variation count must be at least 1"));
        }
        request.validate()?;

        let mut combinations = self.catalog.combinations_for_niche(
            &request.niche,
            request.hook_type,
            request.structure_type,
        )?;
        if count > combinations.len() {
            return Err(EngineError::invalid_parameter(format!(
                "requested {count} variations but only {} distinct combinations exist for niche '{}'",
                combinations.len(),
                request.niche
            )));
        }
        combinations.truncate(count);
        Ok(combinations)
    }

    pub fn analyze_script(&self, script_text: &str, video_id: Option<&str>) -> AnalysisResult {
        self.analyzer.analyze(script_text, video_id)
    }

    fn build_structure(
        &self,
        combination: Combination<'_>,
        niche: &str,
        video_length: u32,
        topic: &str,
        pattern_offset: usize,
    ) -> EngineResult<ScriptStructure> {
        let patterns = self
            .catalog
            .patterns_for_script(self.config.generation.patterns_per_script, pattern_offset);
        let mut structure = self
            .builder
            .build(combination, &patterns, niche, video_length, topic)?;
        structure.engagement_plan = self.catalog.engagement_plan(video_length);
        Ok(structure)
    }

    fn generate_with(
        &self,
        request: &ScriptGenerationRequest,
        combination: Combination<'_>,
        pattern_offset: usize,
    ) -> EngineResult<GeneratedScript> {
        let structure = self.build_structure(
            combination,
            &request.niche,
            request.target_duration,
            &request.topic,
            pattern_offset,
        )?;
        let rendered = self.renderer.render(
            &structure,
            &RenderContext::from_request(request),
            request.include_cta,
        )?;

        let analysis = self.analyzer.analyze_with_context(
            &rendered.script_text,
            None,
            Some(structure.structure.structure_type),
            Some(f64::from(request.target_duration)),
        )?;

        let cta_minutes = if request.include_cta {
            self.config.generation.cta_duration_minutes
        } else {
            0.0
        };
        let estimated_duration = f64::from(structure.total_duration_seconds()) / 60.0 + cta_minutes;

        debug!(
            hook = %structure.hook.hook_type,
            structure = %structure.structure.structure_type,
            words = rendered.word_count(),
            quality = analysis.engagement_score,
            "Rendered script"
        );

        Ok(GeneratedScript {
            metadata: ScriptMetadata {
                topic: structure.topic.clone(),
                description: request.effective_description().map(str::to_string),
                niche: request.niche.clone(),
                hook_type: structure.hook.hook_type,
                structure_type: structure.structure.structure_type,
                pattern_types: structure.patterns.iter().map(|p| p.technique_type).collect(),
                tone: request.tone,
                target_audience: request.target_audience,
                target_duration: request.target_duration,
                include_cta: request.include_cta,
            },
            techniques_used: structure.technique_names(),
            script_text: rendered.script_text,
            structure_breakdown: rendered.structure_breakdown,
            sections: rendered.sections,
            estimated_duration,
            quality_score: analysis.engagement_score,
            analysis: self.config.generation.include_analysis.then_some(analysis),
        })
    }

    fn record(
        &self,
        request: &ScriptGenerationRequest,
        result: EngineResult<GeneratedScript>,
    ) -> EngineResult<GeneratedScript> {
        match &result {
            Ok(script) => metrics::record_script_generated(&request.niche, script.quality_score),
            Err(e) => record_failure(e),
        }
        result
    }
}

fn record_failure(err: &EngineError) {
    warn!(error = %err, kind = err.kind(), "Script generation failed");
    metrics::record_generation_failure(err.kind());
}
