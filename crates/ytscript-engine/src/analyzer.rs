//! Script quality analyzer.
//!
//! Detects catalog techniques by their phrase markers and combines four
//! normalised sub-scores into the composite engagement score:
//! hook quality 25%, engagement density 35%, structure presence 25% and
//! length appropriateness 15%.

use rayon::prelude::*;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;
use tracing::debug;

use ytscript_catalog::TechniqueCatalog;
use ytscript_models::{
    AnalysisResult, EngagementType, HookType, IdentifiedTechniques, QualityMetrics,
    SectionPresence, StoryElement, StructureAnalysis, StructureType,
};

use crate::error::{EngineError, EngineResult};
use crate::metrics;

const HOOK_WEIGHT: f64 = 0.25;
const DENSITY_WEIGHT: f64 = 0.35;
const STRUCTURE_WEIGHT: f64 = 0.25;
const LENGTH_WEIGHT: f64 = 0.15;

/// Hooks only count inside the opening words.
const HOOK_WINDOW_WORDS: usize = 200;

/// Distinct techniques needed for full diversity.
const DIVERSITY_TARGET: f64 = 12.0;

// =============================================================================
// Static Markers
// =============================================================================

fn alternation(phrases: &[&str]) -> Regex {
    Regex::new(&format!("(?i)(?:{})", phrases.join("|"))).unwrap()
}

fn each(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).unwrap())
        .collect()
}

static STORY_MARKERS: LazyLock<Vec<(StoryElement, Regex)>> = LazyLock::new(|| {
    StoryElement::ALL
        .iter()
        .map(|element| {
            let phrases: &[&str] = match element {
                StoryElement::Beginning => &[
                    "era uma vez",
                    "começou quando",
                    "tudo.*começou",
                    "primeira vez",
                    "no início",
                ],
                StoryElement::Conflict => &[
                    "problema.*surgiu",
                    "dificuldade.*apareceu",
                    "desafio.*maior",
                    "obstáculo",
                    "erro.*cometi",
                ],
                StoryElement::Resolution => &[
                    "solução.*encontrei",
                    "descobri.*como",
                    "finalmente.*consegui",
                    "resultado.*foi",
                    "aprendi.*que",
                ],
                StoryElement::Lesson => &[
                    "lição.*importante",
                    "o.*que.*aprendi",
                    "moral.*história",
                    "takeaway",
                    "resumindo",
                ],
            };
            (*element, alternation(phrases))
        })
        .collect()
});

const EMOTIONAL_WORDS: &[&str] = &[
    "incrível",
    "surpreendente",
    "chocante",
    "impressionante",
    "revolucionário",
];

static PROMISES: LazyLock<Vec<Regex>> =
    LazyLock::new(|| each(&[r"vou.*mostrar", r"você.*vai.*aprender", r"vai.*descobrir"]));

static CTA: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    each(&[
        r"se inscreva",
        r"deixe.*like",
        r"compartilhe",
        r"comenta",
        r"ative.*sino",
    ])
});

static SUMMARY: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    each(&[
        r"resumindo",
        r"recapitulando",
        r"em resumo",
        r"principais.*pontos",
    ])
});

static TRANSITIONS: LazyLock<Regex> = LazyLock::new(|| {
    alternation(&[
        r"\bagora\b",
        r"\bdepois\b",
        r"\bentão\b",
        r"\bem seguida\b",
        r"\bprimeiro\b",
        r"\bsegundo\b",
        r"\baí\b",
        r"\bdaí\b",
        r"\btipo assim\b",
        r"\bposteriormente\b",
        r"\bademais\b",
        r"\balém disso\b",
        r"\be mais\b",
        r"\be tem mais\b",
        r"\bem terceiro lugar\b",
        r"\bpara concluir\b",
    ])
});

static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

// =============================================================================
// Compiled Catalog
// =============================================================================

#[derive(Debug)]
struct HookMarkers {
    hook_type: HookType,
    effectiveness: f64,
    markers: Vec<Regex>,
}

#[derive(Debug)]
struct PatternMarkers {
    pattern_type: EngagementType,
    markers: Vec<Regex>,
}

#[derive(Debug)]
struct StructureMarkers {
    structure_type: StructureType,
    /// Section name and one regex per key element
    sections: Vec<(String, Vec<Regex>)>,
}

impl StructureMarkers {
    fn presence(&self, text: &str) -> (f64, Vec<SectionPresence>) {
        let sections: Vec<SectionPresence> = self
            .sections
            .iter()
            .map(|(name, elements)| SectionPresence {
                name: name.clone(),
                found: elements.iter().any(|re| re.is_match(text)),
            })
            .collect();
        let found = sections.iter().filter(|s| s.found).count();
        let score = if sections.is_empty() {
            0.0
        } else {
            found as f64 / sections.len() as f64
        };
        (score, sections)
    }
}

fn compile(owner: &str, pattern: &str) -> EngineResult<Regex> {
    Regex::new(&format!("(?i){pattern}")).map_err(|e| {
        EngineError::invalid_parameter(format!("invalid marker '{pattern}' on '{owner}': {e}"))
    })
}

// =============================================================================
// Analyzer
// =============================================================================

/// Scores free text against a technique catalog.
///
/// Markers are compiled once at construction; the analyzer is immutable
/// afterwards and can be shared across threads.
#[derive(Debug)]
pub struct ScriptAnalyzer {
    hooks: Vec<HookMarkers>,
    patterns: Vec<PatternMarkers>,
    structures: Vec<StructureMarkers>,
    words_per_minute: u32,
}

impl ScriptAnalyzer {
    pub fn new(catalog: &TechniqueCatalog, words_per_minute: u32) -> EngineResult<Self> {
        if words_per_minute == 0 {
            return Err(EngineError::invalid_parameter("words_per_minute must be positive"));
        }

        let hooks = catalog
            .list_hooks()
            .iter()
            .map(|hook| {
                Ok(HookMarkers {
                    hook_type: hook.hook_type,
                    effectiveness: hook.effectiveness_score,
                    markers: hook
                        .markers
                        .iter()
                        .map(|m| compile(&hook.name, m))
                        .collect::<EngineResult<_>>()?,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        let patterns = catalog
            .list_patterns()
            .iter()
            .map(|pattern| {
                Ok(PatternMarkers {
                    pattern_type: pattern.technique_type,
                    markers: pattern
                        .markers
                        .iter()
                        .map(|m| compile(&pattern.name, m))
                        .collect::<EngineResult<_>>()?,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        let structures = catalog
            .list_structures()
            .iter()
            .map(|structure| {
                let sections = structure
                    .sections
                    .iter()
                    .map(|section| {
                        let elements = section
                            .key_elements
                            .iter()
                            .map(|el| compile(&structure.name, &format!(r"\b{}\b", regex::escape(el))))
                            .collect::<EngineResult<_>>()?;
                        Ok((section.name.clone(), elements))
                    })
                    .collect::<EngineResult<_>>()?;
                Ok(StructureMarkers {
                    structure_type: structure.structure_type,
                    sections,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(Self {
            hooks,
            patterns,
            structures,
            words_per_minute,
        })
    }

    /// Analyse text with no declared structure or target duration.
    ///
    /// Structure presence is measured against the best matching catalog
    /// structure and length against the default word ranges.
    pub fn analyze(&self, text: &str, video_id: Option<&str>) -> AnalysisResult {
        self.evaluate(text, video_id, None, None)
    }

    /// Analyse text written for a known structure and target length in minutes.
    pub fn analyze_with_context(
        &self,
        text: &str,
        video_id: Option<&str>,
        structure_type: Option<StructureType>,
        target_minutes: Option<f64>,
    ) -> EngineResult<AnalysisResult> {
        let structure = match structure_type {
            Some(t) => Some(
                self.structures
                    .iter()
                    .find(|s| s.structure_type == t)
                    .ok_or_else(|| {
                        EngineError::not_found(format!("structure {t} is not in the catalog"))
                    })?,
            ),
            None => None,
        };
        if let Some(target) = target_minutes {
            if !target.is_finite() || target <= 0.0 {
                return Err(EngineError::invalid_parameter(format!(
                    "target duration must be positive, got {target}"
                )));
            }
        }
        Ok(self.evaluate(text, video_id, structure, target_minutes))
    }

    /// Analyse `(video_id, text)` pairs in parallel, preserving input order.
    pub fn analyze_many(&self, scripts: &[(String, String)]) -> Vec<AnalysisResult> {
        scripts
            .par_iter()
            .map(|(video_id, text)| self.analyze(text, Some(video_id)))
            .collect()
    }

    fn evaluate(
        &self,
        text: &str,
        video_id: Option<&str>,
        declared: Option<&StructureMarkers>,
        target_minutes: Option<f64>,
    ) -> AnalysisResult {
        let words: Vec<&str> = text.split_whitespace().collect();
        let total_words = words.len();
        let minutes = total_words as f64 / f64::from(self.words_per_minute);

        let opening = words
            .iter()
            .take(HOOK_WINDOW_WORDS)
            .copied()
            .collect::<Vec<_>>()
            .join(" ");

        let identified = IdentifiedTechniques {
            hooks: self
                .hooks
                .iter()
                .filter(|h| h.markers.iter().any(|re| re.is_match(&opening)))
                .map(|h| h.hook_type)
                .collect(),
            patterns: self
                .patterns
                .iter()
                .filter(|p| p.markers.iter().any(|re| re.is_match(text)))
                .map(|p| p.pattern_type)
                .collect(),
            story_elements: STORY_MARKERS
                .iter()
                .filter(|(_, re)| re.is_match(text))
                .map(|(element, _)| *element)
                .collect(),
        };

        let hook_quality = self
            .hooks
            .iter()
            .filter(|h| identified.hooks.contains(&h.hook_type))
            .map(|h| h.effectiveness)
            .fold(0.0, f64::max);

        let expected_patterns = (minutes / 2.0).ceil().max(1.0);
        let engagement_density = (identified.patterns.len() as f64 / expected_patterns).min(1.0);

        let (structure_type, structure_presence, sections) = match declared {
            Some(structure) => {
                let (score, sections) = structure.presence(text);
                (Some(structure.structure_type), score, sections)
            }
            None => self.best_structure(text),
        };

        let length_appropriateness = match target_minutes {
            Some(target) => (1.0 - (minutes - target).abs() / target).clamp(0.0, 1.0),
            None => length_by_words(total_words),
        };

        let blocks = blocks(text, &words);
        let structure_analysis = StructureAnalysis {
            total_words,
            estimated_duration_minutes: minutes,
            structure_type,
            sections,
            hook_strength: blocks.first().map_or(0.0, |b| self.hook_strength(b)),
            conclusion_strength: blocks.last().map_or(0.0, |b| conclusion_strength(b)),
            narrative_flow: narrative_flow(&blocks),
        };

        let quality_metrics = QualityMetrics {
            hook_quality,
            engagement_density,
            structure_presence,
            length_appropriateness,
            readability: readability(text, total_words),
            technique_diversity: (distinct(&identified) as f64 / DIVERSITY_TARGET).min(1.0),
        };

        let engagement_score = (HOOK_WEIGHT * hook_quality
            + DENSITY_WEIGHT * engagement_density
            + STRUCTURE_WEIGHT * structure_presence
            + LENGTH_WEIGHT * length_appropriateness)
            .clamp(0.0, 1.0);

        let recommendations = recommendations(
            &identified,
            &structure_analysis,
            &quality_metrics,
            too_short(minutes, total_words, target_minutes),
        );

        metrics::record_analysis();
        debug!(
            words = total_words,
            hooks = identified.hooks.len(),
            patterns = identified.patterns.len(),
            score = engagement_score,
            "Analyzed script"
        );

        AnalysisResult {
            video_id: video_id.map(str::to_string),
            script_text: text.to_string(),
            identified_techniques: identified,
            structure_analysis,
            engagement_score,
            quality_metrics,
            recommendations,
        }
    }

    /// Best matching structure; earlier catalog entries win ties.
    fn best_structure(&self, text: &str) -> (Option<StructureType>, f64, Vec<SectionPresence>) {
        let mut best: Option<(StructureType, f64, Vec<SectionPresence>)> = None;
        for structure in &self.structures {
            let (score, sections) = structure.presence(text);
            if best.as_ref().map_or(true, |(_, s, _)| score > *s) {
                best = Some((structure.structure_type, score, sections));
            }
        }
        match best {
            Some((structure_type, score, sections)) if score > 0.0 => {
                (Some(structure_type), score, sections)
            }
            _ => (None, 0.0, Vec::new()),
        }
    }

    fn hook_strength(&self, block: &str) -> f64 {
        let marker_hits = self
            .hooks
            .iter()
            .flat_map(|h| h.markers.iter())
            .filter(|re| re.is_match(block))
            .count();
        let lower = block.to_lowercase();
        let emotional = EMOTIONAL_WORDS.iter().filter(|w| lower.contains(*w)).count();
        let promises = count_matches(&PROMISES, block);

        ((marker_hits as f64 * 0.3).min(0.6)
            + (emotional as f64 * 0.1).min(0.2)
            + (promises as f64 * 0.1).min(0.2))
        .min(1.0)
    }
}

fn count_matches(patterns: &[Regex], text: &str) -> usize {
    patterns.iter().filter(|re| re.is_match(text)).count()
}

fn conclusion_strength(block: &str) -> f64 {
    let cta = count_matches(&CTA, block);
    let summary = count_matches(&SUMMARY, block);
    ((cta as f64 * 0.3).min(0.6) + (summary as f64 * 0.2).min(0.4)).min(1.0)
}

/// Share of blocks after the first that open with a transition.
fn narrative_flow(blocks: &[String]) -> f64 {
    if blocks.len() < 2 {
        return 0.5;
    }
    let opened = blocks[1..]
        .iter()
        .filter(|block| {
            let head: String = block.chars().take(100).collect();
            TRANSITIONS.is_match(&head)
        })
        .count();
    opened as f64 / (blocks.len() - 1) as f64
}

/// Paragraphs when the text has several, otherwise four equal word runs.
fn blocks(text: &str, words: &[&str]) -> Vec<String> {
    let paragraphs: Vec<String> = text
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    if paragraphs.len() >= 2 {
        return paragraphs;
    }
    if words.is_empty() {
        return Vec::new();
    }
    let size = words.len().div_ceil(4);
    words.chunks(size).map(|chunk| chunk.join(" ")).collect()
}

fn length_by_words(words: usize) -> f64 {
    match words {
        300..=2000 => 1.0,
        200..=299 | 2001..=3000 => 0.67,
        _ => 0.33,
    }
}

fn too_short(minutes: f64, words: usize, target_minutes: Option<f64>) -> bool {
    match target_minutes {
        Some(target) => minutes < target,
        None => words < 300,
    }
}

fn readability(text: &str, words: usize) -> f64 {
    let sentences = SENTENCE_END
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count();
    if words == 0 || sentences == 0 {
        return 0.0;
    }
    let average = words as f64 / sentences as f64;
    if (10.0..=20.0).contains(&average) {
        1.0
    } else if (8.0..10.0).contains(&average) || (20.0 < average && average <= 25.0) {
        0.8
    } else if (6.0..8.0).contains(&average) || (25.0 < average && average <= 30.0) {
        0.6
    } else {
        0.4
    }
}

fn distinct(identified: &IdentifiedTechniques) -> usize {
    let keys: BTreeSet<&str> = identified
        .hooks
        .iter()
        .map(HookType::as_str)
        .chain(identified.patterns.iter().map(EngagementType::as_str))
        .chain(identified.story_elements.iter().map(StoryElement::as_str))
        .collect();
    keys.len()
}

fn recommendations(
    identified: &IdentifiedTechniques,
    structure: &StructureAnalysis,
    quality: &QualityMetrics,
    too_short: bool,
) -> Vec<String> {
    let mut out = Vec::new();
    let mut push = |s: &str| out.push(s.to_string());

    if identified.hooks.is_empty() {
        push("Adicione um hook forte no início do vídeo para capturar atenção");
    } else if quality.hook_quality < 0.5 {
        push("Fortaleça o hook com mais curiosidade, controvérsia ou história pessoal");
    }
    if quality.engagement_density < 0.5 {
        push("Adicione mais elementos de engajamento ao longo do vídeo");
    }
    if quality.structure_presence < 0.5 {
        push("Siga uma estrutura narrativa clara, cobrindo os elementos-chave de cada seção");
    }
    if quality.length_appropriateness < 0.5 {
        if too_short {
            push("Considere expandir o conteúdo - vídeos muito curtos podem ter menor alcance");
        } else {
            push("Considere dividir em vídeos menores ou remover conteúdo menos essencial");
        }
    }
    if structure.conclusion_strength < 0.5 {
        push("Melhore a conclusão com call-to-actions claros e resumo dos pontos principais");
    }
    if structure.narrative_flow < 0.5 {
        push("Use mais palavras de transição para melhorar o fluxo narrativo");
    }
    if quality.readability < 0.6 {
        push("Ajuste o tamanho das frases para melhorar a legibilidade");
    }
    if quality.technique_diversity < 0.4 {
        push("Diversifique as técnicas de storytelling usadas");
    }
    out
}
