//! Script text renderer.
//!
//! Turns a [`ScriptStructure`] into narration text. Tone and audience pick
//! from fixed phrase tables; every pick is derived from the section position,
//! so identical inputs always render identical text.

use regex::Regex;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use ytscript_models::{
    Audience, AssignedTechnique, EngagementType, RenderedSection, ScriptGenerationRequest,
    ScriptStructure, SectionKind, StructureSection, Tone,
};

use crate::config::GenerationConfig;
use crate::error::{EngineError, EngineResult};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

// =============================================================================
// Phrase Tables
// =============================================================================

struct ToneProfile {
    connectors: &'static [&'static str],
    emphasis: &'static [&'static str],
    transitions: &'static [&'static str],
}

fn tone_profile(tone: Tone) -> &'static ToneProfile {
    match tone {
        Tone::Casual => &ToneProfile {
            connectors: &["Olha", "Cara", "Mano", "Galera", "Pessoal"],
            emphasis: &["super", "muito", "demais", "pra caramba"],
            transitions: &["Agora", "Aí", "Então", "Daí", "Tipo assim"],
        },
        Tone::Professional => &ToneProfile {
            connectors: &["Vamos analisar", "É importante notar", "Considerando"],
            emphasis: &["significativamente", "consideravelmente", "extremamente"],
            transitions: &["Em seguida", "Posteriormente", "Ademais", "Além disso"],
        },
        Tone::Enthusiastic => &ToneProfile {
            connectors: &["Gente!", "Isso é incrível!", "Olha que incrível!"],
            emphasis: &["MUITO", "extremamente", "incrivelmente", "fantasticamente"],
            transitions: &["E agora", "E mais", "E tem mais", "Espera que tem mais"],
        },
        Tone::Educational => &ToneProfile {
            connectors: &["Vamos entender", "É fundamental", "Primeiro ponto"],
            emphasis: &["claramente", "precisamente", "especificamente"],
            transitions: &["Primeiro", "Segundo", "Em terceiro lugar", "Para concluir"],
        },
    }
}

struct AudienceProfile {
    /// Restate each section's purpose in plain words
    explanations: bool,
    /// Opening remark for audiences that skip the basics
    level_note: Option<&'static str>,
    /// Closing clause of every element sentence, one vocabulary level per audience
    vocabulary: &'static [&'static str],
}

fn audience_profile(audience: Audience) -> &'static AudienceProfile {
    match audience {
        Audience::Beginner => &AudienceProfile {
            explanations: true,
            level_note: Some("Se você está começando agora, fica tranquilo: vamos do zero."),
            vocabulary: &[
                "sem nenhum termo complicado",
                "bem devagar e com calma",
                "sem pular nenhuma etapa",
            ],
        },
        Audience::General => &AudienceProfile {
            explanations: true,
            level_note: None,
            vocabulary: &[
                "de um jeito que qualquer pessoa entende",
                "sem enrolação",
                "de forma direta e prática",
            ],
        },
        Audience::Intermediate => &AudienceProfile {
            explanations: false,
            level_note: Some("Como você já conhece o básico, vou direto à prática."),
            vocabulary: &[
                "usando os termos técnicos certos",
                "do jeito que se faz no dia a dia profissional",
                "com as ferramentas do fluxo de trabalho",
            ],
        },
        Audience::Advanced => &AudienceProfile {
            explanations: false,
            level_note: Some("Como você já domina os fundamentos, vou direto aos detalhes avançados."),
            vocabulary: &[
                "incluindo os casos de borda",
                "pensando em desempenho e escala",
                "considerando as decisões de arquitetura envolvidas",
            ],
        },
    }
}

const ELEMENT_LEADS: &[&str] = &["Quando falamos de", "No ponto de", "Sobre"];

const CTA_LINES: &[&str] = &[
    "Se esse vídeo foi útil para você, deixe seu like.",
    "Se inscreva no canal se ainda não é inscrito.",
    "Ative o sininho para não perder os próximos vídeos.",
];

fn pick<'t>(table: &[&'t str], slot: usize) -> &'t str {
    table[slot % table.len()]
}

// =============================================================================
// Render Context
// =============================================================================

/// Values available to templates.
///
/// Recognised placeholders are `{topic}`, `{subject}`, `{description}`,
/// `{connector}` and `{emphasis}`, plus any key of `custom`. A template that
/// references `{description}` while none was supplied is replaced by the
/// technique's first example.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub topic: &'a str,
    /// Lowercase topic for mid-sentence use
    pub subject: String,
    pub description: Option<&'a str>,
    pub tone: Tone,
    pub audience: Audience,
    pub custom: &'a BTreeMap<String, Value>,
}

impl<'a> RenderContext<'a> {
    pub fn from_request(request: &'a ScriptGenerationRequest) -> Self {
        let topic = request.topic.trim();
        Self {
            topic,
            subject: topic.to_lowercase(),
            description: request.effective_description(),
            tone: request.tone,
            audience: request.target_audience,
            custom: &request.custom_context,
        }
    }
}

enum FillError {
    MissingDescription,
    Unknown(String),
}

impl RenderContext<'_> {
    fn fill(&self, template: &str, slot: usize) -> Result<String, FillError> {
        let tone = tone_profile(self.tone);
        let mut out = String::with_capacity(template.len() + 32);
        let mut last = 0;
        for caps in PLACEHOLDER.captures_iter(template) {
            let (Some(whole), Some(key)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            out.push_str(&template[last..whole.start()]);
            match key.as_str() {
                "topic" => out.push_str(self.topic),
                "subject" => out.push_str(&self.subject),
                "description" => out.push_str(self.description.ok_or(FillError::MissingDescription)?),
                "connector" => out.push_str(pick(tone.connectors, slot)),
                "emphasis" => out.push_str(pick(tone.emphasis, slot)),
                other => match self.custom.get(other) {
                    Some(Value::String(s)) => out.push_str(s),
                    Some(value) => out.push_str(&value.to_string()),
                    None => return Err(FillError::Unknown(other.to_string())),
                },
            }
            last = whole.end();
        }
        out.push_str(&template[last..]);
        Ok(out)
    }

    /// Fill `template`, falling back to the first example when it needs a
    /// description that is absent.
    fn render_template(
        &self,
        owner: &str,
        template: &str,
        examples: &[String],
        slot: usize,
    ) -> EngineResult<String> {
        match self.fill(template, slot) {
            Ok(text) => Ok(text),
            Err(FillError::MissingDescription) => {
                let example = examples.first().ok_or_else(|| {
                    EngineError::render(format!(
                        "'{owner}' requires a description and has no example to fall back on"
                    ))
                })?;
                self.fill(example, slot).map_err(|e| placeholder_error(owner, e))
            }
            Err(e) => Err(placeholder_error(owner, e)),
        }
    }
}

fn placeholder_error(owner: &str, err: FillError) -> EngineError {
    match err {
        FillError::MissingDescription => {
            EngineError::render(format!("'{owner}' requires a description"))
        }
        FillError::Unknown(key) => {
            EngineError::render(format!("unknown placeholder {{{key}}} in '{owner}'"))
        }
    }
}

// =============================================================================
// Renderer
// =============================================================================

/// Rendered text plus the per-section view.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedScript {
    pub script_text: String,
    pub sections: Vec<RenderedSection>,
    pub structure_breakdown: BTreeMap<String, String>,
}

impl RenderedScript {
    pub fn word_count(&self) -> usize {
        self.script_text.split_whitespace().count()
    }
}

#[derive(Debug, Clone)]
pub struct ScriptRenderer {
    cta_duration_minutes: f64,
    min_words: usize,
    max_words: usize,
}

impl ScriptRenderer {
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            cta_duration_minutes: config.cta_duration_minutes,
            min_words: config.min_script_length,
            max_words: config.max_script_length,
        }
    }

    /// Render every section and, when `include_cta` is set, a closing call-to-action.
    ///
    /// Fails with `InvalidParameter` when the text falls outside the configured
    /// word bounds.
    pub fn render(
        &self,
        structure: &ScriptStructure,
        ctx: &RenderContext<'_>,
        include_cta: bool,
    ) -> EngineResult<RenderedScript> {
        let mut sections = Vec::with_capacity(structure.sections.len() + 1);
        for section in &structure.sections {
            let text = self.render_section(structure, section, ctx)?;
            sections.push(RenderedSection {
                key: format!("{:02}_{}", section.index + 1, slug(&section.name)),
                name: section.name.clone(),
                kind: SectionKind::Structure,
                start_minute: section.start_minute,
                end_minute: section.end_minute,
                assigned_techniques: section.assigned_techniques.clone(),
                text,
            });
        }

        if include_cta {
            let start = f64::from(structure.video_length);
            sections.push(RenderedSection {
                key: format!("{:02}_call_to_action", sections.len() + 1),
                name: "Call to Action".to_string(),
                kind: SectionKind::CallToAction,
                start_minute: start,
                end_minute: start + self.cta_duration_minutes,
                assigned_techniques: Vec::new(),
                text: call_to_action(ctx),
            });
        }

        let script_text = sections
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        let words = script_text.split_whitespace().count();
        if words < self.min_words || words > self.max_words {
            return Err(EngineError::invalid_parameter(format!(
                "rendered script has {words} words, outside the configured {}..={} range",
                self.min_words, self.max_words
            )));
        }

        let structure_breakdown = sections
            .iter()
            .map(|s| (s.key.clone(), s.text.clone()))
            .collect();

        Ok(RenderedScript {
            script_text,
            sections,
            structure_breakdown,
        })
    }

    fn render_section(
        &self,
        structure: &ScriptStructure,
        section: &StructureSection,
        ctx: &RenderContext<'_>,
    ) -> EngineResult<String> {
        let index = section.index;
        let count = structure.sections.len();
        let tone = tone_profile(ctx.tone);
        let audience = audience_profile(ctx.audience);
        let template = structure.structure.sections.get(index);

        let mut body: Vec<String> = Vec::new();
        if let Some(example) = template.and_then(|t| t.examples.first()) {
            body.push(ctx.render_template(&section.name, example, &[], index)?);
        }
        for (j, element) in section.key_elements.iter().enumerate() {
            body.push(element_sentence(element, j, index + j, ctx));
        }
        if audience.explanations {
            body.push(format!("Em outras palavras: {}.", lower_first(&section.purpose)));
        }
        if index == 0 {
            if let Some(note) = audience.level_note {
                body.push(note.to_string());
            }
        }
        if index == 1.min(count - 1) {
            if let Some(description) = ctx.description {
                body.push(format!("Isso vale especialmente para quem quer {description}."));
            }
        }

        let mut seen: BTreeSet<EngagementType> = BTreeSet::new();
        for technique in &section.assigned_techniques {
            let AssignedTechnique::Pattern { pattern_type, .. } = technique else {
                continue;
            };
            if !seen.insert(*pattern_type) {
                continue;
            }
            let Some(pattern) = structure
                .patterns
                .iter()
                .find(|p| p.technique_type == *pattern_type)
            else {
                return Err(EngineError::render(format!(
                    "pattern {pattern_type} is assigned but missing from the structure"
                )));
            };
            body.push(ctx.render_template(&pattern.name, &pattern.template, &pattern.examples, index)?);
        }

        let mut parts = Vec::with_capacity(body.len() + 1);
        if index == 0 {
            parts.push(self.hook_line(structure, ctx)?);
            parts.extend(body);
        } else {
            let transition = pick(tone.transitions, index - 1);
            let mut body = body.into_iter();
            match body.next() {
                Some(first) => parts.push(format!("{transition}, {}", lower_first(&first))),
                None => parts.push(format!("{transition}.")),
            }
            parts.extend(body);
        }
        Ok(parts.join(" "))
    }

    fn hook_line(&self, structure: &ScriptStructure, ctx: &RenderContext<'_>) -> EngineResult<String> {
        let hook = &structure.hook;
        // Tone rewrites the technique's own wording, never substituted values
        let template = apply_tone(&hook.template, ctx.tone);
        let examples: Vec<String> = hook.examples.iter().map(|e| apply_tone(e, ctx.tone)).collect();
        let text = ctx.render_template(&hook.name, &template, &examples, 0)?;
        let connector = pick(tone_profile(ctx.tone).connectors, 0);
        if connector.ends_with('!') {
            Ok(format!("{connector} {text}"))
        } else {
            Ok(format!("{connector}, {}", lower_first(&text)))
        }
    }
}

fn element_sentence(element: &str, position: usize, slot: usize, ctx: &RenderContext<'_>) -> String {
    let lead = pick(ELEMENT_LEADS, position);
    let el = element.to_lowercase();
    let subject = &ctx.subject;

    let statement = if el.contains("problema") || el.contains("dor") || el.contains("frustra") {
        format!("o principal problema com {subject} é que a maioria das pessoas aborda tudo de forma errada")
    } else if el.contains("solução") || el.contains("método") || el.contains("abordagem") {
        format!("a solução muda tudo: em vez de encarar {subject} da forma tradicional, você começa por uma abordagem diferente")
    } else if el.contains("exemplo") || el.contains("demonstra") {
        format!("nada substitui um exemplo prático de {subject} feito com calma")
    } else if el.contains("resultado") || el.contains("transforma") {
        format!("o resultado aparece quando você aplica isso em {subject} com consistência")
    } else {
        let emphasis = pick(tone_profile(ctx.tone).emphasis, slot);
        format!("isso é {emphasis} importante para {subject}")
    };
    let vocabulary = pick(audience_profile(ctx.audience).vocabulary, slot);
    format!("{lead} {el}, {statement}, {vocabulary}.")
}

fn call_to_action(ctx: &RenderContext<'_>) -> String {
    let mut parts = vec![
        format!("Então, recapitulando: hoje você aprendeu sobre {}.", ctx.topic),
        "O mais importante é que você comece a aplicar isso hoje mesmo.".to_string(),
    ];
    parts.extend(CTA_LINES.iter().map(|s| s.to_string()));
    parts.push("Valeu pessoal, e até o próximo vídeo!".to_string());
    parts.join(" ")
}

/// Enthusiastic hooks exclaim; professional hooks never do.
fn apply_tone(text: &str, tone: Tone) -> String {
    match tone {
        Tone::Enthusiastic => text.replace('.', "!").replace(" muito ", " MUITO "),
        Tone::Professional => text.replace('!', "."),
        Tone::Casual | Tone::Educational => text.to_string(),
    }
}

fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            // Keep acronyms and shouted words such as "NÃO" as written
            let second_upper = chars.clone().next().is_some_and(char::is_uppercase);
            if second_upper {
                text.to_string()
            } else {
                first.to_lowercase().chain(chars).collect()
            }
        }
        None => String::new(),
    }
}

fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}
