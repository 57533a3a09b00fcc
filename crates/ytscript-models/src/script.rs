//! Script structure and generated script models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::analysis::AnalysisResult;
use crate::engagement::EngagementTechnique;
use crate::hook::Hook;
use crate::request::{Audience, Tone};
use crate::structure::NarrativeStructure;
use crate::technique::{EngagementType, HookType, StructureType};

/// A technique attached to a section of the script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum AssignedTechnique {
    /// The opening hook, always on the first section
    Hook { hook_type: HookType, name: String },
    /// An engagement pattern placed at `at_minute`
    Pattern {
        pattern_type: EngagementType,
        name: String,
        at_minute: f64,
        timing_label: String,
    },
}

impl AssignedTechnique {
    pub fn name(&self) -> &str {
        match self {
            Self::Hook { name, .. } | Self::Pattern { name, .. } => name,
        }
    }

    pub fn is_hook(&self) -> bool {
        matches!(self, Self::Hook { .. })
    }
}

/// A timed section produced by the structure builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StructureSection {
    /// 0-based position
    pub index: usize,
    pub name: String,
    pub purpose: String,
    pub key_elements: Vec<String>,
    pub start_minute: f64,
    pub end_minute: f64,
    /// Exact duration; the durations of all sections add up to the video length
    pub duration_seconds: u32,
    /// Word budget at the configured speaking rate
    pub target_words: u32,
    pub assigned_techniques: Vec<AssignedTechnique>,
}

impl StructureSection {
    pub fn duration_minutes(&self) -> f64 {
        f64::from(self.duration_seconds) / 60.0
    }

    pub fn hook(&self) -> Option<&AssignedTechnique> {
        self.assigned_techniques.iter().find(|t| t.is_hook())
    }
}

/// Output of the structure builder: resolved techniques plus the timed section list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScriptStructure {
    pub topic: String,
    pub niche: String,
    /// Minutes
    pub video_length: u32,
    pub hook: Hook,
    pub structure: NarrativeStructure,
    pub patterns: Vec<EngagementTechnique>,
    pub sections: Vec<StructureSection>,
    /// Suggested pattern names keyed by whole minute (25%, 50% and 75% marks)
    #[serde(default)]
    pub engagement_plan: BTreeMap<u32, Vec<String>>,
}

impl ScriptStructure {
    pub fn total_duration_seconds(&self) -> u32 {
        self.sections.iter().map(|s| s.duration_seconds).sum()
    }

    /// Names of the hook, structure and patterns in use.
    pub fn technique_names(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        names.insert(self.hook.name.clone());
        names.insert(self.structure.name.clone());
        for pattern in &self.patterns {
            names.insert(pattern.name.clone());
        }
        names
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Structure,
    CallToAction,
}

/// A section after text rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RenderedSection {
    /// Key in [`GeneratedScript::structure_breakdown`]
    pub key: String,
    pub name: String,
    pub kind: SectionKind,
    pub start_minute: f64,
    pub end_minute: f64,
    pub assigned_techniques: Vec<AssignedTechnique>,
    pub text: String,
}

/// Request parameters and chosen techniques, echoed back with the script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScriptMetadata {
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub niche: String,
    pub hook_type: HookType,
    pub structure_type: StructureType,
    pub pattern_types: Vec<EngagementType>,
    pub tone: Tone,
    pub target_audience: Audience,
    pub target_duration: u32,
    pub include_cta: bool,
}

/// A fully rendered and scored script. The engine does not keep a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeneratedScript {
    pub script_text: String,
    pub metadata: ScriptMetadata,
    pub techniques_used: BTreeSet<String>,
    /// Section key -> rendered text
    pub structure_breakdown: BTreeMap<String, String>,
    /// Ordered rendered sections
    pub sections: Vec<RenderedSection>,
    /// Minutes
    pub estimated_duration: f64,
    /// Composite score in [0, 1]
    pub quality_score: f64,
    /// Present when the engine is configured to attach a full analysis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisResult>,
}

impl GeneratedScript {
    pub fn first_section(&self) -> Option<&RenderedSection> {
        self.sections.first()
    }

    pub fn last_section(&self) -> Option<&RenderedSection> {
        self.sections.last()
    }

    pub fn word_count(&self) -> usize {
        self.script_text.split_whitespace().count()
    }
}
