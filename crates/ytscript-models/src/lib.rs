//! Shared data models for the YTScript storytelling engine.
//!
//! This crate provides Serde-serializable types for:
//! - The technique taxonomy (hooks, narrative structures, engagement patterns)
//! - Script generation requests
//! - Timed script structures and generated scripts
//! - Script analysis results

pub mod analysis;
pub mod engagement;
pub mod hook;
pub mod request;
pub mod script;
pub mod structure;
pub mod technique;

// Re-export common types
pub use analysis::{
    AnalysisResult, IdentifiedTechniques, QualityMetrics, SectionPresence, StoryElement,
    StructureAnalysis,
};
pub use engagement::{EngagementTechnique, TimingMarker};
pub use hook::Hook;
pub use request::{
    Audience, AudienceParseError, ScriptGenerationRequest, Tone, ToneParseError,
    MAX_DESCRIPTION_CHARS, MAX_TARGET_DURATION,
};
pub use script::{
    AssignedTechnique, GeneratedScript, RenderedSection, ScriptMetadata, ScriptStructure,
    SectionKind, StructureSection,
};
pub use structure::{NarrativeSection, NarrativeStructure, FRACTION_TOLERANCE};
pub use technique::{EngagementType, HookType, StructureType, TechniqueCategory, TechniqueParseError};
