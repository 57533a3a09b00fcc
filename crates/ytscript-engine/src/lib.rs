//! YTScript generation engine.
//!
//! Provides:
//! - Timed script structures built from a hook, a narrative structure and engagement patterns
//! - Tone and audience aware text rendering
//! - Marker based quality analysis of generated or external scripts
//! - Engine configuration and metrics

pub mod analyzer;
pub mod builder;
pub mod config;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod renderer;
pub mod request;

pub use analyzer::ScriptAnalyzer;
pub use builder::StructureBuilder;
pub use config::{EngineConfig, GenerationConfig, StorytellingConfig};
pub use error::{EngineError, EngineResult};
pub use generator::ScriptGenerator;
pub use renderer::{RenderContext, RenderedScript, ScriptRenderer};
pub use request::parse_request;
