//! Requests from front-end JSON.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use ytscript_models::{Audience, HookType, ScriptGenerationRequest, StructureType, Tone};

use crate::error::{EngineError, EngineResult};

/// Request as sent by front-ends, with every type name still a string.
#[derive(Debug, Deserialize)]
struct RawRequest {
    topic: String,
    #[serde(default)]
    description: Option<String>,
    niche: String,
    #[serde(default)]
    hook_type: Option<String>,
    #[serde(default)]
    structure_type: Option<String>,
    target_duration: u32,
    #[serde(default)]
    tone: Option<String>,
    #[serde(default)]
    target_audience: Option<String>,
    #[serde(default)]
    include_cta: Option<bool>,
    #[serde(default)]
    custom_context: BTreeMap<String, Value>,
}

/// Parse a JSON request.
///
/// Type names go through `FromStr`, so aliases such as `educacional` or
/// `beginner` are accepted. Unknown names and malformed JSON are
/// `InvalidParameter`.
pub fn parse_request(json: &str) -> EngineResult<ScriptGenerationRequest> {
    let raw: RawRequest = serde_json::from_str(json)
        .map_err(|e| EngineError::invalid_parameter(format!("invalid request JSON: {e}")))?;

    let mut request = ScriptGenerationRequest::new(raw.topic, raw.niche, raw.target_duration);
    request.description = raw.description;
    request.hook_type = raw.hook_type.as_deref().map(str::parse::<HookType>).transpose()?;
    request.structure_type = raw
        .structure_type
        .as_deref()
        .map(str::parse::<StructureType>)
        .transpose()?;
    if let Some(tone) = raw.tone {
        request.tone = tone.parse::<Tone>()?;
    }
    if let Some(audience) = raw.target_audience {
        request.target_audience = audience.parse::<Audience>()?;
    }
    if let Some(include_cta) = raw.include_cta {
        request.include_cta = include_cta;
    }
    request.custom_context = raw.custom_context;
    Ok(request)
}
