//! Engine error types.

use thiserror::Error;
use ytscript_catalog::CatalogError;
use ytscript_models::{AudienceParseError, TechniqueParseError, ToneParseError};

pub type EngineResult<T> = Result<T, EngineError>;

/// Failures surfaced by the generation and analysis calls.
///
/// Raised synchronously by the call that detects them; the engine never
/// returns a partially built script.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl EngineError {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render(_))
    }

    /// Stable label for metrics and front-end display.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidParameter(_) => "invalid_parameter",
            Self::NotFound(_) => "not_found",
            Self::Render(_) => "render",
        }
    }
}

impl From<CatalogError> for EngineError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { .. } => Self::NotFound(err.to_string()),
            CatalogError::InvalidParameter(msg) => Self::InvalidParameter(msg),
            CatalogError::InvalidCatalog(msg) => Self::InvalidParameter(format!("invalid catalog: {msg}")),
            CatalogError::Json(e) => Self::InvalidParameter(format!("invalid catalog JSON: {e}")),
        }
    }
}

impl From<validator::ValidationErrors> for EngineError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::InvalidParameter(err.to_string())
    }
}

impl From<TechniqueParseError> for EngineError {
    fn from(err: TechniqueParseError) -> Self {
        Self::InvalidParameter(err.to_string())
    }
}

impl From<ToneParseError> for EngineError {
    fn from(err: ToneParseError) -> Self {
        Self::InvalidParameter(err.to_string())
    }
}

impl From<AudienceParseError> for EngineError {
    fn from(err: AudienceParseError) -> Self {
        Self::InvalidParameter(err.to_string())
    }
}
