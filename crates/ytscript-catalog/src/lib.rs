//! Storytelling technique catalog for YTScript.
//!
//! Provides:
//! - The built-in seed of hooks, narrative structures and engagement patterns
//! - Typed and key-based lookups, statistics and JSON export
//! - Niche recommendations, search and combination resolution

pub mod catalog;
pub mod error;
pub mod recommendation;
mod seed;

pub use catalog::{
    CatalogStatistics, TechniqueCatalog, TechniqueRef, DEFAULT_MIN_HOOK_SCORE,
    DEFAULT_MIN_PATTERN_SCORE, DEFAULT_MIN_STRUCTURE_SCORE,
};
pub use error::{CatalogError, CatalogResult};
pub use recommendation::{
    Combination, CombinationReport, TechniqueSelection, PATTERN_RECOMMENDATION_THRESHOLD,
};
