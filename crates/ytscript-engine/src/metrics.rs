//! Engine metrics.
//!
//! Recording is a no-op until the host process installs a `metrics` recorder.

use metrics::{counter, histogram};

// =============================================================================
// Metric Names
// =============================================================================

pub mod names {
    /// Scripts generated, by niche.
    pub const SCRIPTS_GENERATED_TOTAL: &str = "ytscript_scripts_generated_total";

    /// Composite quality of generated scripts.
    pub const SCRIPT_QUALITY: &str = "ytscript_script_quality";

    /// Analyses performed.
    pub const ANALYSES_TOTAL: &str = "ytscript_analyses_total";

    /// Failed generation calls, by error kind.
    pub const GENERATION_FAILURES_TOTAL: &str = "ytscript_generation_failures_total";
}

// =============================================================================
// Recording Functions
// =============================================================================

/// Record a generated script and its composite quality.
pub fn record_script_generated(niche: &str, quality: f64) {
    counter!(
        names::SCRIPTS_GENERATED_TOTAL,
        "niche" => niche.to_string()
    )
    .increment(1);

    histogram!(names::SCRIPT_QUALITY).record(quality);
}

/// Record one script analysis.
pub fn record_analysis() {
    counter!(names::ANALYSES_TOTAL).increment(1);
}

/// Record a failed generation call, labelled with [`EngineError::kind`](crate::EngineError::kind).
pub fn record_generation_failure(kind: &'static str) {
    counter!(
        names::GENERATION_FAILURES_TOTAL,
        "kind" => kind
    )
    .increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names() {
        assert!(names::SCRIPTS_GENERATED_TOTAL.ends_with("_total"));
        assert!(names::GENERATION_FAILURES_TOTAL.contains("failures"));
        assert!(names::SCRIPT_QUALITY.contains("quality"));
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_script_generated("tecnologia", 0.7);
        record_analysis();
        record_generation_failure("render");
    }
}
