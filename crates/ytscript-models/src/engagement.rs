//! Engagement pattern models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::technique::EngagementType;

/// Where in a video a pattern should be placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimingMarker {
    /// Absolute minute mark, e.g. "3-4 minutos" is 3.5
    Minute { minute: f64, label: String },
    /// Share of the video length (0.0 = opening, 1.0 = end)
    Fraction { fraction: f64, label: String },
}

impl TimingMarker {
    pub fn minute(minute: f64, label: impl Into<String>) -> Self {
        Self::Minute {
            minute,
            label: label.into(),
        }
    }

    pub fn fraction(fraction: f64, label: impl Into<String>) -> Self {
        Self::Fraction {
            fraction,
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Minute { label, .. } | Self::Fraction { label, .. } => label,
        }
    }

    /// Offset in minutes for a video of `video_length` minutes.
    ///
    /// The result is not clamped; callers decide how to handle marks outside the video.
    pub fn offset_minutes(&self, video_length: f64) -> f64 {
        match self {
            Self::Minute { minute, .. } => *minute,
            Self::Fraction { fraction, .. } => fraction * video_length,
        }
    }
}

/// Mid-script technique used to sustain attention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EngagementTechnique {
    pub name: String,

    #[serde(rename = "type")]
    pub technique_type: EngagementType,

    pub description: String,

    pub when_to_use: String,

    pub template: String,

    pub examples: Vec<String>,

    /// Design constant in [0, 1]
    pub effectiveness_score: f64,

    /// Ordered placement suggestions
    pub timing_recommendations: Vec<TimingMarker>,

    #[serde(default)]
    pub markers: Vec<String>,
}

impl EngagementTechnique {
    pub fn first_example(&self) -> Option<&str> {
        self.examples.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        assert!((TimingMarker::minute(3.5, "3-4 minutos").offset_minutes(10.0) - 3.5).abs() < 1e-9);
        assert!((TimingMarker::fraction(0.5, "Meio do vídeo").offset_minutes(8.0) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_marker_wire_format() {
        let value = serde_json::to_value(TimingMarker::fraction(0.9, "Conclusão")).unwrap();
        assert_eq!(value["kind"], "fraction");
        assert_eq!(value["label"], "Conclusão");
    }
}
