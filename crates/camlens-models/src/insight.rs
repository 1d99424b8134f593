//! Director insight models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::ShotAnalysis;

/// Intent text used when no insight could be generated.
pub const ANALYSIS_UNAVAILABLE: &str = "Analysis unavailable";

/// Free-text commentary on a shot from the narrative-generation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DirectorInsight {
    /// Likely directorial intent
    pub intent: String,
    /// Technical execution details
    #[serde(default)]
    pub technical: String,
    /// How the shot connects to the surrounding scene
    #[serde(default)]
    pub context: String,
    /// Suggestions for improving or varying the shot
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl DirectorInsight {
    /// Placeholder used when generation fails.
    pub fn unavailable() -> Self {
        Self {
            intent: ANALYSIS_UNAVAILABLE.to_string(),
            technical: String::new(),
            context: String::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        self.intent == ANALYSIS_UNAVAILABLE
            && self.technical.is_empty()
            && self.context.is_empty()
            && self.suggestions.is_empty()
    }
}

impl Default for DirectorInsight {
    fn default() -> Self {
        Self::unavailable()
    }
}

/// A shot analysis paired with its director insight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShotReport {
    #[serde(flatten)]
    pub analysis: ShotAnalysis,
    pub director_insight: DirectorInsight,
}

impl ShotReport {
    pub fn new(analysis: ShotAnalysis, director_insight: DirectorInsight) -> Self {
        Self {
            analysis,
            director_insight,
        }
    }
}
