//! Story analysis domain models.
//!
//! These types mirror the JSON shape returned by the analysis service:
//! field names serialize in camelCase and the strategy kind uses the wire
//! labels `CBT` / `Grounding` / `Mindfulness`.

use serde::{Deserialize, Serialize};

/// The therapeutic framing of a coping strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyKind {
    #[serde(rename = "CBT")]
    Cbt,
    Grounding,
    Mindfulness,
}

/// A single suggested coping strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopingStrategy {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: StrategyKind,
}

/// The emotional analysis attached to a story.
///
/// Produced exclusively by the analysis service; when the service fails the
/// fixed [`StoryAnalysis::fallback`] value is substituted so a share or edit
/// never fails visibly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryAnalysis {
    /// Primary emotions detected (non-empty after a successful analysis)
    pub emotional_tone: Vec<String>,
    /// A short empathetic summary
    pub summary: String,
    /// Suggested coping strategies (may be empty)
    #[serde(default)]
    pub coping_strategies: Vec<CopingStrategy>,
    /// Notes on cultural background influence, when relevant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural_nuance: Option<String>,
    /// Whether the story suggests immediate danger
    pub is_crisis: bool,
}

impl StoryAnalysis {
    /// The fixed value substituted when the analysis service errors.
    ///
    /// Deliberately neutral: a reflective tone, a validating summary, no
    /// strategies, and no crisis signal.
    pub fn fallback() -> Self {
        Self {
            emotional_tone: vec!["Reflective".to_string()],
            summary: "Your story is valid.".to_string(),
            coping_strategies: Vec::new(),
            cultural_nuance: None,
            is_crisis: false,
        }
    }
}
