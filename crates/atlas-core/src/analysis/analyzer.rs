//! Analyzer port.
//!
//! The analysis service is an external collaborator. The trait keeps the
//! fallible call explicit and testable in isolation; the session controller
//! is the only place that substitutes the fixed fallback values, so its
//! public operations always succeed from the caller's point of view.

use super::model::StoryAnalysis;
use async_trait::async_trait;
use thiserror::Error;

/// Tone feedback substituted when the tone-check call errors.
pub const FALLBACK_TONE_FEEDBACK: &str = "Keep writing from the heart.";

/// Errors that can occur when calling the analysis service.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Analysis service not configured: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Analysis service error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse analysis response: {0}")]
    Parse(String),
}

/// An abstract client for the story analysis service.
#[async_trait]
pub trait StoryAnalyzer: Send + Sync {
    /// Analyzes free-text story content.
    ///
    /// # Returns
    ///
    /// - `Ok(StoryAnalysis)`: the service produced an analysis
    /// - `Err(_)`: the call failed; callers decide how to recover (the
    ///   session controller substitutes [`StoryAnalysis::fallback`])
    async fn analyze(&self, content: &str) -> Result<StoryAnalysis, AnalysisError>;

    /// Returns a short encouragement about the tone of a draft.
    ///
    /// Used only pre-submission; the result is never stored.
    async fn check_tone(&self, content: &str) -> Result<String, AnalysisError>;
}
