//! Story analysis domain module.
//!
//! - `model`: analysis result types (`StoryAnalysis`, `CopingStrategy`)
//! - `analyzer`: the port to the external analysis service

mod analyzer;
mod model;

pub use analyzer::{AnalysisError, FALLBACK_TONE_FEEDBACK, StoryAnalyzer};
pub use model::{CopingStrategy, StoryAnalysis, StrategyKind};
