//! Story and comment domain models.

use crate::analysis::StoryAnalysis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reply on a story's thread.
///
/// Owned exclusively by its parent story; removable only by its own author
/// (enforced by the presentation layer, not the model).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// How many times readers marked this comment helpful
    #[serde(default)]
    pub helpful_count: u32,
}

impl Comment {
    /// Creates a new comment posted now, with a zero helpful count.
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author: author.into(),
            content: content.into(),
            timestamp: Utc::now(),
            helpful_count: 0,
        }
    }
}

/// A member-authored narrative with its analysis and comment thread.
///
/// Stories are never deleted. Comments keep insertion order with new replies
/// appended at the end; the feed itself displays stories newest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub content: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_avatar_seed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_avatar_color: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Analysis from the external service; absent only for stories that
    /// predate analysis (seeded data may omit it)
    pub analysis: Option<StoryAnalysis>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// How many readers reported feeling the same
    #[serde(default)]
    pub similar_feeling_count: u32,
    /// How many uplift reactions this story received
    #[serde(default)]
    pub uplift_count: u32,
}

impl Story {
    /// Creates a freshly shared story: no tags, no comments, one
    /// similar-feeling (the author), zero uplifts.
    pub fn new(
        content: impl Into<String>,
        author: impl Into<String>,
        analysis: StoryAnalysis,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            author: author.into(),
            author_avatar_seed: None,
            author_avatar_color: None,
            timestamp: Utc::now(),
            tags: Vec::new(),
            analysis: Some(analysis),
            comments: Vec::new(),
            similar_feeling_count: 1,
            uplift_count: 0,
        }
    }

    /// Sets the author's avatar settings.
    pub fn with_avatar(mut self, seed: Option<String>, color: Option<String>) -> Self {
        self.author_avatar_seed = seed;
        self.author_avatar_color = color;
        self
    }

    /// Whether the attached analysis flags this story as a possible crisis.
    pub fn is_crisis(&self) -> bool {
        self.analysis.as_ref().is_some_and(|a| a.is_crisis)
    }
}
