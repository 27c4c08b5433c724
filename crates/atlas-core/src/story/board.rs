//! The story board aggregate.
//!
//! All story and comment mutations go through this value type. Every
//! operation targeting a missing story or comment id is a silent no-op: the
//! methods report whether anything changed, and callers are free to ignore
//! the answer.

use super::model::{Comment, Story};
use crate::analysis::StoryAnalysis;
use serde::{Deserialize, Serialize};

/// The in-memory collection of every story visible this session.
///
/// Kept newest-first: sharing prepends. Stories are never removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryBoard {
    stories: Vec<Story>,
}

impl StoryBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from pre-ordered stories (newest first).
    pub fn from_stories(stories: Vec<Story>) -> Self {
        Self { stories }
    }

    /// Prepends a freshly shared story.
    pub fn insert_front(&mut self, story: Story) {
        self.stories.insert(0, story);
    }

    /// Replaces a story's content and analysis in one step.
    ///
    /// Both fields change together so an in-flight edit either fully lands
    /// or not at all; the last edit to resolve overwrites earlier ones.
    pub fn apply_edit(
        &mut self,
        story_id: &str,
        content: impl Into<String>,
        analysis: StoryAnalysis,
    ) -> bool {
        match self.get_mut(story_id) {
            Some(story) => {
                story.content = content.into();
                story.analysis = Some(analysis);
                true
            }
            None => false,
        }
    }

    /// Appends a comment to a story's thread.
    pub fn add_comment(&mut self, story_id: &str, comment: Comment) -> bool {
        match self.get_mut(story_id) {
            Some(story) => {
                story.comments.push(comment);
                true
            }
            None => false,
        }
    }

    /// Removes the comment with the given id, keeping the order of the rest.
    pub fn delete_comment(&mut self, story_id: &str, comment_id: &str) -> bool {
        match self.get_mut(story_id) {
            Some(story) => {
                let before = story.comments.len();
                story.comments.retain(|c| c.id != comment_id);
                story.comments.len() != before
            }
            None => false,
        }
    }

    /// Increments a comment's helpful count.
    pub fn mark_comment_helpful(&mut self, story_id: &str, comment_id: &str) -> bool {
        match self
            .get_mut(story_id)
            .and_then(|s| s.comments.iter_mut().find(|c| c.id == comment_id))
        {
            Some(comment) => {
                comment.helpful_count += 1;
                true
            }
            None => false,
        }
    }

    /// Increments a story's uplift count.
    ///
    /// Unbounded and unauthenticated: the same reader may uplift the same
    /// story any number of times.
    pub fn uplift(&mut self, story_id: &str) -> bool {
        match self.get_mut(story_id) {
            Some(story) => {
                story.uplift_count += 1;
                true
            }
            None => false,
        }
    }

    /// Finds a story by id.
    pub fn get(&self, story_id: &str) -> Option<&Story> {
        self.stories.iter().find(|s| s.id == story_id)
    }

    fn get_mut(&mut self, story_id: &str) -> Option<&mut Story> {
        self.stories.iter_mut().find(|s| s.id == story_id)
    }

    /// All stories in display order (newest first).
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Story> {
        self.stories.iter()
    }
}
