//! Feed filtering and pagination.
//!
//! A pure projection over the story board: nothing here mutates stories,
//! and every call recomputes from the current board state.

use crate::story::{Story, StoryBoard};

/// Stories revealed per "load more" step.
pub const PAGE_SIZE: usize = 5;

/// The sentinel filter that matches every story.
pub const ALL_TONES: &str = "All";

/// A filter/pagination window over the feed.
///
/// Selecting a tone resets the window to the first page; loading more grows
/// it by one page. The window itself holds no stories, so it stays valid
/// across any board mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    filter: String,
    visible: usize,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedQuery {
    /// Starts unfiltered at the first page.
    pub fn new() -> Self {
        Self {
            filter: ALL_TONES.to_string(),
            visible: PAGE_SIZE,
        }
    }

    /// The currently selected tone (or [`ALL_TONES`]).
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Selects a tone and resets the window to the first page.
    pub fn set_filter(&mut self, tone: impl Into<String>) {
        self.filter = tone.into();
        self.visible = PAGE_SIZE;
    }

    /// Reveals one more page.
    pub fn load_more(&mut self) {
        self.visible += PAGE_SIZE;
    }

    /// Projects the visible window of the board through this query.
    pub fn page<'a>(&self, board: &'a StoryBoard) -> FeedPage<'a> {
        let matching: Vec<&Story> = board
            .iter()
            .filter(|story| self.matches(story))
            .collect();
        let total = matching.len();
        let stories: Vec<&Story> = matching.into_iter().take(self.visible).collect();
        let has_more = self.visible < total;
        FeedPage {
            stories,
            total,
            has_more,
        }
    }

    fn matches(&self, story: &Story) -> bool {
        if self.filter == ALL_TONES {
            return true;
        }
        story
            .analysis
            .as_ref()
            .is_some_and(|a| a.emotional_tone.iter().any(|t| t == &self.filter))
    }
}

/// One rendered window of the feed.
#[derive(Debug, Clone)]
pub struct FeedPage<'a> {
    /// Visible stories, board order preserved
    pub stories: Vec<&'a Story>,
    /// How many stories match the filter in total
    pub total: usize,
    /// Whether another "load more" would reveal anything
    pub has_more: bool,
}

/// The selectable filter tags: [`ALL_TONES`] followed by the de-duplicated
/// union of every analysis tone on the board, in first-seen order.
pub fn available_tones(board: &StoryBoard) -> Vec<String> {
    let mut tones = vec![ALL_TONES.to_string()];
    for story in board.iter() {
        if let Some(analysis) = &story.analysis {
            for tone in &analysis.emotional_tone {
                if !tones.iter().any(|t| t == tone) {
                    tones.push(tone.clone());
                }
            }
        }
    }
    tones
}
