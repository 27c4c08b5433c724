//! Application state.
//!
//! One explicit value type holds everything the presentation layer renders.
//! The session controller owns the single instance; handing out cloned
//! snapshots keeps readers decoupled from in-flight mutations.

use crate::connection::ConnectionLedger;
use crate::identity::Identity;
use crate::mood::MoodLog;
use crate::sanctuary::PlayerState;
use crate::story::StoryBoard;
use serde::{Deserialize, Serialize};

/// The screen the presentation layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppView {
    Auth,
    Feed,
    Share,
    Concept,
    MySpace,
    Sanctuary,
}

/// The complete session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// The logged-in identity, if any
    pub identity: Option<Identity>,
    /// Every story visible this session
    pub board: StoryBoard,
    /// The active identity's mood history
    pub moods: MoodLog,
    /// Connection requests raised this session
    pub connections: ConnectionLedger,
    /// Current screen
    pub view: AppView,
    /// Whether the crisis notice is showing
    pub crisis_visible: bool,
    /// Ambient-audio playback state
    pub player: PlayerState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            identity: None,
            board: StoryBoard::new(),
            moods: MoodLog::new(),
            connections: ConnectionLedger::new(),
            view: AppView::Auth,
            crisis_visible: false,
            player: PlayerState::default(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
