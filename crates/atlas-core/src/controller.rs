//! The session controller.
//!
//! `SessionController` owns the single [`AppState`] value and every mutation
//! goes through it. Identity-gated operations return
//! [`AtlasError::NoActiveIdentity`] when called while logged out; operations
//! targeting a missing story, comment, or request id are silent no-ops.
//!
//! The only suspending operations are the ones that call the analyzer
//! (`share_story`, `edit_story`, `check_tone`). The analyzer call happens
//! outside the state lock, and results are applied at resolution: rapid
//! edits of the same story may interleave, and the last call to complete
//! overwrites. There is no cancellation of in-flight analysis.

use crate::analysis::{FALLBACK_TONE_FEEDBACK, StoryAnalysis, StoryAnalyzer};
use crate::connection::{ConnectionRequest, ConnectionStatus};
use crate::crisis::{CRISIS_HOTLINES, HotlineContact};
use crate::error::{AtlasError, Result};
use crate::identity::{Identity, IdentityPatch, IdentityRepository};
use crate::mood::{MoodEntry, MoodRepository};
use crate::sanctuary::find_track;
use crate::state::{AppState, AppView};
use crate::story::{Comment, Story};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Composes the identity, story board, mood log, and connection ledger, and
/// exposes every mutation the presentation layer may perform.
pub struct SessionController {
    /// The single application state value
    state: RwLock<AppState>,
    /// Persistent storage for the identity snapshot
    identity_repository: Arc<dyn IdentityRepository>,
    /// Persistent storage for the mood history snapshot
    mood_repository: Arc<dyn MoodRepository>,
    /// External analysis service
    analyzer: Arc<dyn StoryAnalyzer>,
}

impl SessionController {
    /// Creates a controller with empty state.
    pub fn new(
        identity_repository: Arc<dyn IdentityRepository>,
        mood_repository: Arc<dyn MoodRepository>,
        analyzer: Arc<dyn StoryAnalyzer>,
    ) -> Self {
        Self {
            state: RwLock::new(AppState::new()),
            identity_repository,
            mood_repository,
            analyzer,
        }
    }

    /// Restores persisted identity and mood history on startup.
    ///
    /// The view lands on the feed when an identity was restored, on the
    /// gateway otherwise. Unreadable snapshots degrade to absent/empty
    /// inside the repositories and never fail the restore.
    pub async fn restore(&self) -> Result<()> {
        let identity = self.identity_repository.load().await?;
        let entries = self.mood_repository.load().await?;

        let mut state = self.state.write().await;
        state.view = if identity.is_some() {
            AppView::Feed
        } else {
            AppView::Auth
        };
        state.identity = identity;
        state.moods = crate::mood::MoodLog::from_entries(entries);
        Ok(())
    }

    /// Loads pre-ordered stories (newest first) into the board.
    ///
    /// Used by the bootstrap to seed the starter feed.
    pub async fn seed_stories(&self, stories: Vec<Story>) {
        let mut state = self.state.write().await;
        state.board = crate::story::StoryBoard::from_stories(stories);
    }

    // ------------------------------------------------------------------
    // Identity
    // ------------------------------------------------------------------

    /// Replaces the session identity unconditionally and persists it.
    ///
    /// There is no uniqueness or credential check: any alias/PIN pair is
    /// accepted, for a fresh join and for the resume path alike.
    pub async fn login(&self, identity: Identity) -> Result<()> {
        self.identity_repository.save(&identity).await?;

        let mut state = self.state.write().await;
        info!(alias = %identity.alias, "identity logged in");
        state.identity = Some(identity);
        state.view = AppView::Feed;
        Ok(())
    }

    /// Clears the identity and mood history from memory and storage, stops
    /// any active audio, and returns to the gateway.
    ///
    /// Stories and connections stay in memory; they were never persisted.
    pub async fn logout(&self) -> Result<()> {
        {
            let mut state = self.state.write().await;
            state.identity = None;
            state.moods.clear();
            state.player.stop();
            state.view = AppView::Auth;
        }
        self.identity_repository.clear().await?;
        self.mood_repository.clear().await?;
        info!("identity logged out");
        Ok(())
    }

    /// Merges a partial profile update into the active identity and
    /// persists the result. A no-op while logged out.
    pub async fn update_user(&self, patch: IdentityPatch) -> Result<()> {
        let updated = {
            let mut state = self.state.write().await;
            let Some(identity) = state.identity.as_mut() else {
                return Ok(());
            };
            identity.apply(patch);
            identity.clone()
        };
        self.identity_repository.save(&updated).await
    }

    // ------------------------------------------------------------------
    // Stories
    // ------------------------------------------------------------------

    /// Shares a new story under the active identity.
    ///
    /// Suspends on the analysis call; an analysis failure is recovered with
    /// the fixed fallback so the share always lands. Returns the new
    /// story's id.
    pub async fn share_story(&self, content: &str) -> Result<String> {
        let identity = self.require_identity().await?;
        let analysis = self.analyze_or_fallback(content).await;
        let crisis = analysis.is_crisis;

        let story = Story::new(content, &identity.alias, analysis).with_avatar(
            identity.avatar_seed.clone(),
            identity.avatar_color.clone(),
        );
        let story_id = story.id.clone();

        let mut state = self.state.write().await;
        state.board.insert_front(story);
        if crisis {
            state.crisis_visible = true;
        }
        state.view = AppView::Feed;
        info!(story_id = %story_id, "story shared");
        Ok(story_id)
    }

    /// Re-analyzes edited content and replaces the story's content and
    /// analysis together when the call resolves.
    ///
    /// Last-resolved-wins: concurrent edits of the same story are not
    /// de-duplicated, and nothing is updated speculatively while the
    /// analysis is in flight. An unknown story id is a silent no-op.
    pub async fn edit_story(&self, story_id: &str, content: &str) -> Result<()> {
        let analysis = self.analyze_or_fallback(content).await;
        let crisis = analysis.is_crisis;

        let mut state = self.state.write().await;
        if state.board.apply_edit(story_id, content, analysis) {
            if crisis {
                state.crisis_visible = true;
            }
            info!(story_id = %story_id, "story edited");
        } else {
            debug!(story_id = %story_id, "edit targeted an unknown story");
        }
        Ok(())
    }

    /// Appends a comment under the active identity's alias.
    pub async fn add_comment(&self, story_id: &str, content: &str) -> Result<()> {
        let identity = self.require_identity().await?;
        let comment = Comment::new(&identity.alias, content);

        let mut state = self.state.write().await;
        state.board.add_comment(story_id, comment);
        Ok(())
    }

    /// Removes a comment by id. Missing targets are silent no-ops.
    pub async fn delete_comment(&self, story_id: &str, comment_id: &str) {
        let mut state = self.state.write().await;
        state.board.delete_comment(story_id, comment_id);
    }

    /// Increments a comment's helpful count. Missing targets are silent
    /// no-ops.
    pub async fn mark_comment_helpful(&self, story_id: &str, comment_id: &str) {
        let mut state = self.state.write().await;
        state.board.mark_comment_helpful(story_id, comment_id);
    }

    /// Increments a story's uplift count.
    ///
    /// No identity requirement and no de-duplication: repeated uplifts all
    /// count.
    pub async fn uplift_story(&self, story_id: &str) {
        let mut state = self.state.write().await;
        state.board.uplift(story_id);
    }

    // ------------------------------------------------------------------
    // Mood
    // ------------------------------------------------------------------

    /// Records a mood check-in and persists the whole history.
    ///
    /// The operation itself does not require an identity; the check-in UI
    /// is only reachable while logged in.
    pub async fn add_mood(
        &self,
        kind: &str,
        label: &str,
        note: Option<String>,
    ) -> Result<()> {
        let entry = MoodEntry::new(kind, label, note);
        let entries = {
            let mut state = self.state.write().await;
            state.moods.add(entry);
            state.moods.entries().to_vec()
        };
        self.mood_repository.save(&entries).await
    }

    // ------------------------------------------------------------------
    // Connections
    // ------------------------------------------------------------------

    /// Raises a pending connection request from the active identity to a
    /// story's author. The receiver alias is not validated, and duplicate
    /// requests for the same story are allowed. Returns the request id.
    pub async fn send_connection_request(
        &self,
        story_id: &str,
        receiver_alias: &str,
        note: &str,
    ) -> Result<String> {
        let identity = self.require_identity().await?;
        let request =
            ConnectionRequest::new(&identity.alias, receiver_alias, story_id, note);
        let request_id = request.id.clone();

        let mut state = self.state.write().await;
        state.connections.send(request);
        info!(request_id = %request_id, story_id = %story_id, "connection request sent");
        Ok(request_id)
    }

    /// Settles a pending request. Trust that the caller acts for the
    /// receiver is delegated to the presentation layer; settled requests
    /// never transition again.
    pub async fn update_connection(&self, request_id: &str, status: ConnectionStatus) {
        let mut state = self.state.write().await;
        if !state.connections.settle(request_id, status) {
            debug!(request_id = %request_id, "connection update was a no-op");
        }
    }

    // ------------------------------------------------------------------
    // Crisis notice
    // ------------------------------------------------------------------

    /// Hides the crisis notice. Story and analysis data are untouched; the
    /// next crisis-flagged analysis raises the notice again.
    pub async fn dismiss_crisis(&self) {
        let mut state = self.state.write().await;
        state.crisis_visible = false;
    }

    /// The support lines the crisis notice offers.
    pub fn crisis_hotlines(&self) -> &'static [HotlineContact] {
        &CRISIS_HOTLINES
    }

    // ------------------------------------------------------------------
    // Tone check
    // ------------------------------------------------------------------

    /// Pre-submission tone feedback for a draft.
    ///
    /// Never fails and never touches stored data; a service error yields
    /// the fixed encouragement line.
    pub async fn check_tone(&self, content: &str) -> String {
        match self.analyzer.check_tone(content).await {
            Ok(feedback) => feedback,
            Err(err) => {
                warn!(error = %err, "tone check failed, substituting fallback");
                FALLBACK_TONE_FEEDBACK.to_string()
            }
        }
    }

    // ------------------------------------------------------------------
    // Sanctuary audio
    // ------------------------------------------------------------------

    /// Starts a listening session on a built-in track. Unknown track ids
    /// are silent no-ops.
    pub async fn start_audio(&self, track_id: &str, duration_mins: u32) {
        if find_track(track_id).is_none() {
            debug!(track_id = %track_id, "unknown sanctuary track");
            return;
        }
        let mut state = self.state.write().await;
        state.player.start(track_id, duration_mins);
    }

    /// Stops any active listening session.
    pub async fn stop_audio(&self) {
        let mut state = self.state.write().await;
        state.player.stop();
    }

    /// Pauses or resumes the active session.
    pub async fn toggle_play(&self) {
        let mut state = self.state.write().await;
        state.player.toggle_play();
    }

    /// Sets the playback volume (clamped to `0.0..=1.0`).
    pub async fn set_volume(&self, volume: f32) {
        let mut state = self.state.write().await;
        state.player.set_volume(volume);
    }

    /// Advances the listening countdown by one second. Returns `true`
    /// while a session is still active.
    pub async fn tick_audio(&self) -> bool {
        let mut state = self.state.write().await;
        state.player.tick()
    }

    // ------------------------------------------------------------------
    // View & snapshots
    // ------------------------------------------------------------------

    /// Switches the visible screen.
    pub async fn set_view(&self, view: AppView) {
        let mut state = self.state.write().await;
        state.view = view;
    }

    /// A cloned snapshot of the full state for the presentation layer.
    pub async fn snapshot(&self) -> AppState {
        self.state.read().await.clone()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    async fn require_identity(&self) -> Result<Identity> {
        let state = self.state.read().await;
        state
            .identity
            .clone()
            .ok_or(AtlasError::NoActiveIdentity)
    }

    async fn analyze_or_fallback(&self, content: &str) -> StoryAnalysis {
        match self.analyzer.analyze(content).await {
            Ok(analysis) => analysis,
            Err(err) => {
                warn!(error = %err, "story analysis failed, substituting fallback");
                StoryAnalysis::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalysisError;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // Mock IdentityRepository for testing
    #[derive(Default)]
    struct MockIdentityRepository {
        stored: Mutex<Option<Identity>>,
    }

    #[async_trait::async_trait]
    impl IdentityRepository for MockIdentityRepository {
        async fn load(&self) -> Result<Option<Identity>> {
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn save(&self, identity: &Identity) -> Result<()> {
            *self.stored.lock().unwrap() = Some(identity.clone());
            Ok(())
        }

        async fn clear(&self) -> Result<()> {
            *self.stored.lock().unwrap() = None;
            Ok(())
        }
    }

    // Mock MoodRepository for testing
    #[derive(Default)]
    struct MockMoodRepository {
        stored: Mutex<Vec<MoodEntry>>,
    }

    #[async_trait::async_trait]
    impl MoodRepository for MockMoodRepository {
        async fn load(&self) -> Result<Vec<MoodEntry>> {
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn save(&self, entries: &[MoodEntry]) -> Result<()> {
            *self.stored.lock().unwrap() = entries.to_vec();
            Ok(())
        }

        async fn clear(&self) -> Result<()> {
            self.stored.lock().unwrap().clear();
            Ok(())
        }
    }

    // Scripted analyzer: pops one response per call, erroring when the
    // script says so or runs dry.
    struct ScriptedAnalyzer {
        responses: Mutex<VecDeque<Option<StoryAnalysis>>>,
    }

    impl ScriptedAnalyzer {
        fn failing() -> Self {
            Self {
                responses: Mutex::new(VecDeque::new()),
            }
        }

        fn with_responses(responses: Vec<Option<StoryAnalysis>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
            }
        }
    }

    #[async_trait::async_trait]
    impl StoryAnalyzer for ScriptedAnalyzer {
        async fn analyze(&self, _content: &str) -> std::result::Result<StoryAnalysis, AnalysisError> {
            match self.responses.lock().unwrap().pop_front() {
                Some(Some(analysis)) => Ok(analysis),
                _ => Err(AnalysisError::Network("scripted failure".to_string())),
            }
        }

        async fn check_tone(&self, _content: &str) -> std::result::Result<String, AnalysisError> {
            Err(AnalysisError::Network("scripted failure".to_string()))
        }
    }

    fn crisis_analysis() -> StoryAnalysis {
        StoryAnalysis {
            emotional_tone: vec!["Overwhelmed".to_string()],
            summary: "You are carrying too much alone.".to_string(),
            coping_strategies: Vec::new(),
            cultural_nuance: None,
            is_crisis: true,
        }
    }

    fn controller_with(analyzer: ScriptedAnalyzer) -> SessionController {
        SessionController::new(
            Arc::new(MockIdentityRepository::default()),
            Arc::new(MockMoodRepository::default()),
            Arc::new(analyzer),
        )
    }

    #[tokio::test]
    async fn test_share_with_failing_analyzer_substitutes_fallback() {
        let controller = controller_with(ScriptedAnalyzer::failing());
        controller.login(Identity::new("Nora", "1234")).await.unwrap();

        controller.share_story("I feel tired").await.unwrap();

        let state = controller.snapshot().await;
        assert_eq!(state.identity.as_ref().unwrap().alias, "Nora");
        let story = &state.board.stories()[0];
        assert_eq!(story.content, "I feel tired");
        assert_eq!(story.author, "Nora");
        let analysis = story.analysis.as_ref().unwrap();
        assert_eq!(analysis.summary, "Your story is valid.");
        assert!(!analysis.is_crisis);
        assert!(!state.crisis_visible);
        assert_eq!(state.view, AppView::Feed);
    }

    #[tokio::test]
    async fn test_share_requires_identity() {
        let controller = controller_with(ScriptedAnalyzer::failing());
        let err = controller.share_story("hello").await.unwrap_err();
        assert!(err.is_no_active_identity());
        assert!(controller.snapshot().await.board.is_empty());
    }

    #[tokio::test]
    async fn test_crisis_flag_sets_and_dismisses_independently() {
        let controller = controller_with(ScriptedAnalyzer::with_responses(vec![
            Some(crisis_analysis()),
            Some(StoryAnalysis::fallback()),
        ]));
        controller.login(Identity::new("Nora", "1234")).await.unwrap();

        controller.share_story("dark place").await.unwrap();
        assert!(controller.snapshot().await.crisis_visible);

        controller.dismiss_crisis().await;
        let state = controller.snapshot().await;
        assert!(!state.crisis_visible);
        // Dismissing never touches the stories themselves.
        assert!(state.board.stories()[0].is_crisis());

        // A later non-crisis analysis does not re-raise the notice.
        controller.share_story("better today").await.unwrap();
        assert!(!controller.snapshot().await.crisis_visible);
    }

    #[tokio::test]
    async fn test_edit_replaces_content_and_analysis_at_resolution() {
        let edited = StoryAnalysis {
            emotional_tone: vec!["Hopeful".to_string()],
            summary: "A turn toward light.".to_string(),
            coping_strategies: Vec::new(),
            cultural_nuance: None,
            is_crisis: false,
        };
        let controller = controller_with(ScriptedAnalyzer::with_responses(vec![
            Some(StoryAnalysis::fallback()),
            Some(edited.clone()),
        ]));
        controller.login(Identity::new("Nora", "1234")).await.unwrap();

        let story_id = controller.share_story("first draft").await.unwrap();
        controller.edit_story(&story_id, "second draft").await.unwrap();

        let state = controller.snapshot().await;
        let story = state.board.get(&story_id).unwrap();
        assert_eq!(story.content, "second draft");
        assert_eq!(story.analysis.as_ref().unwrap(), &edited);

        // Unknown ids are silent no-ops.
        controller.edit_story("missing", "x").await.unwrap();
        assert_eq!(controller.snapshot().await.board.len(), 1);
    }

    #[tokio::test]
    async fn test_comment_lifecycle() {
        let controller = controller_with(ScriptedAnalyzer::with_responses(vec![Some(
            StoryAnalysis::fallback(),
        )]));
        controller.login(Identity::new("A", "0000")).await.unwrap();
        let story_id = controller.share_story("a story").await.unwrap();

        controller.add_comment(&story_id, "Hi").await.unwrap();
        controller
            .update_user(IdentityPatch {
                alias: Some("B".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        controller.add_comment(&story_id, "Bye").await.unwrap();

        let state = controller.snapshot().await;
        let comments = &state.board.get(&story_id).unwrap().comments;
        assert_eq!(comments.len(), 2);
        assert_eq!((comments[0].author.as_str(), comments[0].content.as_str()), ("A", "Hi"));
        assert_eq!((comments[1].author.as_str(), comments[1].content.as_str()), ("B", "Bye"));

        let first_id = comments[0].id.clone();
        controller.delete_comment(&story_id, &first_id).await;
        let state = controller.snapshot().await;
        let comments = &state.board.get(&story_id).unwrap().comments;
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].content, "Bye");

        controller.mark_comment_helpful(&story_id, &comments[0].id.clone()).await;
        let state = controller.snapshot().await;
        assert_eq!(state.board.get(&story_id).unwrap().comments[0].helpful_count, 1);
    }

    #[tokio::test]
    async fn test_uplift_has_no_identity_requirement() {
        let controller = controller_with(ScriptedAnalyzer::with_responses(vec![Some(
            StoryAnalysis::fallback(),
        )]));
        controller.login(Identity::new("Nora", "1234")).await.unwrap();
        let story_id = controller.share_story("a story").await.unwrap();
        controller.logout().await.unwrap();

        for _ in 0..3 {
            controller.uplift_story(&story_id).await;
        }
        assert_eq!(
            controller.snapshot().await.board.get(&story_id).unwrap().uplift_count,
            3
        );
    }

    #[tokio::test]
    async fn test_mood_log_is_newest_first_and_persisted_wholesale() {
        let mood_repository = Arc::new(MockMoodRepository::default());
        let controller = SessionController::new(
            Arc::new(MockIdentityRepository::default()),
            mood_repository.clone(),
            Arc::new(ScriptedAnalyzer::failing()),
        );

        controller.add_mood("calm", "Calm", None).await.unwrap();
        controller.add_mood("stormy", "Stormy", None).await.unwrap();

        let state = controller.snapshot().await;
        let labels: Vec<&str> = state.moods.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Stormy", "Calm"]);

        let persisted = mood_repository.stored.lock().unwrap().clone();
        assert_eq!(persisted.len(), 2);
        assert_eq!(persisted[0].label, "Stormy");
    }

    #[tokio::test]
    async fn test_logout_clears_identity_and_moods_then_gates_comments() {
        let identity_repository = Arc::new(MockIdentityRepository::default());
        let mood_repository = Arc::new(MockMoodRepository::default());
        let controller = SessionController::new(
            identity_repository.clone(),
            mood_repository.clone(),
            Arc::new(ScriptedAnalyzer::with_responses(vec![Some(
                StoryAnalysis::fallback(),
            )])),
        );

        controller.login(Identity::new("Nora", "1234")).await.unwrap();
        let story_id = controller.share_story("a story").await.unwrap();
        controller.add_mood("calm", "Calm", None).await.unwrap();
        controller.start_audio("n1", 5).await;

        controller.logout().await.unwrap();

        let state = controller.snapshot().await;
        assert!(state.identity.is_none());
        assert!(state.moods.is_empty());
        assert!(state.player.track_id.is_none());
        assert_eq!(state.view, AppView::Auth);
        // Stories survive the logout; they were never persisted.
        assert_eq!(state.board.len(), 1);
        assert!(identity_repository.stored.lock().unwrap().is_none());
        assert!(mood_repository.stored.lock().unwrap().is_empty());

        let err = controller.add_comment(&story_id, "hello").await.unwrap_err();
        assert!(err.is_no_active_identity());
    }

    #[tokio::test]
    async fn test_connection_request_lifecycle() {
        let controller = controller_with(ScriptedAnalyzer::failing());
        controller.login(Identity::new("Nora", "1234")).await.unwrap();

        let request_id = controller
            .send_connection_request("story-1", "Kai", "your story moved me")
            .await
            .unwrap();
        controller
            .update_connection(&request_id, ConnectionStatus::Connected)
            .await;

        let state = controller.snapshot().await;
        let request = state.connections.get(&request_id).unwrap();
        assert_eq!(request.status, ConnectionStatus::Connected);
        assert_eq!(request.sender_alias, "Nora");
        assert_eq!(request.receiver_alias, "Kai");
        assert_eq!(request.story_id, "story-1");
        assert_eq!(request.initial_note, "your story moved me");

        // Terminal states never transition again.
        controller
            .update_connection(&request_id, ConnectionStatus::Declined)
            .await;
        let state = controller.snapshot().await;
        assert_eq!(
            state.connections.get(&request_id).unwrap().status,
            ConnectionStatus::Connected
        );
    }

    #[tokio::test]
    async fn test_send_connection_request_requires_identity() {
        let controller = controller_with(ScriptedAnalyzer::failing());
        let err = controller
            .send_connection_request("story-1", "Kai", "hi")
            .await
            .unwrap_err();
        assert!(err.is_no_active_identity());
    }

    #[tokio::test]
    async fn test_update_user_is_noop_while_logged_out() {
        let identity_repository = Arc::new(MockIdentityRepository::default());
        let controller = SessionController::new(
            identity_repository.clone(),
            Arc::new(MockMoodRepository::default()),
            Arc::new(ScriptedAnalyzer::failing()),
        );

        controller
            .update_user(IdentityPatch {
                alias: Some("Ghost".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(identity_repository.stored.lock().unwrap().is_none());
        assert!(controller.snapshot().await.identity.is_none());
    }

    #[tokio::test]
    async fn test_restore_lands_on_feed_with_persisted_identity() {
        let identity_repository = Arc::new(MockIdentityRepository::default());
        let mood_repository = Arc::new(MockMoodRepository::default());
        *identity_repository.stored.lock().unwrap() = Some(Identity::new("Nora", "1234"));
        *mood_repository.stored.lock().unwrap() =
            vec![MoodEntry::new("calm", "Calm", None)];

        let controller = SessionController::new(
            identity_repository,
            mood_repository,
            Arc::new(ScriptedAnalyzer::failing()),
        );
        controller.restore().await.unwrap();

        let state = controller.snapshot().await;
        assert_eq!(state.identity.as_ref().unwrap().alias, "Nora");
        assert_eq!(state.moods.len(), 1);
        assert_eq!(state.view, AppView::Feed);
    }

    #[tokio::test]
    async fn test_tone_check_falls_back_on_error() {
        let controller = controller_with(ScriptedAnalyzer::failing());
        let feedback = controller.check_tone("my draft").await;
        assert_eq!(feedback, FALLBACK_TONE_FEEDBACK);
    }

    #[tokio::test]
    async fn test_unknown_audio_track_is_a_noop() {
        let controller = controller_with(ScriptedAnalyzer::failing());
        controller.start_audio("no-such-track", 5).await;
        assert!(controller.snapshot().await.player.track_id.is_none());

        controller.start_audio("g1", 2).await;
        let state = controller.snapshot().await;
        assert_eq!(state.player.track_id.as_deref(), Some("g1"));
        assert!(state.player.is_playing);
    }
}
