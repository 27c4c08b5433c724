//! Application bootstrap.
//!
//! Wires the file repositories and the Gemini analyzer to the session
//! controller, restores persisted state, and seeds the starter feed.

use crate::seed;
use anyhow::Result;
use atlas_core::SessionController;
use atlas_core::analysis::StoryAnalyzer;
use atlas_core::config::GeminiConfig;
use atlas_core::identity::IdentityRepository;
use atlas_core::mood::MoodRepository;
use atlas_infrastructure::{
    AtlasPaths, FileIdentityRepository, FileMoodRepository, GeminiAnalyzer, load_secret_config,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// The assembled application.
///
/// Owns the session controller; the presentation layer talks to the
/// controller directly.
pub struct AtlasApp {
    controller: Arc<SessionController>,
}

impl AtlasApp {
    /// Bootstraps against the default platform config directory, creating
    /// the secret template on first run.
    pub async fn bootstrap() -> Result<Self> {
        let config_dir = AtlasPaths::config_dir()?;
        AtlasPaths::ensure_secret_file()?;
        Self::bootstrap_at(config_dir).await
    }

    /// Bootstraps against an explicit config directory.
    ///
    /// An absent or unconfigured `secret.json` still yields a working app:
    /// analyzer calls fail fast and the controller substitutes the fixed
    /// fallback analysis.
    pub async fn bootstrap_at(config_dir: PathBuf) -> Result<Self> {
        let identity_repository = Arc::new(FileIdentityRepository::with_path(
            config_dir.join("identity.json"),
        ));
        let mood_repository = Arc::new(FileMoodRepository::with_path(
            config_dir.join("mood_history.json"),
        ));

        let secret = load_secret_config(&config_dir.join("secret.json")).await?;
        let gemini_config = secret.gemini.unwrap_or(GeminiConfig {
            api_key: String::new(),
            model_name: None,
        });
        let analyzer = Arc::new(GeminiAnalyzer::new(&gemini_config));

        let app = Self::with_ports(identity_repository, mood_repository, analyzer);
        app.controller.restore().await?;
        app.controller.seed_stories(seed::starter_stories()).await;
        info!(config_dir = %config_dir.display(), "atlas bootstrapped");
        Ok(app)
    }

    /// Assembles an app from injected ports, without restoring or seeding.
    pub fn with_ports(
        identity_repository: Arc<dyn IdentityRepository>,
        mood_repository: Arc<dyn MoodRepository>,
        analyzer: Arc<dyn StoryAnalyzer>,
    ) -> Self {
        Self {
            controller: Arc::new(SessionController::new(
                identity_repository,
                mood_repository,
                analyzer,
            )),
        }
    }

    /// The session controller.
    pub fn controller(&self) -> Arc<SessionController> {
        self.controller.clone()
    }
}
