//! File-backed mood history repository.
//!
//! Persists the full history at `{config_dir}/mood_history.json` after
//! every change. An unreadable snapshot degrades to an empty history.

use crate::paths::AtlasPaths;
use crate::storage::AtomicJsonFile;
use async_trait::async_trait;
use atlas_core::error::{AtlasError, Result};
use atlas_core::mood::{MoodEntry, MoodRepository};
use std::path::PathBuf;
use tracing::warn;

/// File-backed mood history repository.
pub struct FileMoodRepository {
    file_path: PathBuf,
}

impl FileMoodRepository {
    /// Creates a repository at the default platform location.
    pub fn new() -> Result<Self> {
        let file_path = AtlasPaths::mood_history_file()
            .map_err(|e| AtlasError::config(e.to_string()))?;
        Ok(Self { file_path })
    }

    /// Creates a repository at a custom path (for testing).
    pub fn with_path(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    fn file(&self) -> AtomicJsonFile<Vec<MoodEntry>> {
        AtomicJsonFile::new(self.file_path.clone())
    }
}

#[async_trait]
impl MoodRepository for FileMoodRepository {
    async fn load(&self) -> Result<Vec<MoodEntry>> {
        let file = self.file();
        let loaded = tokio::task::spawn_blocking(move || file.load())
            .await
            .map_err(|e| AtlasError::internal(format!("Failed to join task: {}", e)))?;

        match loaded {
            Ok(entries) => Ok(entries.unwrap_or_default()),
            Err(err) if err.is_serialization() => {
                warn!(error = %err, "mood history unreadable, resetting to empty");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    async fn save(&self, entries: &[MoodEntry]) -> Result<()> {
        let file = self.file();
        let entries = entries.to_vec();
        tokio::task::spawn_blocking(move || file.save(&entries))
            .await
            .map_err(|e| AtlasError::internal(format!("Failed to join task: {}", e)))?
    }

    async fn clear(&self) -> Result<()> {
        let file = self.file();
        tokio::task::spawn_blocking(move || file.remove())
            .await
            .map_err(|e| AtlasError::internal(format!("Failed to join task: {}", e)))?
    }
}
