//! File-backed identity repository.
//!
//! Persists the identity snapshot at `{config_dir}/identity.json`,
//! overwritten wholesale on every save. An unreadable snapshot degrades to
//! "no identity" rather than failing the load.

use crate::paths::AtlasPaths;
use crate::storage::AtomicJsonFile;
use async_trait::async_trait;
use atlas_core::error::{AtlasError, Result};
use atlas_core::identity::{Identity, IdentityRepository};
use std::path::PathBuf;
use tracing::warn;

/// File-backed identity snapshot repository.
pub struct FileIdentityRepository {
    file_path: PathBuf,
}

impl FileIdentityRepository {
    /// Creates a repository at the default platform location.
    pub fn new() -> Result<Self> {
        let file_path = AtlasPaths::identity_file()
            .map_err(|e| AtlasError::config(e.to_string()))?;
        Ok(Self { file_path })
    }

    /// Creates a repository at a custom path (for testing).
    pub fn with_path(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    fn file(&self) -> AtomicJsonFile<Identity> {
        AtomicJsonFile::new(self.file_path.clone())
    }
}

#[async_trait]
impl IdentityRepository for FileIdentityRepository {
    async fn load(&self) -> Result<Option<Identity>> {
        let file = self.file();
        let loaded = tokio::task::spawn_blocking(move || file.load())
            .await
            .map_err(|e| AtlasError::internal(format!("Failed to join task: {}", e)))?;

        match loaded {
            Ok(identity) => Ok(identity),
            Err(err) if err.is_serialization() => {
                warn!(error = %err, "identity snapshot unreadable, treating as absent");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn save(&self, identity: &Identity) -> Result<()> {
        let file = self.file();
        let identity = identity.clone();
        tokio::task::spawn_blocking(move || file.save(&identity))
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
