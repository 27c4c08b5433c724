//! Unified path management for Atlas data files.
//!
//! All persisted snapshots and secrets live under one per-user config
//! directory, resolved through the platform conventions the `dirs` crate
//! implements (XDG on Linux, the platform equivalents elsewhere).

use atlas_core::config::{GeminiConfig, SecretConfig};
use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for Atlas.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/atlas/             # Config directory
/// ├── identity.json            # Active identity snapshot
/// ├── mood_history.json        # Mood check-in history snapshot
/// └── secret.json              # API keys
/// ```
pub struct AtlasPaths;

impl AtlasPaths {
    /// Returns the Atlas configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/atlas/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("atlas"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the identity snapshot.
    pub fn identity_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("identity.json"))
    }

    /// Returns the path to the mood history snapshot.
    pub fn mood_history_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("mood_history.json"))
    }

    /// Returns the path to the secrets file.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600) to prevent
    /// unauthorized access.
    pub fn secret_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("secret.json"))
    }

    /// Ensures the secret file exists, creating it with a template if it
    /// doesn't.
    ///
    /// The template carries an empty Gemini API key and the default model
    /// name. On Unix the file is created with 600 permissions.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to the secret file (existing or newly created)
    /// - `Err(std::io::Error)`: If file creation or permission setting fails
    pub fn ensure_secret_file() -> Result<PathBuf, std::io::Error> {
        let secret_path = Self::secret_file()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()))?;

        if secret_path.exists() {
            return Ok(secret_path);
        }

        if let Some(parent) = secret_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template_config = SecretConfig {
            gemini: Some(GeminiConfig {
                api_key: String::new(),
                model_name: Some(crate::gemini::DEFAULT_MODEL.to_string()),
            }),
        };

        let template_json = serde_json::to_string_pretty(&template_config)
            .map_err(std::io::Error::other)?;

        std::fs::write(&secret_path, template_json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&secret_path, permissions)?;
        }

        Ok(secret_path)
    }
}
