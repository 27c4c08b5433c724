//! Secret configuration loading.

use atlas_core::config::SecretConfig;
use atlas_core::error::{AtlasError, Result};
use std::path::Path;

/// Loads the secret configuration from `secret.json`.
///
/// A missing file yields the default (unconfigured) secrets; a malformed
/// file is a configuration error since silently dropping credentials would
/// be confusing to debug.
pub async fn load_secret_config(path: &Path) -> Result<SecretConfig> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => serde_json::from_str(&content).map_err(|e| {
            AtlasError::config(format!("Failed to parse {}: {}", path.display(), e))
        }),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(SecretConfig::default()),
        Err(err) => Err(err.into()),
    }
}
