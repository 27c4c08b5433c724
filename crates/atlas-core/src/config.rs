//! Secret configuration for external services.

use serde::{Deserialize, Serialize};

/// Contents of `secret.json`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SecretConfig {
    pub gemini: Option<GeminiConfig>,
}

/// Credentials for the Gemini analysis service.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    /// Model override; a default is used when unset
    pub model_name: Option<String>,
}
