//! Gemini-backed story analyzer.
//!
//! A focused client for the Generative Language `generateContent` endpoint.
//! Story analysis requests pin a JSON response schema so the reply
//! deserializes straight into [`StoryAnalysis`]; tone checks are plain-text
//! completions. Every failure maps into [`AnalysisError`] — the session
//! controller decides how to recover.

use async_trait::async_trait;
use atlas_core::analysis::{AnalysisError, StoryAnalysis, StoryAnalyzer};
use atlas_core::config::GeminiConfig;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::debug;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when the secret config doesn't name one.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Tone feedback returned when the service replies with empty text.
const DEFAULT_TONE_FEEDBACK: &str = "Your writing feels clear and honest.";

/// Gemini API client implementing the analyzer port.
#[derive(Clone)]
pub struct GeminiAnalyzer {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiAnalyzer {
    /// Creates an analyzer from the secret configuration.
    ///
    /// An empty API key is accepted here; calls will fail with
    /// [`AnalysisError::Config`], which the controller recovers from with
    /// the fixed fallback analysis.
    pub fn new(config: &GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(60))
                .connect_timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            api_key: config.api_key.clone(),
            model: config
                .model_name
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    /// Overrides the model for this analyzer.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn generate(&self, request: &GenerateContentRequest) -> Result<String, AnalysisError> {
        if self.api_key.is_empty() {
            return Err(AnalysisError::Config(
                "Gemini API key is not set".to_string(),
            ));
        }

        let url = format!("{API_BASE}/models/{}:generateContent", self.model);
        debug!(model = %self.model, "calling analysis service");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Api { status, message });
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::Parse(e.to_string()))?;

        Ok(api_response.text())
    }
}

#[async_trait]
impl StoryAnalyzer for GeminiAnalyzer {
    async fn analyze(&self, content: &str) -> Result<StoryAnalysis, AnalysisError> {
        let prompt = format!(
            "Analyze this personal story for PeerBridge Atlas. Focus on empathy, \
             CBT education, and cultural nuance. No diagnosis. Story: {content}"
        );
        let request = GenerateContentRequest {
            contents: vec![Content::from_text(prompt)],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: story_analysis_schema(),
            }),
        };

        let text = self.generate(&request).await?;
        serde_json::from_str(&text).map_err(|e| AnalysisError::Parse(e.to_string()))
    }

    async fn check_tone(&self, content: &str) -> Result<String, AnalysisError> {
        let prompt = format!(
            "Analyze the tone of this short mental health story. Provide 1-2 \
             sentences of encouraging, empathetic feedback. Suggest if any part \
             might be too intense for a peer community or if it's perfectly \
             framed. Text: {content}"
        );
        let request = GenerateContentRequest {
            contents: vec![Content::from_text(prompt)],
            generation_config: None,
        };

        let text = self.generate(&request).await?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Ok(DEFAULT_TONE_FEEDBACK.to_string())
        } else {
            Ok(trimmed.to_string())
        }
    }
}

/// Response schema pinning the analysis JSON shape.
fn story_analysis_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "emotionalTone": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of 2-3 primary emotions detected."
            },
            "summary": {
                "type": "STRING",
                "description": "A gentle, 2-sentence empathetic summary."
            },
            "copingStrategies": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "type": { "type": "STRING", "enum": ["CBT", "Grounding", "Mindfulness"] }
                    },
                    "required": ["title", "description", "type"]
                }
            },
            "culturalNuance": {
                "type": "STRING",
                "description": "Cultural background influence notes."
            },
            "isCrisis": {
                "type": "BOOLEAN",
                "description": "Immediate danger detection."
            }
        },
        "required": ["emotionalTone", "summary", "copingStrategies", "isCrisis"]
    })
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

impl Content {
    fn from_text(text: String) -> Self {
        Self {
            parts: vec![Part { text }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// First candidate's first text part, or empty.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .map(|p| p.text.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_core::analysis::StrategyKind;

    #[test]
    fn test_request_body_wire_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content::from_text("hello".to_string())],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: story_analysis_schema(),
            }),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        let schema = &body["generationConfig"]["responseSchema"];
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["required"][0], "emotionalTone");
    }

    #[test]
    fn test_tone_request_omits_generation_config() {
        let request = GenerateContentRequest {
            contents: vec![Content::from_text("hello".to_string())],
            generation_config: None,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_response_text_extraction() {
        let raw = r#"{
            "candidates": [
                { "content": { "parts": [{ "text": "first" }, { "text": "second" }] } }
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text(), "first");

        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.text(), "");
    }

    #[test]
    fn test_analysis_payload_parses_into_domain_model() {
        // The exact shape the schema pins the service to.
        let payload = r#"{
            "emotionalTone": ["Homesick", "Isolated"],
            "summary": "You're navigating a major life transition.",
            "copingStrategies": [
                { "title": "Behavioral Activation", "description": "Visit one local spot this week.", "type": "CBT" }
            ],
            "culturalNuance": "Leaving a close-knit household lands hard.",
            "isCrisis": false
        }"#;

        let analysis: StoryAnalysis = serde_json::from_str(payload).unwrap();
        assert_eq!(analysis.emotional_tone, vec!["Homesick", "Isolated"]);
        assert_eq!(analysis.coping_strategies[0].kind, StrategyKind::Cbt);
        assert!(!analysis.is_crisis);
    }

    #[tokio::test]
    async fn test_unconfigured_key_is_a_config_error() {
        let analyzer = GeminiAnalyzer::new(&GeminiConfig {
            api_key: String::new(),
            model_name: None,
        });

        let err = analyzer.analyze("a story").await.unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));

        let err = analyzer.check_tone("a draft").await.unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
    }
}
