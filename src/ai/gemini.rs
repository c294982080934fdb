//! Gemini API integration.
//!
//! Implements the StructuredGenerator trait for Google's Generative Language
//! API using JSON mode with a response schema.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{GenerationError, Schema, SchemaDialect, StructuredGenerator};

/// Default Gemini model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default Generative Language API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini API provider.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    ///
    /// Reads the API key from `GEMINI_API_KEY`, falling back to `API_KEY`.
    pub fn new() -> Result<Self, GenerationError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .map(|k| k.trim().to_string())
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                GenerationError::NotConfigured("GEMINI_API_KEY not set".to_string())
            })?;

        Ok(Self::with_api_key(api_key))
    }

    /// Create a provider with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create with a specific model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Create with a custom base URL (for proxies or test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Model used for requests.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request(instruction: &str, schema: &Schema) -> GeminiRequest {
        GeminiRequest {
            contents: vec![Content { parts: vec![Part { text: Some(instruction.to_string()) }] }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema.render(SchemaDialect::Gemini),
            },
        }
    }
}

#[async_trait]
impl StructuredGenerator for GeminiProvider {
    async fn generate(
        &self,
        instruction: &str,
        schema: &Schema,
    ) -> Result<Option<String>, GenerationError> {
        let request = Self::build_request(instruction, schema);

        let response = self
            .client
            .post(format!("{}/models/{}:generateContent", self.base_url, self.model))
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Transport(format!("Gemini API error ({}): {}", status, body)));
        }

        let response: GeminiResponse = response.json().await?;
        Ok(response.text())
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

/// Gemini generateContent request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

/// Gemini generateContent response.
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GeminiResponse {
    /// Concatenated text of the first candidate, if it has any.
    fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String =
            candidate.content.parts.iter().filter_map(|p| p.text.as_deref()).collect();
        (!text.is_empty()).then_some(text)
    }
}
