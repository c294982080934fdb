//! Ollama local LLM integration.
//!
//! Implements the StructuredGenerator trait for Ollama using its structured
//! output `format` parameter.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{GenerationError, Schema, SchemaDialect, StructuredGenerator};

/// Ollama API provider for local LLM.
pub struct OllamaProvider {
    client: Client,
    base_url: String,
    model: String,
}

impl Default for OllamaProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl OllamaProvider {
    /// Create a new Ollama provider with default settings.
    ///
    /// Uses localhost:11434 by default.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: std::env::var("OLLAMA_HOST")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            model: std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2".to_string()),
        }
    }

    /// Create with a specific base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Create with a specific model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Model used for requests.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Server the requests go to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_request(&self, instruction: &str, schema: &Schema) -> OllamaRequest {
        OllamaRequest {
            model: self.model.clone(),
            prompt: instruction.to_string(),
            stream: false,
            format: schema.render(SchemaDialect::JsonSchema),
        }
    }
}

#[async_trait]
impl StructuredGenerator for OllamaProvider {
    async fn generate(
        &self,
        instruction: &str,
        schema: &Schema,
    ) -> Result<Option<String>, GenerationError> {
        let request = self.build_request(instruction, schema);

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Transport(format!("Ollama API error ({}): {}", status, body)));
        }

        let response: OllamaResponse = response.json().await?;
        Ok(response.response)
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

/// Ollama API request structure.
#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
    format: serde_json::Value,
}

/// Ollama API response structure.
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    #[serde(default)]
    response: Option<String>,
}
