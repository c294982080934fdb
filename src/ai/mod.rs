//! AI generation module.
//!
//! Turns wizard inputs into prompts, submits them to a structured
//! generation provider together with a strict output schema, and parses the
//! result back into campaign types.
//!
//! ## Providers
//!
//! - **Gemini** (default) - hosted, requires `GEMINI_API_KEY`
//! - **Ollama** - local LLM, no key required

mod client;
mod gemini;
mod ollama;
pub mod prompts;
pub mod schema;

pub use client::GenerationClient;
pub use gemini::{
    GeminiProvider, DEFAULT_BASE_URL as GEMINI_DEFAULT_BASE_URL, DEFAULT_MODEL as GEMINI_DEFAULT_MODEL,
};
pub use ollama::OllamaProvider;
pub use schema::{Schema, SchemaDialect};

use std::sync::Arc;

use async_trait::async_trait;

#[cfg(test)]
pub(crate) use client::testing;

use crate::core::AiConfig;

/// A service that can produce text conforming to an output schema.
///
/// Implementations perform exactly one request per call. `Ok(None)` means
/// the service answered without any text.
#[async_trait]
pub trait StructuredGenerator: Send + Sync {
    /// Submit an instruction and return the raw response text.
    async fn generate(
        &self,
        instruction: &str,
        schema: &Schema,
    ) -> Result<Option<String>, GenerationError>;

    /// Get the provider name.
    fn name(&self) -> &str;
}

/// Generation error types.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("empty response")]
    EmptyResponse,

    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("provider not configured: {0}")]
    NotConfigured(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

/// Build the provider named in the configuration.
pub fn provider_from_config(config: &AiConfig) -> anyhow::Result<Arc<dyn StructuredGenerator>> {
    match config.provider.as_str() {
        "gemini" => {
            let mut provider = GeminiProvider::new()?.with_base_url(&config.gemini.base_url);
            if let Some(model) = &config.model {
                provider = provider.with_model(model);
            }
            Ok(Arc::new(provider))
        }
        "ollama" => Ok(Arc::new(ollama_from_config(config))),
        other => anyhow::bail!("Unknown AI provider '{}' (expected gemini or ollama)", other),
    }
}

/// Ollama settings resolve as config file, then environment, then defaults.
fn ollama_from_config(config: &AiConfig) -> OllamaProvider {
    let mut provider = OllamaProvider::new();
    if let Some(url) = &config.ollama.base_url {
        provider = provider.with_base_url(url);
    }
    if let Some(model) = config.model.as_ref().or(config.ollama.model.as_ref()) {
        provider = provider.with_model(model);
    }
    provider
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;

    use serial_test::serial;

    use super::*;
    use crate::core::OllamaConfig;

    /// Run `f` with the Ollama env vars set, restoring them afterwards.
    fn with_ollama_env<T>(host: Option<&str>, model: Option<&str>, f: impl FnOnce() -> T) -> T {
        let saved = (std::env::var("OLLAMA_HOST").ok(), std::env::var("OLLAMA_MODEL").ok());
        for (key, value) in [("OLLAMA_HOST", host), ("OLLAMA_MODEL", model)] {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }

        let result = f();

        for (key, value) in [("OLLAMA_HOST", saved.0), ("OLLAMA_MODEL", saved.1)] {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
        result
    }

    /// Read one request, headers and body, so the reply never races unread input.
    fn read_http_request(stream: &mut impl Read) -> String {
        let mut data = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);

            let text = String::from_utf8_lossy(&data);
            if let Some(end) = text.find("\r\n\r\n") {
                let content_length = text[..end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length").then(|| value.trim().parse().ok())?
                    })
                    .unwrap_or(0usize);
                if data.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&data).to_string()
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(GenerationError::EmptyResponse.to_string(), "empty response");

        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = GenerationError::from(parse_err);
        assert!(err.to_string().starts_with("malformed response"));
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let config = AiConfig { provider: "clippy".to_string(), ..AiConfig::default() };
        let err = provider_from_config(&config).err().unwrap();
        assert!(err.to_string().contains("Unknown AI provider"));
    }

    #[test]
    fn test_ollama_provider_from_config() {
        let config = AiConfig { provider: "ollama".to_string(), ..AiConfig::default() };
        let provider = provider_from_config(&config).unwrap();
        assert_eq!(provider.name(), "ollama");
    }

    #[test]
    #[serial(ollama_env)]
    fn test_ollama_env_used_when_config_unset() {
        let config = AiConfig { provider: "ollama".to_string(), ..AiConfig::default() };

        let provider = with_ollama_env(Some("http://gpu-box:11434"), Some("mistral"), || {
            ollama_from_config(&config)
        });
        assert_eq!(provider.base_url(), "http://gpu-box:11434");
        assert_eq!(provider.model(), "mistral");

        let provider = with_ollama_env(None, None, || ollama_from_config(&config));
        assert_eq!(provider.base_url(), "http://localhost:11434");
        assert_eq!(provider.model(), "llama3.2");
    }

    #[test]
    #[serial(ollama_env)]
    fn test_ollama_config_file_beats_env() {
        let config = AiConfig {
            provider: "ollama".to_string(),
            model: Some("phi3".to_string()),
            ollama: OllamaConfig {
                base_url: Some("http://configured:11434".to_string()),
                model: Some("llama3.2".to_string()),
            },
            ..AiConfig::default()
        };

        let provider = with_ollama_env(Some("http://gpu-box:11434"), Some("mistral"), || {
            ollama_from_config(&config)
        });
        assert_eq!(provider.base_url(), "http://configured:11434");
        // The top-level model override wins over the provider section
        assert_eq!(provider.model(), "phi3");
    }

    #[tokio::test]
    #[serial(ollama_env)]
    async fn test_ollama_host_env_reaches_server() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_http_request(&mut stream);

            let body = r#"{"response":"{\"ok\":true}","done":true}"#;
            write!(
                stream,
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            )
            .unwrap();
            request
        });

        let config = AiConfig { provider: "ollama".to_string(), ..AiConfig::default() };
        let host = format!("http://{}", addr);
        let provider =
            with_ollama_env(Some(host.as_str()), None, || provider_from_config(&config)).unwrap();

        let text = provider.generate("list keywords", &Schema::keywords()).await.unwrap();
        assert_eq!(text.as_deref(), Some(r#"{"ok":true}"#));

        let request = server.join().unwrap();
        assert!(request.starts_with("POST /api/generate"));
    }
}
