//! Generation client.
//!
//! One method per wizard transition. Each builds its prompt, submits it with
//! the matching schema and parses the response. Nothing is trimmed, padded or
//! re-validated on the way out.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::prompts;
use super::{GenerationError, Schema, StructuredGenerator};
use crate::campaign::{AdCreative, BusinessInfo, CampaignStrategy, Keyword};

/// Stateless façade over a [`StructuredGenerator`].
#[derive(Clone)]
pub struct GenerationClient {
    generator: Arc<dyn StructuredGenerator>,
}

impl std::fmt::Debug for GenerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationClient").field("provider", &self.generator.name()).finish()
    }
}

impl GenerationClient {
    /// Create a client backed by the given generator.
    pub fn new(generator: Arc<dyn StructuredGenerator>) -> Self {
        Self { generator }
    }

    /// Name of the backing provider.
    pub fn provider_name(&self) -> &str {
        self.generator.name()
    }

    /// Propose a campaign strategy for a business.
    pub async fn generate_strategy(
        &self,
        info: &BusinessInfo,
    ) -> Result<CampaignStrategy, GenerationError> {
        self.request(&prompts::strategy_prompt(info), &Schema::strategy()).await
    }

    /// Research keywords for a business and its strategy.
    pub async fn generate_keywords(
        &self,
        info: &BusinessInfo,
        strategy: &CampaignStrategy,
    ) -> Result<Vec<Keyword>, GenerationError> {
        self.request(&prompts::keywords_prompt(info, strategy), &Schema::keywords()).await
    }

    /// Write ad copy targeting the given keywords.
    pub async fn generate_ad_creative(
        &self,
        info: &BusinessInfo,
        keywords: &[Keyword],
    ) -> Result<AdCreative, GenerationError> {
        self.request(&prompts::ad_creative_prompt(info, keywords), &Schema::ad_creative()).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        instruction: &str,
        schema: &Schema,
    ) -> Result<T, GenerationError> {
        tracing::debug!(
            provider = self.generator.name(),
            prompt_len = instruction.len(),
            "Submitting generation request"
        );

        let text = self.generator.generate(instruction, schema).await?;
        parse_response(text.as_deref())
    }
}

/// Parse raw response text into a typed result.
fn parse_response<T: DeserializeOwned>(text: Option<&str>) -> Result<T, GenerationError> {
    let text = match text {
        Some(t) if !t.trim().is_empty() => t,
        _ => return Err(GenerationError::EmptyResponse),
    };

    Ok(serde_json::from_str(text)?)
}


#[cfg(test)]
mod tests {
    use super::testing::{Reply, ScriptedGenerator};
    use super::*;
    use crate::campaign::MatchType;

    fn scripted_client(replies: Vec<Reply>) -> (GenerationClient, Arc<ScriptedGenerator>) {
        let generator = Arc::new(ScriptedGenerator::new(replies));
        (GenerationClient::new(generator.clone()), generator)
    }

    #[tokio::test]
    async fn test_generate_strategy_parses_response() {
        let (client, generator) = scripted_client(vec![Reply::Text(
            r#"{"goal":"Leads","biddingStrategy":"Target CPA","networks":["Search"],"locations":["California"],"rationale":"..."}"#
                .to_string(),
        )]);

        let strategy = client.generate_strategy(&BusinessInfo::default()).await.unwrap();
        assert_eq!(strategy.goal, "Leads");
        assert_eq!(strategy.networks, vec!["Search".to_string()]);
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_blank_response_is_empty_error() {
        let (client, _) = scripted_client(vec![Reply::Text("   \n".to_string())]);
        let err = client.generate_strategy(&BusinessInfo::default()).await.unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse));

        let (client, _) = scripted_client(vec![Reply::Empty]);
        let err = client.generate_strategy(&BusinessInfo::default()).await.unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_missing_field_is_malformed() {
        let (client, _) = scripted_client(vec![Reply::Text(r#"{"goal":"Leads"}"#.to_string())]);
        let err = client.generate_strategy(&BusinessInfo::default()).await.unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_keywords_keep_order_and_count() {
        let (client, _) = scripted_client(vec![Reply::Text(
            r#"[
                {"text":"solar installers near me","matchType":"Phrase","intent":"Transactional"},
                {"text":"solar panels","matchType":"Broad","intent":"Informational"},
                {"text":"solar panels","matchType":"Broad","intent":"Informational"}
            ]"#
            .to_string(),
        )]);

        let keywords = client
            .generate_keywords(&BusinessInfo::default(), &CampaignStrategy::default())
            .await
            .unwrap();
        // Duplicates are passed through untouched
        assert_eq!(keywords.len(), 3);
        assert_eq!(keywords[0].match_type, MatchType::Phrase);
        assert_eq!(keywords[2].text, "solar panels");
    }

    #[tokio::test]
    async fn test_creative_is_not_truncated() {
        let long = "x".repeat(45);
        let (client, _) = scripted_client(vec![Reply::Text(format!(
            r#"{{"headlines":["{long}"],"descriptions":[]}}"#
        ))]);

        let creative = client.generate_ad_creative(&BusinessInfo::default(), &[]).await.unwrap();
        assert_eq!(creative.headlines[0].len(), 45);
        assert!(creative.descriptions.is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let (client, _) = scripted_client(vec![Reply::Fail("connection refused".to_string())]);
        let err = client.generate_ad_creative(&BusinessInfo::default(), &[]).await.unwrap_err();
        assert!(matches!(err, GenerationError::Transport(_)));
        assert_eq!(client.provider_name(), "scripted");
    }
}
