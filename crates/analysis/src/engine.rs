//! Completion engine for content analysis.
//!
//! The engine sends one JSON-mode chat completion per analysis request to an
//! OpenAI-compatible endpoint and parses the reply. Anything speaking that
//! wire format works as a backend; the service only relies on `choices[0]`
//! carrying a JSON object.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use serde_json::json;

use crate::error::AnalysisError;
use crate::prompt::{temperature_for, PersonaTier};
use crate::types::Recommendation;

/// Default timeout for completion requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default OpenAI-compatible API base.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Analysis input is truncated to this many characters before prompting.
const MAX_INPUT_CHARS: usize = 4000;

/// Trait for content analysis backends.
#[async_trait]
pub trait AnalysisEngine: Send + Sync {
    /// Analyze free text and produce a structured recommendation.
    ///
    /// `persona` is the 0-100 dial selecting the instruction template.
    async fn analyze(&self, text: &str, persona: u8) -> Result<Recommendation, AnalysisError>;
}

/// Configuration for [`OpenAiChatEngine`].
#[derive(Clone, Debug)]
pub struct OpenAiConfig {
    /// Base URL of the OpenAI-compatible API (no trailing slash needed).
    pub api_base: String,
    /// Bearer token for the API.
    pub api_key: String,
    /// Model identifier to request.
    pub model: String,
}

impl OpenAiConfig {
    pub fn new(api_base: impl Into<String>, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

/// Analysis engine backed by an OpenAI-compatible chat completion API.
pub struct OpenAiChatEngine {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiChatEngine {
    /// Create a new engine.
    ///
    /// Fails when no API key is configured or the HTTP client cannot be
    /// constructed.
    pub fn new(config: OpenAiConfig) -> Result<Self, AnalysisError> {
        if config.api_key.trim().is_empty() {
            return Err(AnalysisError::MissingApiKey);
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| AnalysisError::Provider(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        )
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[async_trait]
impl AnalysisEngine for OpenAiChatEngine {
    async fn analyze(&self, text: &str, persona: u8) -> Result<Recommendation, AnalysisError> {
        let tier = PersonaTier::from_dial(persona);
        let input: String = text.chars().take(MAX_INPUT_CHARS).collect();

        debug!(
            "Requesting analysis: persona dial {} ({:?}), {} input chars",
            persona,
            tier,
            input.len()
        );

        let body = json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": tier.system_prompt()},
                {
                    "role": "user",
                    "content": format!("Analyze this webpage content and give me the alpha:\n\n{input}"),
                },
            ],
            "response_format": {"type": "json_object"},
            "temperature": temperature_for(persona),
            "max_tokens": 500,
        });

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalysisError::Provider(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Provider(format!(
                "completion request returned {}",
                status
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::Provider(format!("unreadable completion: {}", e)))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AnalysisError::Provider("completion had no choices".to_string()))?;

        serde_json::from_str(&content).map_err(|e| AnalysisError::MalformedReply(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_requires_api_key() {
        let config = OpenAiConfig::new(DEFAULT_API_BASE, "", "gpt-4o-mini");
        assert!(matches!(
            OpenAiChatEngine::new(config),
            Err(AnalysisError::MissingApiKey)
        ));
    }

    #[test]
    fn test_completions_url_handles_trailing_slash() {
        let config = OpenAiConfig::new("https://api.example.com/v1/", "key", "model");
        let engine = OpenAiChatEngine::new(config).unwrap();
        assert_eq!(
            engine.completions_url(),
            "https://api.example.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_completion_response_parses() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "{\"ticker\": \"UBER\"}"}}
            ]
        }"#;
        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.content, "{\"ticker\": \"UBER\"}");
    }
}
