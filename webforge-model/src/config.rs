//! Configuration for the completion provider.

use serde::{Deserialize, Serialize};

/// Default API base URL (OpenAI-compatible).
pub const COMPLETION_API_BASE: &str = "https://api.openai.com/v1";

/// Configuration for an OpenAI-compatible completion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// API key sent as a bearer token.
    pub api_key: String,
    /// Model name.
    pub model: String,
    /// Optional custom base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens for output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            base_url: None,
            temperature: None,
            max_tokens: None,
        }
    }
}

impl CompletionConfig {
    /// Create a new config with the given API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), model: model.into(), ..Default::default() }
    }

    /// Set custom base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set max tokens for output.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Get the effective base URL.
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(COMPLETION_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = CompletionConfig::new("key", "model-x")
            .with_base_url("https://example.test/v1")
            .with_temperature(0.2)
            .with_max_tokens(4096);

        assert_eq!(config.api_key, "key");
        assert_eq!(config.model, "model-x");
        assert_eq!(config.effective_base_url(), "https://example.test/v1");
        assert_eq!(config.temperature, Some(0.2));
        assert_eq!(config.max_tokens, Some(4096));
    }

    #[test]
    fn test_default_base_url() {
        let config = CompletionConfig::new("key", "model-x");
        assert_eq!(config.effective_base_url(), COMPLETION_API_BASE);
    }
}
