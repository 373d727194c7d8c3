//! HTTP completion client.

use crate::config::CompletionConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use webforge_core::{ForgeError, Result, TextCompletion};

/// Chat message in the OpenAI-compatible wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// Chat completion request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Chat completion response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

/// Response choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Option<Message>,
}

/// Completion client for an OpenAI-compatible chat endpoint.
///
/// Non-streaming: the pipeline parses whole completions, so there is
/// nothing to do with partial output. A network or API failure is mapped to
/// [`ForgeError::Provider`] and propagated; content-quality retries belong
/// to the pipeline, not this client.
///
/// # Example
///
/// ```rust,ignore
/// use webforge_model::{CompletionClient, CompletionConfig};
///
/// let client = CompletionClient::new(CompletionConfig::new(
///     std::env::var("OPENAI_API_KEY").unwrap(),
///     "gpt-4o-mini",
/// ))?;
/// ```
pub struct CompletionClient {
    client: Client,
    config: CompletionConfig,
}

impl CompletionClient {
    /// Create a new completion client.
    pub fn new(config: CompletionConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| ForgeError::Provider(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Build the API URL for chat completions.
    fn api_url(&self) -> String {
        format!("{}/chat/completions", self.config.effective_base_url().trim_end_matches('/'))
    }

    fn build_request(&self, system: &str, user: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                Message { role: "system".to_string(), content: system.to_string() },
                Message { role: "user".to_string(), content: user.to_string() },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }
}

#[async_trait]
impl TextCompletion for CompletionClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = self.build_request(system, user);

        let response = self
            .client
            .post(self.api_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ForgeError::Provider(format!("Completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ForgeError::Provider(format!(
                "Completion API error ({}): {}",
                status, error_text
            )));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ForgeError::Provider(format!("Failed to read response: {}", e)))?;

        let chat_response: ChatCompletionResponse = serde_json::from_str(&response_text)
            .map_err(|e| {
                ForgeError::Provider(format!("Failed to parse response: {} - {}", e, response_text))
            })?;

        let text = chat_response
            .choices
            .first()
            .and_then(|c| c.message.as_ref())
            .map(|m| m.content.clone())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ForgeError::Provider("Empty completion from provider".to_string()));
        }

        tracing::debug!(model = %self.config.model, chars = text.len(), "completion received");
        Ok(text)
    }
}
