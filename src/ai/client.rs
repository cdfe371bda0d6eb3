//! LLM (Groq) API client module
//!
//! Encapsulates the single outbound call the pipeline makes per prompt.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::info;

use crate::config::AppConfig;
use crate::errors::ExplainError;

const REQUEST_TIMEOUT_SECS: u64 = 90;
const MAX_COMPLETION_TOKENS: usize = 2048;

/// Capability the pipeline depends on: one prompt in, one text reply out.
///
/// Injected rather than held as ambient state so tests can substitute a
/// scripted double.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Sends `prompt` to the model and returns the reply text.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the provider rejects it, or the
    /// response carries no text.
    async fn invoke(&self, prompt: &str) -> Result<String, ExplainError>;
}

/// Client for Groq's OpenAI-compatible chat-completions API.
pub struct GroqClient {
    api_key: String,
    model_name: String,
    api_url: String,
}

impl GroqClient {
    #[must_use]
    pub fn new(api_key: String, model_name: String, api_url: String) -> Self {
        Self {
            api_key,
            model_name,
            api_url,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.groq_api_key.clone(),
            config.model.clone(),
            config.api_url.clone(),
        )
    }
}

#[async_trait]
impl ModelClient for GroqClient {
    async fn invoke(&self, prompt: &str) -> Result<String, ExplainError> {
        info!(
            "Invoking model {} with a {} char prompt",
            self.model_name,
            prompt.len()
        );

        let request_body = json!({
            "model": self.model_name,
            "messages": [
                { "role": "user", "content": prompt }
            ],
            "max_tokens": MAX_COMPLETION_TOKENS
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ExplainError::Http(format!("Failed to build HTTP client: {e}")))?;

        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {}", self.api_key)
            .parse()
            .map_err(|e| ExplainError::Http(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        let content_type_value = "application/json"
            .parse()
            .map_err(|e| ExplainError::Http(format!("Invalid Content-Type header: {e}")))?;
        headers.insert("Content-Type", content_type_value);

        let response = client
            .post(&self.api_url)
            .headers(headers)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ExplainError::Http(format!("Model API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(ExplainError::Provider(format!(
                "Model API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| ExplainError::Provider(format!("Failed to parse model response: {e}")))?;

        extract_reply_text(&response_json)
            .ok_or_else(|| ExplainError::Provider("No text in model response".to_string()))
    }
}

/// Pulls `choices[0].message.content` out of a chat-completions response.
fn extract_reply_text(response_json: &Value) -> Option<String> {
    response_json
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(std::string::ToString::to_string)
}
