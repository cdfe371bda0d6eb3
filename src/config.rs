use std::env;

use crate::errors::ExplainError;

/// Model the original deployment targets; overridable through `GROQ_MODEL`.
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Groq's OpenAI-compatible chat-completions endpoint.
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub groq_api_key: String,
    pub model: String,
    pub api_url: String,
}

impl AppConfig {
    /// Reads configuration from the environment once at startup.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error when `GROQ_API_KEY` is unset.
    pub fn from_env() -> Result<Self, ExplainError> {
        Ok(Self {
            groq_api_key: env::var("GROQ_API_KEY")
                .map_err(|e| ExplainError::Config(format!("GROQ_API_KEY: {}", e)))?,
            model: env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            api_url: env::var("GROQ_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        })
    }
}
