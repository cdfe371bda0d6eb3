use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplainError {
    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Failed to access model API: {0}")]
    Provider(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ExplainError {
    fn from(error: reqwest::Error) -> Self {
        ExplainError::Http(error.to_string())
    }
}
