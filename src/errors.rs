//! Error types for Pipe-Spec Assistant
//!
//! Configuration errors are fatal and stop start-up. Everything a provider
//! can throw at us is recoverable per question.

use thiserror::Error;

/// Main error type for the assistant
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Required credentials absent after every source was consulted
    #[error("Missing API keys: {}. Add them to the secrets file or environment variables and restart.", missing.join(", "))]
    MissingCredentials { missing: Vec<&'static str> },

    /// Embedding service failures
    #[error("Embedding request failed: {0}")]
    Embedding(String),

    /// Vector search failures
    #[error("Vector search failed: {0}")]
    Search(String),

    /// Chat completion failures
    #[error("Answer generation failed: {0}")]
    Generation(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal input errors
    #[error("Input error: {0}")]
    Input(String),
}

impl AssistantError {
    /// Whether the process must stop rather than take another question
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AssistantError::Config(_) | AssistantError::MissingCredentials { .. }
        )
    }
}

/// Result type alias for assistant operations
pub type Result<T> = std::result::Result<T, AssistantError>;
