//! Answering engine for docchat.
//!
//! Provides the Gemini API client, the answer-style directives, prompt
//! assembly, and the chat session that ties document context and
//! conversation history together.

pub mod gemini;
pub mod prompt;
pub mod session;
pub mod style;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use session::{ChatSession, Exchange};
pub use style::AnswerStyle;

/// A client for a hosted generative model.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Send one assembled prompt and return the generated answer.
    async fn generate(&self, prompt: &str) -> Result<AiResponse, AiError>;
}

/// A generated answer plus usage metadata.
#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

/// Token counts the model reported for one call.
#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}
