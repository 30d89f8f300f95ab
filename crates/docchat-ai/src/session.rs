//! Chat session state.
//!
//! A `ChatSession` holds the accumulated document text and the ordered
//! exchange history for one interactive session. It is an owned value
//! threaded through the presentation loop rather than a process-wide
//! singleton, and has exactly one writer: the current user action.

use tracing::{debug, error};

use docchat_common::SessionId;

use crate::prompt;
use crate::style::AnswerStyle;
use crate::{AiClient, AiError};

/// One completed question/answer turn. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub user_text: String,
    pub assistant_text: String,
}

/// Session-scoped state: document context plus conversation history.
///
/// Both fields start empty and are discarded when the session ends; there
/// is no durable storage.
pub struct ChatSession {
    id: SessionId,
    document_text: String,
    history: Vec<Exchange>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            document_text: String::new(),
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn document_text(&self) -> &str {
        &self.document_text
    }

    /// Whether any processed document text is loaded.
    pub fn has_documents(&self) -> bool {
        !self.document_text.trim().is_empty()
    }

    /// The full conversation history, oldest first.
    pub fn history(&self) -> &[Exchange] {
        &self.history
    }

    pub fn exchange_count(&self) -> usize {
        self.history.len()
    }

    /// Unconditionally overwrite the document context.
    pub fn replace_document_text(&mut self, text: impl Into<String>) {
        self.document_text = text.into();
        debug!(
            session = %self.id,
            bytes = self.document_text.len(),
            "document context replaced"
        );
    }

    /// Append a completed exchange. No dedup, no size cap, no eviction.
    pub fn append_exchange(
        &mut self,
        user_text: impl Into<String>,
        assistant_text: impl Into<String>,
    ) {
        self.history.push(Exchange {
            user_text: user_text.into(),
            assistant_text: assistant_text.into(),
        });
    }

    /// Ask a question against the loaded documents.
    ///
    /// Never fails: a service error is degraded to a synthetic answer
    /// naming the failure, and the exchange is appended either way so the
    /// conversation always progresses. The document context is never
    /// touched by this path.
    pub async fn ask(
        &mut self,
        client: &dyn AiClient,
        question: &str,
        style: AnswerStyle,
    ) -> String {
        let full_prompt = prompt::assemble(question, &self.document_text, &self.history, style);

        let answer = match client.generate(&full_prompt).await {
            Ok(response) => {
                debug!(
                    session = %self.id,
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    "answer received"
                );
                response.content
            }
            Err(e) => degraded_answer(&e),
        };

        self.append_exchange(
            format!("{question} [Format: {}]", style.label()),
            answer.clone(),
        );
        answer
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a service failure into a displayable assistant answer.
fn degraded_answer(err: &AiError) -> String {
    let message = format!("Error calling Gemini API: {err}");
    error!("{message}");
    format!("I encountered an error: {message}. Please check your API key and try again.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AiResponse, TokenUsage};
    use async_trait::async_trait;

    struct StaticClient(&'static str);

    #[async_trait]
    impl AiClient for StaticClient {
        async fn generate(&self, _prompt: &str) -> Result<AiResponse, AiError> {
            Ok(AiResponse {
                content: self.0.to_string(),
                usage: TokenUsage::default(),
            })
        }
    }

    struct FailingClient;

    #[async_trait]
    impl AiClient for FailingClient {
        async fn generate(&self, _prompt: &str) -> Result<AiResponse, AiError> {
            Err(AiError::NetworkError("connection refused".into()))
        }
    }

    /// Captures the prompt it was called with.
    struct RecordingClient(std::sync::Mutex<Vec<String>>);

    #[async_trait]
    impl AiClient for RecordingClient {
        async fn generate(&self, prompt: &str) -> Result<AiResponse, AiError> {
            self.0.lock().unwrap().push(prompt.to_string());
            Ok(AiResponse {
                content: "ok".to_string(),
                usage: TokenUsage::default(),
            })
        }
    }

    #[test]
    fn new_session_is_empty() {
        let session = ChatSession::new();
        assert!(!session.has_documents());
        assert!(session.history().is_empty());
        assert_eq!(session.document_text(), "");
    }

    #[test]
    fn replace_document_text_overwrites() {
        let mut session = ChatSession::new();
        session.replace_document_text("first batch");
        session.replace_document_text("second batch");
        assert_eq!(session.document_text(), "second batch");
    }

    #[test]
    fn append_exchange_is_strictly_append_only() {
        let mut session = ChatSession::new();
        for i in 0..5 {
            session.append_exchange(format!("q{i}"), format!("a{i}"));
        }

        assert_eq!(session.exchange_count(), 5);
        for (i, ex) in session.history().iter().enumerate() {
            assert_eq!(ex.user_text, format!("q{i}"));
            assert_eq!(ex.assistant_text, format!("a{i}"));
        }
    }

    #[tokio::test]
    async fn ask_appends_answer_and_tags_style() {
        let mut session = ChatSession::new();
        session.replace_document_text("Paris is the capital of France.");

        let answer = session
            .ask(&StaticClient("Paris."), "What is the capital?", AnswerStyle::Summary)
            .await;

        assert_eq!(answer, "Paris.");
        assert_eq!(session.exchange_count(), 1);
        let ex = &session.history()[0];
        assert_eq!(ex.user_text, "What is the capital? [Format: Summarize the answer]");
        assert_eq!(ex.assistant_text, "Paris.");
    }

    #[tokio::test]
    async fn ask_on_failure_appends_degraded_answer() {
        let mut session = ChatSession::new();
        session.replace_document_text("some context");

        let answer = session
            .ask(&FailingClient, "Will this work?", AnswerStyle::Teacher)
            .await;

        assert!(answer.contains("I encountered an error"));
        assert!(answer.contains("connection refused"));

        // The failed call still progressed the conversation.
        assert_eq!(session.exchange_count(), 1);
        assert!(!session.history()[0].assistant_text.is_empty());
        // Document context untouched.
        assert_eq!(session.document_text(), "some context");
    }

    #[tokio::test]
    async fn ask_embeds_context_question_and_directive_in_order() {
        let mut session = ChatSession::new();
        session.replace_document_text(
            "\n\n--- Document: facts.txt ---\nParis is the capital of France.",
        );

        let client = RecordingClient(std::sync::Mutex::new(Vec::new()));
        session
            .ask(&client, "What is the capital of France?", AnswerStyle::Summary)
            .await;

        let prompts = client.0.lock().unwrap();
        let prompt = &prompts[0];
        let context_at = prompt.find("Paris is the capital of France.").unwrap();
        let question_at = prompt.find("What is the capital of France?").unwrap();
        let directive_at = prompt.find(AnswerStyle::Summary.instruction()).unwrap();
        assert!(context_at < question_at);
        assert!(question_at < directive_at);
    }

    #[tokio::test]
    async fn later_asks_see_earlier_exchanges() {
        let mut session = ChatSession::new();
        session.replace_document_text("ctx");

        let client = RecordingClient(std::sync::Mutex::new(Vec::new()));
        session.ask(&client, "first question", AnswerStyle::Teacher).await;
        session.ask(&client, "second question", AnswerStyle::Teacher).await;

        let prompts = client.0.lock().unwrap();
        assert!(!prompts[0].contains("Assistant: ok"));
        assert!(prompts[1].contains("User: first question [Format: Answer like a teacher]"));
        assert!(prompts[1].contains("Assistant: ok"));
    }
}
