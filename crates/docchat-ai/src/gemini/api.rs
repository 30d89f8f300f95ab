//! AiClient trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse};

use super::client::GeminiClient;

#[async_trait]
impl AiClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(prompt);
        let url = self.api_url();

        debug!(model = %self.config.model, prompt_bytes = prompt.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout
                } else {
                    AiError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        self.parse_response(json)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

    use crate::gemini::{GeminiClient, GeminiConfig};
    use crate::{AiClient, AiError};

    fn mock_client(server: &MockServer) -> GeminiClient {
        GeminiClient::new(
            GeminiConfig::new("test-key").with_base_url(server.url("/v1beta/models")),
        )
    }

    #[tokio::test]
    async fn generate_sends_key_header_and_parses_answer() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1beta/models/gemini-2.0-flash:generateContent")
                    .header("x-goog-api-key", "test-key")
                    .body_contains("What is the capital of France?");
                then.status(200).json_body(serde_json::json!({
                    "candidates": [{
                        "content": { "parts": [{ "text": "Paris." }] }
                    }],
                    "usageMetadata": { "promptTokenCount": 9, "candidatesTokenCount": 2 }
                }));
            })
            .await;

        let client = mock_client(&server);
        let response = client
            .generate("What is the capital of France?")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.content, "Paris.");
        assert_eq!(response.usage.input_tokens, 9);
    }

    #[tokio::test]
    async fn http_429_maps_to_rate_limited() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1beta/models/gemini-2.0-flash:generateContent");
                then.status(429).body("slow down");
            })
            .await;

        let client = mock_client(&server);
        let err = client.generate("anything").await.unwrap_err();
        assert!(matches!(err, AiError::RateLimited));
    }

    #[tokio::test]
    async fn http_error_maps_to_api_error_with_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1beta/models/gemini-2.0-flash:generateContent");
                then.status(500).body("backend exploded");
            })
            .await;

        let client = mock_client(&server);
        let err = client.generate("anything").await.unwrap_err();
        match err {
            AiError::ApiError(msg) => {
                assert!(msg.contains("500"));
                assert!(msg.contains("backend exploded"));
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_success_body_is_parse_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1beta/models/gemini-2.0-flash:generateContent");
                then.status(200).json_body(serde_json::json!({ "weird": true }));
            })
            .await;

        let client = mock_client(&server);
        let err = client.generate("anything").await.unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));
    }

    #[tokio::test]
    async fn refused_connection_is_network_error() {
        // Port 1 is never listening.
        let client = GeminiClient::new(
            GeminiConfig::new("test-key").with_base_url("http://127.0.0.1:1/v1beta/models"),
        );
        let err = client.generate("anything").await.unwrap_err();
        assert!(matches!(err, AiError::NetworkError(_)));
    }
}
