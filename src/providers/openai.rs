//! OpenAI embeddings and chat completions
//!
//! Endpoints:
//! - POST {base}/embeddings
//! - POST {base}/chat/completions

use crate::errors::{AssistantError, Result};
use crate::providers::{AnswerGenerator, Embedder};
use crate::types::{Answer, EmbeddingVector, Question};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Chat model used for answers
pub const CHAT_MODEL: &str = "gpt-4o";

/// Request timeout (60 seconds)
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenAI API client
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    /// Create client for the given API base (e.g. `https://api.openai.com/v1`)
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(AssistantError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Get base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> std::result::Result<String, String> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {}", e))?;

        if !status.is_success() {
            return Err(format!("HTTP {}: {}", status, text));
        }

        Ok(text)
    }
}

#[async_trait]
impl Embedder for OpenAiClient {
    async fn embed(&self, question: &Question, model: &str) -> Result<EmbeddingVector> {
        let request = EmbeddingRequest {
            model,
            input: question.as_str(),
        };

        let body = self
            .post_json("embeddings", &request)
            .await
            .map_err(AssistantError::Embedding)?;

        parse_embedding_response(&body)
    }
}

#[async_trait]
impl AnswerGenerator for OpenAiClient {
    async fn generate(&self, prompt: &str) -> Result<Answer> {
        let request = ChatRequest {
            model: CHAT_MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.0,
        };

        let body = self
            .post_json("chat/completions", &request)
            .await
            .map_err(AssistantError::Generation)?;

        parse_chat_response(&body)
    }
}

/// Embeddings request
#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

/// Embeddings response
#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// Chat completion request
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Chat completion response
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

fn parse_embedding_response(body: &str) -> Result<EmbeddingVector> {
    let response: EmbeddingResponse = serde_json::from_str(body)
        .map_err(|e| AssistantError::Embedding(format!("Failed to parse response: {}", e)))?;

    response
        .data
        .into_iter()
        .next()
        .map(|d| d.embedding)
        .ok_or_else(|| AssistantError::Embedding("Response contained no embedding".to_string()))
}

fn parse_chat_response(body: &str) -> Result<Answer> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| AssistantError::Generation(format!("Failed to parse response: {}", e)))?;

    let content = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AssistantError::Generation("Response contained no choices".to_string()))?
        .message
        .content
        .ok_or_else(|| AssistantError::Generation("Response message had no content".to_string()))?;

    Ok(Answer::new(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = OpenAiClient::new("https://api.openai.com/v1/", "sk-test").unwrap();
        assert_eq!(client.base_url(), "https://api.openai.com/v1");
    }

    #[test]
    fn test_embedding_request_shape() {
        let request = EmbeddingRequest {
            model: "text-embedding-3-large",
            input: "What is the max pressure for valve X?",
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"model": "text-embedding-3-large", "input": "What is the max pressure for valve X?"})
        );
    }

    #[test]
    fn test_chat_request_shape() {
        let request = ChatRequest {
            model: CHAT_MODEL,
            messages: vec![ChatMessage { role: "user", content: "prompt" }],
            temperature: 0.0,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o");
        assert_eq!(value["temperature"], 0.0);
        assert_eq!(value["messages"], json!([{"role": "user", "content": "prompt"}]));
    }

    #[test]
    fn test_parse_embedding_response() {
        let body = json!({
            "object": "list",
            "data": [{"object": "embedding", "index": 0, "embedding": [0.25, -0.5, 1.0]}],
            "model": "text-embedding-3-large"
        })
        .to_string();
        assert_eq!(parse_embedding_response(&body).unwrap(), vec![0.25, -0.5, 1.0]);
    }

    #[test]
    fn test_parse_embedding_response_empty() {
        let err = parse_embedding_response(r#"{"data": []}"#).unwrap_err();
        assert!(matches!(err, AssistantError::Embedding(_)));
    }

    #[test]
    fn test_parse_chat_response_trims() {
        let body = json!({
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "\n Valve X is rated to 150 psi. \n"}}]
        })
        .to_string();
        assert_eq!(parse_chat_response(&body).unwrap().as_str(), "Valve X is rated to 150 psi.");
    }

    #[test]
    fn test_parse_chat_response_failures() {
        assert!(matches!(
            parse_chat_response(r#"{"choices": []}"#),
            Err(AssistantError::Generation(_))
        ));
        assert!(matches!(
            parse_chat_response(r#"{"choices": [{"message": {"content": null}}]}"#),
            Err(AssistantError::Generation(_))
        ));
        assert!(matches!(
            parse_chat_response("not json"),
            Err(AssistantError::Generation(_))
        ));
    }
}
