// src/enrichment/client.rs
use crate::utils::error::CompletionError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI-compatible chat completions endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant";
/// Output budget for the eight-section answer.
const MAX_COMPLETION_TOKENS: u32 = 800;
/// Extraction wants reproducible answers, not variety.
const SAMPLING_TEMPERATURE: f32 = 0.0;
/// The transport default is no timeout; a stuck completion call must
/// not hang the run.
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for the text-completion capability.
///
/// The credential and model are threaded in at construction, never read
/// from process-wide state, so tests can point a client at a fake
/// endpoint with a fake key.
pub struct CompletionClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl CompletionClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, CompletionError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key, model)
    }

    pub fn with_endpoint(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Sends one prompt and returns the completion text.
    ///
    /// Every failure mode surfaces as a typed `CompletionError`; a 200
    /// response with no candidate text is `EmptyCompletion`, which is a
    /// different failure point from a section missing after parsing.
    pub async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: SAMPLING_TEMPERATURE,
        };

        tracing::info!(
            "Requesting completion from {} (model: {}, prompt: {} bytes)",
            self.endpoint,
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?; // Propagates reqwest::Error as CompletionError::Network

        let status = response.status();
        if !status.is_success() {
            tracing::error!("HTTP error status: {} from completion endpoint", status);
            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                tracing::warn!("Received 429 Too Many Requests - completion quota exhausted.");
                return Err(CompletionError::RateLimited);
            }
            return Err(CompletionError::Http(status));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Parse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(CompletionError::EmptyCompletion);
        }

        tracing::debug!("Received {} bytes of completion text", content.len());
        Ok(content)
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_payload_shape() {
        let request = ChatRequest {
            model: "test-model",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: "prompt text",
                },
            ],
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: SAMPLING_TEMPERATURE,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "test-model");
        assert_eq!(value["max_tokens"], 800);
        assert_eq!(value["temperature"], 0.0);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][0]["content"], "You are a helpful assistant");
        assert_eq!(value["messages"][1]["role"], "user");
    }

    #[test]
    fn test_response_with_candidate_parses() {
        let body = r####"{"choices":[{"message":{"role":"assistant","content":"### Project Summary\nText"}}]}"####;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        let content = parsed.choices[0].message.content.as_deref();
        assert_eq!(content, Some("### Project Summary\nText"));
    }

    #[test]
    fn test_response_without_choices_parses_to_empty() {
        let parsed: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.choices.is_empty());
    }

    #[test]
    fn test_unreachable_endpoint_is_network_error() {
        // Port 9 (discard) refuses connections on any sane host.
        let client =
            CompletionClient::with_endpoint("http://127.0.0.1:9", "test-key", "test-model")
                .unwrap();
        let result = tokio_test::block_on(client.complete("prompt"));
        assert!(matches!(result, Err(CompletionError::Network(_))));
    }
}
