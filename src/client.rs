//! Remote text-completion client.
//! Sends one prompt to the Anthropic messages endpoint and hands back the
//! generated text untouched.

use log::debug;
use reqwest::blocking::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};

/// Messages endpoint of the completion service.
pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
/// Model identifier sent with every request.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";
/// Upper bound on generated tokens per request.
pub const DEFAULT_MAX_TOKENS: u32 = 8000;
/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";
/// Value of the `anthropic-version` header.
pub const API_VERSION: &str = "2023-06-01";
/// Bound on a single request, connect to last byte.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Turns a prompt into generated text.
pub trait CompletionClient {
    /// Sends `prompt` and returns the completion.
    ///
    /// # Errors
    /// Any failure to obtain text. Callers decide whether it is fatal.
    fn complete(&self, prompt: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct MessageRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    /// Absent on non-text blocks such as `tool_use`.
    text: Option<String>,
}

/// Blocking client for the Anthropic messages API.
///
/// One request per call, no retries and no state kept between calls.
pub struct AnthropicClient {
    http: HttpClient,
    endpoint: String,
    model: String,
    max_tokens: u32,
    api_key_var: String,
}

impl AnthropicClient {
    /// Creates a client with the default endpoint, model and timeout.
    ///
    /// # Errors
    /// * `Error::HttpError` if the underlying HTTP client cannot be built
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Same as [`AnthropicClient::new`] with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            api_key_var: API_KEY_VAR.to_string(),
        })
    }

    /// Points the client at a different messages endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Overrides the model identifier sent with each request.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the output token limit sent with each request.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Reads the API key from `var` instead of `ANTHROPIC_API_KEY`.
    pub fn api_key_var(mut self, var: impl Into<String>) -> Self {
        self.api_key_var = var.into();
        self
    }

    fn api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_var)
            .map_err(|_| Error::MissingCredential(self.api_key_var.clone()))
    }
}

impl CompletionClient for AnthropicClient {
    fn complete(&self, prompt: &str) -> Result<String> {
        let api_key = self.api_key()?;

        let request = MessageRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!("POST {} (model {})", self.endpoint, self.model);
        let response = self
            .http
            .post(&self.endpoint)
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(Error::ApiError {
                status: status.as_u16(),
            });
        }

        let body: MessageResponse = response.json()?;
        first_text(body)
    }
}

fn first_text(body: MessageResponse) -> Result<String> {
    let block = body
        .content
        .into_iter()
        .next()
        .ok_or_else(|| Error::ResponseError("response contained no content blocks".to_string()))?;
    block
        .text
        .ok_or_else(|| Error::ResponseError("first content block has no text".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = MessageRequest {
            model: DEFAULT_MODEL,
            max_tokens: DEFAULT_MAX_TOKENS,
            messages: [Message {
                role: "user",
                content: "hello",
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "model": "claude-3-5-sonnet-20241022",
                "max_tokens": 8000,
                "messages": [{"role": "user", "content": "hello"}]
            })
        );
    }

    #[test]
    fn test_first_text_takes_first_block() {
        let body: MessageResponse = serde_json::from_str(
            r#"{"id":"msg_1","content":[{"type":"text","text":"first"},{"type":"text","text":"second"}]}"#,
        )
        .unwrap();
        assert_eq!(first_text(body).unwrap(), "first");
    }

    #[test]
    fn test_first_text_without_blocks() {
        let body: MessageResponse = serde_json::from_str(r#"{"content":[]}"#).unwrap();
        assert!(matches!(first_text(body), Err(Error::ResponseError(_))));
    }

    #[test]
    fn test_first_text_rejects_non_text_block() {
        let body: MessageResponse = serde_json::from_str(
            r#"{"content":[{"type":"tool_use","id":"x","name":"n","input":{}}]}"#,
        )
        .unwrap();
        assert!(matches!(first_text(body), Err(Error::ResponseError(_))));
    }
}
