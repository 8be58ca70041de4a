//! LLM Client
//!
//! Submits a prompt to an OpenAI-compatible chat-completion endpoint and
//! returns the generated text. One request, one synchronously awaited
//! response; nothing is retried or cached. Any transport, status, or
//! response-shape failure surfaces as a [`GenerationError`].

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub mod types;

use types::{ChatResponse, Message};

use crate::config::Config;
use crate::errors::{GenerationError, Result, TestforgeError};

/// Trait abstraction over the LLM API client, enabling test mocking.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a prompt and return the raw generated text.
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GenerationError>;
}

pub struct ApiClient {
    client: Client,
    endpoint: String,
    model: String,
    temperature: f32,
    api_key: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| TestforgeError::Config("api_key is not set".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(600))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| TestforgeError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            api_key,
        })
    }
}

#[async_trait]
impl LlmClient for ApiClient {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GenerationError> {
        let url = format!("{}/chat/completions", self.endpoint);
        let body = serde_json::json!({
            "model": self.model,
            "messages": vec![Message::user(prompt)],
            "temperature": self.temperature,
        });

        debug!("Sending completion request to {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body_text = response
            .text()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        debug!("API responded with status {} ({} chars)", status, body_text.len());

        parse_completion(status, &body_text)
    }
}

/// Decode a completion reply from its HTTP status and body.
///
/// Kept free of I/O so response handling is unit-testable: a non-success
/// status, an undecodable body, and a decoded body with no usable text each
/// map to their own [`GenerationError`] variant.
pub(crate) fn parse_completion(
    status: u16,
    body: &str,
) -> std::result::Result<String, GenerationError> {
    if !(200..300).contains(&status) {
        return Err(GenerationError::HttpStatus {
            status,
            message: body.trim().to_string(),
        });
    }

    let decoded: ChatResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::Parse(e.to_string()))?;

    decoded
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .ok_or(GenerationError::MissingContent)
}
