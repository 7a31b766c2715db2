//! Gemini access for Scribe. Every model call, buffered or streamed, goes
//! through [`GeminiClient`]; handlers only see the [`TextGenerator`] trait.

use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;
use futures::{Stream, StreamExt};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

pub mod sse;
mod types;

use sse::{parse_data_lines, SseBuffer};
use types::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

/// The model used for every generation call.
pub const MODEL: &str = "gemini-2.5-pro-exp-03-25";
const API_KEY_HEADER: &str = "x-goog-api-key";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// An error payload delivered inside an otherwise successful response.
    #[error("{0}")]
    Upstream(String),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Lazy, finite sequence of generated text fragments in upstream order.
/// Ends after the first `Err`.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String, LlmError>> + Send>>;

/// A text-generation backend. Swap implementations without touching handlers.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends `prompt` as a single user message and returns the full text.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    /// Sends `prompt` as a single user message and relays fragments as they arrive.
    async fn generate_stream(&self, prompt: &str) -> Result<FragmentStream, LlmError>;
}

/// Gemini `generateContent` / `streamGenerateContent` client.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiClient {
    /// `timeout` bounds buffered calls only; streams run until upstream finishes.
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().connect_timeout(CONNECT_TIMEOUT).build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/v1beta/models/{MODEL}:{method}", self.base_url)
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        body: &GenerateContentRequest<'_>,
    ) -> Result<reqwest::Response, LlmError> {
        let response = request
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);
        Err(LlmError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let body = GenerateContentRequest::user_text(prompt);
        let request = self
            .client
            .post(self.endpoint("generateContent"))
            .timeout(self.timeout);

        let response: GenerateContentResponse = self.send(request, &body).await?.json().await?;

        if let Some(err) = response.error {
            return Err(LlmError::Upstream(err.message));
        }
        if let Some(usage) = &response.usage_metadata {
            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        let text = response.text();
        if text.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text)
    }

    async fn generate_stream(&self, prompt: &str) -> Result<FragmentStream, LlmError> {
        let body = GenerateContentRequest::user_text(prompt);
        let request = self
            .client
            .post(self.endpoint("streamGenerateContent"))
            .query(&[("alt", "sse")]);

        let response = self.send(request, &body).await?;
        let mut bytes = response.bytes_stream();

        let stream = async_stream::try_stream! {
            let mut buffer = SseBuffer::new();
            while let Some(chunk) = bytes.next().await {
                buffer.push_chunk(&chunk?);
                while let Some(block) = buffer.next_event_block() {
                    for data in parse_data_lines(&block) {
                        let fragment = parse_fragment(data)?;
                        if !fragment.is_empty() {
                            yield fragment;
                        }
                    }
                }
            }
            debug!("LLM stream finished");
        };

        Ok(Box::pin(stream))
    }
}

/// Text carried by one streamed `GenerateContentResponse`.
fn parse_fragment(data: &str) -> Result<String, LlmError> {
    let chunk: GenerateContentResponse = serde_json::from_str(data)?;
    if let Some(err) = chunk.error {
        return Err(LlmError::Upstream(err.message));
    }
    Ok(chunk.text())
}
