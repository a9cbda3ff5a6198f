//! Reqwest-backed completion client.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use tracing::{debug, warn};

use qrelay_core::{CompletionError, CompletionPort, CompletionRequest, FragmentStream};

use crate::config::GroqConfig;
use crate::sse::ChunkStream;
use crate::types::{ChatRequest, ChatResponse};

/// Completion client for the Groq OpenAI-compatible chat-completions API.
///
/// Holds an immutable configuration and a pooled HTTP client; shared
/// across requests behind an `Arc`. Exactly one outbound request per
/// call, no retries.
#[derive(Debug, Clone)]
pub struct GroqClient {
    config: GroqConfig,
    http: reqwest::Client,
}

impl GroqClient {
    /// Build a client from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError::Transport`] when the HTTP client cannot
    /// be constructed (TLS backend initialization).
    pub fn new(config: GroqConfig) -> Result<Self, CompletionError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|error| CompletionError::Transport(error.to_string()))?;

        Ok(Self { config, http })
    }

    /// POST the request body and fail on non-success statuses.
    ///
    /// `bounded` applies the whole-request timeout; the streaming path
    /// leaves it off because a legitimate stream has no duration bound.
    async fn send(
        &self,
        body: &ChatRequest,
        bounded: bool,
    ) -> Result<reqwest::Response, CompletionError> {
        let mut request = self
            .http
            .post(&self.config.base_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(body);
        if bounded {
            request = request.timeout(self.config.request_timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|error| CompletionError::Transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "completion request rejected");
            return Err(CompletionError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl CompletionPort for GroqClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        debug!(model = %request.model, max_tokens = request.max_tokens, "requesting completion");

        let response = self.send(&ChatRequest::buffered(&request), true).await?;
        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|error| CompletionError::InvalidResponse(error.to_string()))?;

        parsed
            .into_content()
            .ok_or_else(|| CompletionError::InvalidResponse("no choices in response".to_string()))
    }

    async fn complete_streaming(
        &self,
        request: CompletionRequest,
    ) -> Result<FragmentStream, CompletionError> {
        debug!(
            model = %request.model,
            max_tokens = request.max_tokens,
            "requesting streaming completion"
        );

        let response = self.send(&ChatRequest::streaming(&request), false).await?;
        let bytes = response
            .bytes_stream()
            .map_err(|error| CompletionError::Transport(error.to_string()));

        Ok(Box::pin(ChunkStream::new(Box::pin(bytes))))
    }
}
