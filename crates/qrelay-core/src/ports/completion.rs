//! Port for the upstream text-completion provider.

use std::pin::Pin;

use async_trait::async_trait;
use futures_core::Stream;
use thiserror::Error;

use crate::domain::CompletionRequest;

/// One partial-result fragment, or the error that ended the stream.
pub type FragmentResult = Result<String, CompletionError>;

/// Lazy, ordered, finite sequence of answer fragments.
pub type FragmentStream = Pin<Box<dyn Stream<Item = FragmentResult> + Send>>;

/// Failures of a single completion call.
///
/// Exactly one variant per failure class the relay distinguishes; an empty
/// completion is NOT an error and comes back as `Ok` with empty content.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The provider answered with a non-success status.
    #[error("upstream returned status {status}: {message}")]
    Upstream {
        /// HTTP status code from the provider.
        status: u16,
        /// Response body, verbatim.
        message: String,
    },

    /// The call never completed (connect failure, timeout, TLS, mid-stream I/O).
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with success but the payload made no sense.
    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),
}

/// Capability: perform one text completion against the upstream provider.
///
/// One network call per invocation. No retries, no caching; failures come
/// back typed rather than as sentinel values.
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Run the completion to the end and return the full text.
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;

    /// Start the completion and return its fragments as they are produced.
    ///
    /// Dropping the returned stream abandons the call and releases the
    /// underlying connection.
    async fn complete_streaming(
        &self,
        request: CompletionRequest,
    ) -> Result<FragmentStream, CompletionError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
