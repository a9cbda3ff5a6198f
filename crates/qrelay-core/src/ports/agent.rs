//! Port for answer-producing agents.
//!
//! The HTTP surface and the CLI depend on this capability alone: given a
//! query, produce an ordered, finite stream of text fragments. Whatever
//! orchestration sits behind it (a single upstream call today, a tool loop
//! tomorrow) stays invisible to callers.

use std::pin::Pin;

use async_trait::async_trait;
use futures_core::Stream;
use thiserror::Error;

use super::completion::CompletionError;

/// Lazy, ordered, finite sequence of raw (unsanitized) answer fragments.
pub type AnswerStream = Pin<Box<dyn Stream<Item = Result<String, AgentError>> + Send>>;

/// Failures of an agent invocation.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The query was missing, empty, or whitespace-only.
    ///
    /// The message doubles as the wire-level validation error text.
    #[error("Query parameter is required.")]
    EmptyQuery,

    /// The upstream completion failed.
    #[error(transparent)]
    Completion(#[from] CompletionError),
}

/// Capability: answer one query as a stream of text fragments.
#[async_trait]
pub trait AgentPort: Send + Sync {
    /// Produce the answer fragments for `query`, in order.
    ///
    /// Fails fast (before any upstream work) when the query is blank.
    async fn ask(&self, query: &str) -> Result<AnswerStream, AgentError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_message_matches_the_wire_contract() {
        assert_eq!(
            AgentError::EmptyQuery.to_string(),
            "Query parameter is required."
        );
    }

    #[test]
    fn completion_errors_pass_through_transparently() {
        let error = AgentError::from(CompletionError::Transport("timed out".to_string()));

        assert_eq!(error.to_string(), "transport error: timed out");
    }
}
