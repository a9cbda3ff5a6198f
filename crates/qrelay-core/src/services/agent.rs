//! Query agent - thin orchestrator between callers and the completion port.
//!
//! Validates the query, builds the completion request from its immutable
//! configuration, and exposes the answer as a fragment stream regardless of
//! whether the provider call was streaming or buffered.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::{StreamExt, stream};
use tracing::debug;

use crate::domain::{CompletionRequest, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use crate::ports::agent::{AgentError, AgentPort, AnswerStream};
use crate::ports::completion::CompletionPort;

/// Per-process agent configuration, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    /// Model identifier sent with every completion request.
    pub model: String,
    /// Token budget sent with every completion request.
    pub max_tokens: u32,
    /// When true (the default), fragments arrive as the provider produces
    /// them; when false, the whole answer becomes a single fragment.
    pub streaming: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            streaming: true,
        }
    }
}

impl AgentConfig {
    /// Override the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the token budget.
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Disable upstream streaming; the answer arrives as one fragment.
    #[must_use]
    pub const fn buffered(mut self) -> Self {
        self.streaming = false;
        self
    }
}

/// Default [`AgentPort`] implementation: one completion call per query.
pub struct QueryAgent {
    completions: Arc<dyn CompletionPort>,
    config: AgentConfig,
}

impl QueryAgent {
    /// Create an agent over a completion provider.
    pub fn new(completions: Arc<dyn CompletionPort>, config: AgentConfig) -> Self {
        Self {
            completions,
            config,
        }
    }

    /// The configuration this agent was built with.
    pub const fn config(&self) -> &AgentConfig {
        &self.config
    }
}

#[async_trait]
impl AgentPort for QueryAgent {
    async fn ask(&self, query: &str) -> Result<AnswerStream, AgentError> {
        if query.trim().is_empty() {
            return Err(AgentError::EmptyQuery);
        }

        // The query goes upstream verbatim; trimming is for validation only.
        let request = CompletionRequest::new(query)
            .with_model(self.config.model.clone())
            .with_max_tokens(self.config.max_tokens);

        debug!(
            query_len = query.len(),
            model = %request.model,
            streaming = self.config.streaming,
            "dispatching completion request"
        );

        if self.config.streaming {
            let fragments = self.completions.complete_streaming(request).await?;
            Ok(fragments.map(|item| item.map_err(AgentError::from)).boxed())
        } else {
            let answer = self.completions.complete(request).await?;
            Ok(stream::once(async move { Ok(answer) }).boxed())
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use futures_util::TryStreamExt;

    use super::*;
    use crate::ports::completion::{CompletionError, FragmentStream};

    /// Completion stub that records calls and echoes canned fragments.
    #[derive(Default)]
    struct StubCompletions {
        complete_calls: AtomicUsize,
        streaming_calls: AtomicUsize,
        last_request: Mutex<Option<CompletionRequest>>,
    }

    #[async_trait]
    impl CompletionPort for StubCompletions {
        async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
            self.complete_calls.fetch_add(1, Ordering::SeqCst);
            let answer = format!("echo: {}", request.query);
            *self.last_request.lock().unwrap() = Some(request);
            Ok(answer)
        }

        async fn complete_streaming(
            &self,
            request: CompletionRequest,
        ) -> Result<FragmentStream, CompletionError> {
            self.streaming_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request);
            Ok(stream::iter(vec![Ok("part1".to_string()), Ok("part2".to_string())]).boxed())
        }
    }

    /// Completion stub whose calls always fail.
    struct FailingCompletions;

    #[async_trait]
    impl CompletionPort for FailingCompletions {
        async fn complete(&self, _request: CompletionRequest) -> Result<String, CompletionError> {
            Err(CompletionError::Transport("connection refused".to_string()))
        }

        async fn complete_streaming(
            &self,
            _request: CompletionRequest,
        ) -> Result<FragmentStream, CompletionError> {
            Err(CompletionError::Upstream {
                status: 500,
                message: "internal error".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn streaming_mode_passes_fragments_through_in_order() {
        let stub = Arc::new(StubCompletions::default());
        let agent = QueryAgent::new(stub.clone(), AgentConfig::default());

        let answer = agent.ask("hello").await.unwrap();
        let fragments: Vec<String> = answer.try_collect().await.unwrap();

        assert_eq!(fragments, vec!["part1", "part2"]);
        assert_eq!(stub.streaming_calls.load(Ordering::SeqCst), 1);
        assert_eq!(stub.complete_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn buffered_mode_yields_the_whole_answer_as_one_fragment() {
        let stub = Arc::new(StubCompletions::default());
        let agent = QueryAgent::new(stub.clone(), AgentConfig::default().buffered());

        let answer = agent.ask("hello").await.unwrap();
        let fragments: Vec<String> = answer.try_collect().await.unwrap();

        assert_eq!(fragments, vec!["echo: hello"]);
        assert_eq!(stub.complete_calls.load(Ordering::SeqCst), 1);
        assert_eq!(stub.streaming_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn blank_queries_fail_without_touching_the_provider() {
        let stub = Arc::new(StubCompletions::default());
        let agent = QueryAgent::new(stub.clone(), AgentConfig::default());

        for blank in ["", "   ", "\n\t ", "\r\n"] {
            let result = agent.ask(blank).await;
            assert!(matches!(result, Err(AgentError::EmptyQuery)));
        }

        assert_eq!(stub.complete_calls.load(Ordering::SeqCst), 0);
        assert_eq!(stub.streaming_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn request_carries_configured_model_and_budget() {
        let stub = Arc::new(StubCompletions::default());
        let config = AgentConfig::default()
            .with_model("llama3-70b-8192")
            .with_max_tokens(64);
        let agent = QueryAgent::new(stub.clone(), config);

        agent.ask("  spaced query  ").await.unwrap();

        let request = stub.last_request.lock().unwrap().take().unwrap();
        assert_eq!(request.query, "  spaced query  ");
        assert_eq!(request.model, "llama3-70b-8192");
        assert_eq!(request.max_tokens, 64);
    }

    #[tokio::test]
    async fn default_config_uses_documented_defaults() {
        let stub = Arc::new(StubCompletions::default());
        let agent = QueryAgent::new(stub.clone(), AgentConfig::default());

        agent.ask("q").await.unwrap();

        let request = stub.last_request.lock().unwrap().take().unwrap();
        assert_eq!(request.model, DEFAULT_MODEL);
        assert_eq!(request.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[tokio::test]
    async fn provider_failures_surface_as_completion_errors() {
        let agent = QueryAgent::new(Arc::new(FailingCompletions), AgentConfig::default());

        let error = agent.ask("hello").await.err().unwrap();
        assert!(matches!(
            error,
            AgentError::Completion(CompletionError::Upstream { status: 500, .. })
        ));

        let agent = QueryAgent::new(Arc::new(FailingCompletions), AgentConfig::default().buffered());

        let error = agent.ask("hello").await.err().unwrap();
        assert!(matches!(
            error,
            AgentError::Completion(CompletionError::Transport(_))
        ));
    }
}
