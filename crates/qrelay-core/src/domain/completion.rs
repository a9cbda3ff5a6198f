//! Single-shot completion request model.

/// Model identifier used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Output token budget used when the caller does not pick one.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// One text-completion request to the upstream provider.
///
/// Constructed fresh per call and never mutated afterwards. The query is
/// carried verbatim; validation (non-blank) happens before construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// User-supplied query text, untrimmed.
    pub query: String,
    /// Provider model identifier.
    pub model: String,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Create a request for `query` with the default model and token budget.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

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
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
