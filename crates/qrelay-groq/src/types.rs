//! Wire types for the Groq OpenAI-compatible chat-completions API.
//!
//! These types are internal to `qrelay-groq`; consumers talk to the client
//! through the port types in `qrelay-core`.

use serde::{Deserialize, Serialize};

use qrelay_core::CompletionRequest;

// ============================================================================
// Request body
// ============================================================================

/// One chat message in the request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// Message role (`user` for relay queries).
    pub role: String,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Build a user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// POST body for a chat-completions call.
///
/// The `stream` flag is omitted from the serialized body on the buffered
/// path; the provider defaults it to off.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Conversation history; the relay always sends a single user message.
    pub messages: Vec<ChatMessage>,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Provider model identifier.
    pub model: String,
    /// Request an SSE chunk stream instead of a single JSON body.
    #[serde(skip_serializing_if = "is_false")]
    pub stream: bool,
}

impl ChatRequest {
    /// Body for the buffered path: whole completion in one JSON response.
    pub fn buffered(request: &CompletionRequest) -> Self {
        Self {
            messages: vec![ChatMessage::user(request.query.clone())],
            max_tokens: request.max_tokens,
            model: request.model.clone(),
            stream: false,
        }
    }

    /// Body for the streaming path: provider answers with SSE chunks.
    pub fn streaming(request: &CompletionRequest) -> Self {
        Self {
            stream: true,
            ..Self::buffered(request)
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

// ============================================================================
// Buffered response body
// ============================================================================

/// JSON body of a non-streaming completion response.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    /// Completion alternatives; the relay only ever reads the first.
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

impl ChatResponse {
    /// Extract the first choice's message content, if any choice came back.
    pub fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
    }
}

/// One completion alternative in a non-streaming response.
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    /// The generated assistant message.
    pub message: ChatResponseMessage,
}

/// Assistant message inside a completion choice.
#[derive(Debug, Deserialize)]
pub struct ChatResponseMessage {
    /// Generated text; missing content deserializes as empty.
    #[serde(default)]
    pub content: String,
}

// ============================================================================
// Streaming chunk body
// ============================================================================

/// JSON body of one SSE chunk on the streaming path.
#[derive(Debug, Deserialize)]
pub struct ChatChunk {
    /// Per-choice deltas; the relay only ever reads the first.
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
}

impl ChatChunk {
    /// Extract the first choice's delta content.
    ///
    /// `None` for chunks that carry no text (the role preamble and the
    /// finish chunk); `Some("")` when the provider sends an explicitly
    /// empty fragment, which is still relayed.
    pub fn into_delta_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.delta.content)
    }
}

/// One choice entry in a streaming chunk.
#[derive(Debug, Default, Deserialize)]
pub struct ChunkChoice {
    /// Incremental message delta.
    #[serde(default)]
    pub delta: ChunkDelta,
}

/// Incremental message payload of a streaming chunk.
#[derive(Debug, Default, Deserialize)]
pub struct ChunkDelta {
    /// Text fragment, absent on non-text chunks.
    #[serde(default)]
    pub content: Option<String>,
}
