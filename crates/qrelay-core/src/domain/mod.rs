//! Domain types shared across the relay.

pub mod completion;

pub use completion::{CompletionRequest, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
