#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod relay;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{CompletionRequest, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
pub use ports::{
    AgentError, AgentPort, AnswerStream, CompletionError, CompletionPort, FragmentResult,
    FragmentStream,
};
pub use relay::{
    END_TOKEN, ERROR_PREFIX, NEWLINE_TOKEN, RelayStream, StreamEvent, restore_newlines, sanitize,
};
pub use services::{AgentConfig, QueryAgent};
