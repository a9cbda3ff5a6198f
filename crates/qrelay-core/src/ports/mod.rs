//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core domain expects from adapters. They
//! contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No HTTP-client types in any signature
//! - Errors carry plain data (status numbers, strings), never adapter errors
//! - Streams are boxed trait objects so adapters stay swappable

pub mod agent;
pub mod completion;

// Re-export port traits for convenience
pub use agent::{AgentError, AgentPort, AnswerStream};
pub use completion::{CompletionError, CompletionPort, FragmentResult, FragmentStream};
