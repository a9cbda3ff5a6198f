//! Orchestration services over the ports.
//!
//! Services hold `Arc`'d port trait objects and carry the business rules;
//! adapters construct them once at bootstrap and share them across
//! requests.

pub mod agent;

pub use agent::{AgentConfig, QueryAgent};
