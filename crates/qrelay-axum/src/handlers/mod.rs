//! HTTP request handlers for the relay server.
//!
//! Handlers are thin wrappers that delegate to the [`AgentPort`]
//! capability held in [`AppState`].
//!
//! [`AgentPort`]: qrelay_core::AgentPort
//! [`AppState`]: crate::state::AppState

pub mod agent;
