#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod sse;
mod types;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::GroqClient;

// Configuration
pub use config::{GROQ_API_URL, GroqConfig};

// Silence unused dev-dependency warnings in the lib test target; wiremock
// drives the integration tests under tests/
#[cfg(test)]
use wiremock as _;
