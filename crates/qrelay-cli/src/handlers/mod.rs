//! Command handlers that delegate to the composed agent.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Drive the agent capability
//!   3. Format output for the terminal
//!
//! Handlers should NOT construct clients or agents themselves; all
//! wiring happens in the bootstrap module.

pub mod ask;
pub mod serve;
