//! Serve command handler.
//!
//! Hands the composed agent to the Axum adapter and runs the HTTP
//! surface until the process is stopped.

use std::path::PathBuf;

use anyhow::Result;

use qrelay_axum::{AxumContext, ServerConfig, start_server};

use crate::bootstrap::CliContext;

/// Execute the serve command.
///
/// # Arguments
///
/// * `ctx` - The composed CLI context providing the agent capability
/// * `port` - Port to bind the HTTP server on
/// * `static_dir` - Optional directory of frontend assets to serve with SPA fallback
/// * `allow_origin` - CORS origins to allow; empty means allow all
pub async fn execute(
    ctx: CliContext,
    port: u16,
    static_dir: Option<PathBuf>,
    allow_origin: Vec<String>,
) -> Result<()> {
    let mut config = ServerConfig::default().with_port(port);
    if let Some(dir) = static_dir {
        config = config.with_static_dir(dir);
    }
    if !allow_origin.is_empty() {
        config = config.with_allowed_origins(allow_origin);
    }

    start_server(config, AxumContext::new(ctx.agent)).await
}
