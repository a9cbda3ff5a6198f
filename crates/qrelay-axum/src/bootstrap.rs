//! Server configuration and startup for the Axum adapter.
//!
//! Concrete implementations are wired into [`AxumContext`] by the
//! composition root; this module only knows the [`AgentPort`] capability.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use qrelay_core::AgentPort;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Optional path to static assets for SPA serving.
    pub static_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 9887,
            static_dir: None,
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Set the listen port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the static directory for SPA serving.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The agent answering relay queries.
    pub agent: Arc<dyn AgentPort>,
}

impl AxumContext {
    /// Wrap the injected agent capability.
    pub fn new(agent: Arc<dyn AgentPort>) -> Self {
        Self { agent }
    }
}

/// Start the web server on the configured port.
///
/// If `config.static_dir` is set, serves static assets with SPA fallback.
/// Otherwise, serves only the API endpoints.
pub async fn start_server(config: ServerConfig, ctx: AxumContext) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    // Choose router based on whether static serving is configured
    let app = if let Some(ref static_dir) = config.static_dir {
        info!("Serving static assets from: {}", static_dir.display());
        crate::routes::create_spa_router(ctx, static_dir, &config.cors)
    } else {
        crate::routes::create_router(ctx, &config.cors)
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    if config.static_dir.is_some() {
        info!("qrelay server (with UI) listening on http://{}", addr);
    } else {
        info!("qrelay server (API only) listening on http://{}", addr);
    }

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_listens_on_the_documented_port() {
        let config = ServerConfig::default();

        assert_eq!(config.port, 9887);
        assert!(config.static_dir.is_none());
        assert!(matches!(config.cors, CorsConfig::AllowAll));
    }

    #[test]
    fn builders_override_each_field() {
        let config = ServerConfig::default()
            .with_port(8080)
            .with_static_dir("/srv/ui")
            .with_allowed_origins(vec!["http://localhost:5173".to_string()]);

        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, Some(PathBuf::from("/srv/ui")));
        assert!(
            matches!(config.cors, CorsConfig::AllowOrigins(origins) if origins.len() == 1)
        );
    }
}
