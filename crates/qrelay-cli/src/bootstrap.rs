//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI: the Groq client is constructed and bound to the
//! completion port, and the query agent is bound to the agent port.
//! Command handlers receive the composed context and see capabilities,
//! not concrete types.

use std::env;
use std::sync::Arc;

use anyhow::{Result, bail};
use tracing::debug;

use qrelay_core::{AgentConfig, AgentPort, QueryAgent};
use qrelay_groq::{GroqClient, GroqConfig};

/// Environment variable holding the upstream bearer credential.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Bearer credential for the upstream provider.
    pub api_key: String,
    /// Agent configuration shared by the serve and ask commands.
    pub agent: AgentConfig,
}

impl CliConfig {
    /// Create a configuration around the required credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            agent: AgentConfig::default(),
        }
    }

    /// Read the credential from the environment.
    ///
    /// Fails when [`API_KEY_VAR`] is absent or blank. This runs before
    /// anything binds a socket or talks to the provider, so a missing key
    /// aborts startup instead of failing requests later.
    pub fn from_env() -> Result<Self> {
        match env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => bail!("{API_KEY_VAR} is not set; export it or add it to a .env file"),
        }
    }

    /// Replace the agent configuration.
    #[must_use]
    pub fn with_agent(mut self, agent: AgentConfig) -> Self {
        self.agent = agent;
        self
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The agent answering relay queries.
    pub agent: Arc<dyn AgentPort>,
}

impl CliContext {
    /// Access the agent capability.
    pub fn agent(&self) -> &Arc<dyn AgentPort> {
        &self.agent
    }
}

/// Bootstrap the CLI application.
///
/// Builds the Groq client from the credential, composes the query agent
/// over it, and hands both back behind the agent port.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    debug!(
        model = %config.agent.model,
        max_tokens = config.agent.max_tokens,
        streaming = config.agent.streaming,
        "composing relay agent"
    );

    let client = GroqClient::new(GroqConfig::new(config.api_key))
        .map_err(|error| anyhow::anyhow!("failed to build the completion client: {error}"))?;
    let agent = QueryAgent::new(Arc::new(client), config.agent);

    Ok(CliContext {
        agent: Arc::new(agent),
    })
}
