//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use qrelay_core::AgentConfig;

use crate::commands::Commands;

/// Command-line interface definition for the qrelay streaming relay.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands. The agent options are global because the serve and ask
/// commands drive the same agent.
#[derive(Parser)]
#[command(name = "qrelay")]
#[command(about = "Relay one-shot queries to a completion provider as an event stream")]
#[command(version)]
pub struct Cli {
    /// Model identifier sent to the upstream provider
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Upper bound on tokens generated per answer
    #[arg(long, global = true)]
    pub max_tokens: Option<u32>,

    /// Disable upstream streaming and fetch each answer in one call
    #[arg(long, global = true)]
    pub buffered: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Resolve the agent configuration from the global flags.
    #[must_use]
    pub fn agent_config(&self) -> AgentConfig {
        let mut config = AgentConfig::default();
        if let Some(ref model) = self.model {
            config = config.with_model(model.clone());
        }
        if let Some(max_tokens) = self.max_tokens {
            config = config.with_max_tokens(max_tokens);
        }
        if self.buffered {
            config = config.buffered();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn default_flags_resolve_to_the_default_agent_config() {
        let cli = Cli::parse_from(["qrelay", "ask", "hello"]);

        assert_eq!(cli.agent_config(), AgentConfig::default());
    }

    #[test]
    fn global_flags_are_accepted_after_the_subcommand() {
        let cli = Cli::parse_from([
            "qrelay",
            "serve",
            "--model",
            "llama3-70b-8192",
            "--max-tokens",
            "128",
            "--buffered",
        ]);

        let config = cli.agent_config();
        assert_eq!(config.model, "llama3-70b-8192");
        assert_eq!(config.max_tokens, 128);
        assert!(!config.streaming);
    }

    #[test]
    fn global_flags_are_accepted_before_the_subcommand() {
        let cli = Cli::parse_from(["qrelay", "--model", "mixtral-8x7b-32768", "ask", "hi"]);

        assert_eq!(cli.agent_config().model, "mixtral-8x7b-32768");
    }
}
