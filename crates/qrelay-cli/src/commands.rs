//! Main commands enum and primary subcommands.
//!
//! This module defines the available commands for the CLI tool.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands for the relay tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the relay HTTP server
    Serve {
        /// Port to serve the relay on
        #[arg(short, long, default_value = "9887")]
        port: u16,

        /// Path to a directory of built frontend assets to serve with SPA fallback
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Allow this CORS origin (repeatable; all origins allowed when absent)
        #[arg(long = "allow-origin", value_name = "ORIGIN")]
        allow_origin: Vec<String>,
    },

    /// Ask one question and print the answer as it arrives
    #[command(
        alias = "q",
        after_help = "EXAMPLES:\n    qrelay q \"What is Rust?\"\n    qrelay ask --model llama3-70b-8192 \"Explain event streams\"\n    qrelay ask --buffered \"Short answer please\""
    )]
    Ask {
        /// Question to relay to the completion provider
        query: String,
    },
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::parser::Cli;

    use super::*;

    #[test]
    fn serve_applies_documented_defaults() {
        let cli = Cli::parse_from(["qrelay", "serve"]);

        match cli.command {
            Some(Commands::Serve {
                port,
                static_dir,
                allow_origin,
            }) => {
                assert_eq!(port, 9887);
                assert!(static_dir.is_none());
                assert!(allow_origin.is_empty());
            }
            _ => panic!("expected the serve command"),
        }
    }

    #[test]
    fn serve_collects_repeated_origins() {
        let cli = Cli::parse_from([
            "qrelay",
            "serve",
            "--port",
            "8080",
            "--static-dir",
            "./dist",
            "--allow-origin",
            "http://localhost:5173",
            "--allow-origin",
            "https://app.example.com",
        ]);

        match cli.command {
            Some(Commands::Serve {
                port,
                static_dir,
                allow_origin,
            }) => {
                assert_eq!(port, 8080);
                assert_eq!(static_dir, Some(PathBuf::from("./dist")));
                assert_eq!(
                    allow_origin,
                    vec!["http://localhost:5173", "https://app.example.com"]
                );
            }
            _ => panic!("expected the serve command"),
        }
    }

    #[test]
    fn ask_takes_the_query_positionally() {
        let cli = Cli::parse_from(["qrelay", "ask", "why is the sky blue?"]);

        match cli.command {
            Some(Commands::Ask { query }) => assert_eq!(query, "why is the sky blue?"),
            _ => panic!("expected the ask command"),
        }
    }

    #[test]
    fn ask_answers_to_its_short_alias() {
        let cli = Cli::parse_from(["qrelay", "q", "hello"]);

        assert!(matches!(cli.command, Some(Commands::Ask { .. })));
    }
}
