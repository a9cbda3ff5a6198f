//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Command dispatch routes to handlers which delegate to the
//! agent capability; nothing below this file reads the environment or
//! constructs a network client.

use clap::Parser;

use qrelay_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    let agent_config = cli.agent_config();

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    // The credential is required before anything binds or connects.
    let config = CliConfig::from_env()?.with_agent(agent_config);
    let ctx = bootstrap(config)?;

    match command {
        Commands::Serve {
            port,
            static_dir,
            allow_origin,
        } => {
            handlers::serve::execute(ctx, port, static_dir, allow_origin).await?;
        }
        Commands::Ask { query } => {
            handlers::ask::execute(&ctx, &query).await?;
        }
    }

    Ok(())
}
