//! dynaspace - find, inspect and invoke Gradio MCP Spaces
//!
//! Usage:
//!   dynaspace mcp                          Start MCP server on stdio
//!   dynaspace find "image generation"      Search MCP-enabled spaces
//!   dynaspace discover                     List the curated spaces
//!   dynaspace params owner/space           Show a space's parameters
//!   dynaspace invoke owner/space '{...}'   Run a space
//!   dynaspace --help                       Show all commands

use anyhow::Result;
use clap::Parser;

use dynaspace::cli::output::OutputMode;
use dynaspace::cli::{Cli, Commands};
use dynaspace::config::SpaceSettings;
use dynaspace::init::AppContext;
use dynaspace::mcp::server::run_mcp_server;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Tracing to stderr (safe for MCP stdio transport)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dynaspace=info".parse()?),
        )
        .init();

    let mode = OutputMode::from_flags(cli.json, cli.md);
    let settings = SpaceSettings::load(cli.overrides(), cli.config.as_deref());

    match &cli.command {
        Commands::Mcp => {
            let ctx = AppContext::new(settings)?;
            run_mcp_server(ctx).await?;
        }
        cmd => {
            let ctx = AppContext::new(settings)?;
            if !dynaspace::cli::execute(cmd, &ctx, mode).await? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
