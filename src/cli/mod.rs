//! CLI interface for dynaspace.

pub mod handlers;
pub mod output;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Overrides;
use output::OutputMode;

/// dynaspace - find, inspect and invoke Gradio MCP Spaces
#[derive(Parser)]
#[command(name = "dynaspace", version, about, long_about = None)]
pub struct Cli {
    /// Curated spaces CSV (URL, file:// URL or path). Enables discover mode.
    #[arg(long, env = "DYNAMIC_SPACE_DATA", global = true)]
    pub data_source: Option<String>,

    /// Hugging Face token forwarded to the hub and to spaces
    #[arg(long, env = "HF_TOKEN", global = true, hide_env_values = true)]
    pub hf_token: Option<String>,

    /// Hub base URL
    #[arg(long, env = "DYNASPACE_HUB_URL", global = true)]
    pub hub_url: Option<String>,

    /// Config file (default: <config_dir>/dynaspace/config.toml)
    #[arg(long, env = "DYNASPACE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output as JSON instead of human-readable format
    #[arg(long, global = true)]
    pub json: bool,

    /// Output raw Markdown
    #[arg(long, global = true)]
    pub md: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            data_source: self.data_source.clone(),
            hf_token: self.hf_token.clone(),
            hub_url: self.hub_url.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start MCP server (stdio transport)
    Mcp,

    /// Show usage instructions for the active mode
    Usage,

    /// Semantic search for MCP-enabled spaces
    #[command(alias = "search")]
    Find {
        /// What you want to do, e.g. "image generation"
        query: String,
        /// Maximum results (1-50)
        #[arg(long)]
        limit: Option<u32>,
    },

    /// List the curated spaces from the data source
    Discover,

    /// Show the parameters a space accepts
    #[command(alias = "view-parameters")]
    Params {
        /// Space id (owner/name)
        space: String,
    },

    /// Invoke a space with a JSON object of parameters
    Invoke {
        /// Space id (owner/name)
        space: String,
        /// Parameters as a JSON object string
        parameters: String,
    },

    /// Send a raw dynamic_space request (JSON object)
    Call {
        /// Request, e.g. '{"operation": "find", "search_query": "tts"}'
        request: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, elvish, powershell)
        shell: clap_complete::Shell,
    },
}

/// Run a non-MCP command. Returns `false` when the tool reported an error.
pub async fn execute(
    command: &Commands,
    ctx: &crate::init::AppContext,
    mode: OutputMode,
) -> anyhow::Result<bool> {
    let ok = match command {
        Commands::Mcp => unreachable!("MCP handled in main"),
        Commands::Usage => handlers::space::handle_usage(ctx, mode).await,
        Commands::Find { query, limit } => {
            handlers::space::handle_find(ctx, query, *limit, mode).await
        }
        Commands::Discover => handlers::space::handle_discover(ctx, mode).await?,
        Commands::Params { space } => handlers::space::handle_params(ctx, space, mode).await,
        Commands::Invoke { space, parameters } => {
            handlers::space::handle_invoke(ctx, space, parameters, mode).await
        }
        Commands::Call { request } => handlers::space::handle_call(ctx, request, mode).await?,
        Commands::Completions { shell } => {
            clap_complete::generate(
                *shell,
                &mut Cli::command(),
                "dynaspace",
                &mut std::io::stdout(),
            );
            true
        }
    };
    Ok(ok)
}
