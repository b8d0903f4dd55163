//! Neuralist Match MCP Server — entry point.

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use neuralist_match_mcp::config::ServerConfig;
use neuralist_match_mcp::protocol::ProtocolHandler;
use neuralist_match_mcp::tools::ToolRegistry;
use neuralist_match_mcp::transport::StdioTransport;

#[derive(Parser)]
#[command(
    name = "neuralist-match-mcp",
    about = "MCP server for Neuralist Match — color-histogram features and similarity search",
    version
)]
struct Cli {
    #[command(flatten)]
    limits: LimitArgs,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Request limits. Each falls back to its NEURALIST_* environment variable.
#[derive(Args, Clone, Copy, Default)]
struct LimitArgs {
    /// Maximum raw pixel bytes per feature_extract call.
    #[arg(long, global = true)]
    max_image_bytes: Option<usize>,

    /// Maximum candidate vectors per matching call.
    #[arg(long, global = true)]
    max_candidates: Option<usize>,

    /// Maximum k for feature_top_k.
    #[arg(long, global = true)]
    max_top_k: Option<usize>,
}

impl LimitArgs {
    fn resolve(self) -> ServerConfig {
        ServerConfig::resolve(self.max_image_bytes, self.max_candidates, self.max_top_k)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server over stdio (default).
    Serve,

    /// Print server capabilities, tools, and resolved limits as JSON.
    Info,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   neuralist-match-mcp completions bash > ~/.local/share/bash-completion/completions/neuralist-match-mcp
    ///   neuralist-match-mcp completions zsh > ~/.zfunc/_neuralist-match-mcp
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let config = cli.limits.resolve();
            tracing::info!("Neuralist Match MCP server v{}", neuralist_match::VERSION);
            tracing::info!(
                "Limits: {} image bytes, {} candidates, k <= {}",
                config.max_image_bytes,
                config.max_candidates,
                config.max_top_k
            );
            let handler = ProtocolHandler::new(config);
            let transport = StdioTransport::new(handler);
            transport.run().await?;
        }

        Commands::Info => {
            let config = cli.limits.resolve();
            let capabilities = neuralist_match_mcp::types::InitializeResult::default_result();
            let tools = ToolRegistry::list_tools();
            let info = serde_json::json!({
                "server": capabilities.server_info,
                "protocol_version": capabilities.protocol_version,
                "capabilities": capabilities.capabilities,
                "tools": tools.iter().map(|t| &t.name).collect::<Vec<_>>(),
                "tool_count": tools.len(),
                "limits": config,
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(
                shell,
                &mut cmd,
                "neuralist-match-mcp",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}
