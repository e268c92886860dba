//! git-changes-mcp - stdio server entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use tracing::{info, warn};

use git_changes_mcp::config::Config;
use git_changes_mcp::git::check_git_installed;
use git_changes_mcp::logging;
use git_changes_mcp::server::GitChangesServer;

/// Serve working-tree change summaries and commit/push over MCP (stdio).
#[derive(Parser, Debug)]
#[command(name = "git-changes-mcp")]
#[command(about = "Serve working-tree change summaries and commit/push over MCP (stdio)")]
#[command(version)]
struct Cli {
    /// Repository to operate on (overrides REPOSITORY_PATH, defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    repository_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Step 1: Environment and logging (logs go to stderr)
    dotenvy::dotenv().ok();
    logging::init();
    let cli = Cli::parse();

    // Step 2: Resolve the repository once for the process lifetime
    let config =
        Config::resolve(cli.repository_path).context("Failed to resolve repository path")?;
    info!(
        "Serving git changes for {}",
        config.repository_path.display()
    );

    // Step 3: Check prerequisites (tool calls report the problem if this fails)
    if let Err(e) = check_git_installed().await {
        warn!("{}", e);
    }

    // Step 4: Serve until the client disconnects
    let service = GitChangesServer::new(config)
        .serve(stdio())
        .await
        .context("Failed to start MCP server on stdio")?;

    service
        .waiting()
        .await
        .context("MCP server task failed")?;

    Ok(())
}
