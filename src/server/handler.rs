//! MCP server handler wiring tool calls to the change reader and writer.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, JsonObject, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use tracing::{info, warn};

use crate::changes::read_changes;
use crate::commit::commit_and_push;
use crate::config::Config;
use crate::error::ToolError;
use crate::git::{CommandGitClient, GitClient};

use super::tools::{
    CHANGES_TOOL, COMMIT_TOOL, commit_request, render_changes, render_commit, render_error,
    tool_definitions,
};

/// Serves the change-summary and commit tools for one repository.
pub struct GitChangesServer<C: GitClient = CommandGitClient> {
    client: Arc<C>,
    config: Config,
}

impl GitChangesServer<CommandGitClient> {
    /// Server backed by the system `git` binary.
    pub fn new(config: Config) -> Self {
        Self::with_client(CommandGitClient, config)
    }
}

impl<C: GitClient> GitChangesServer<C> {
    pub fn with_client(client: C, config: Config) -> Self {
        Self {
            client: Arc::new(client),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run a tool and return its response text.
    ///
    /// Failures never escape: they come back as text starting with `Error:`.
    pub async fn call(&self, name: &str, arguments: Option<&JsonObject>) -> String {
        match self.dispatch(name, arguments).await {
            Ok(text) => text,
            Err(e) => {
                warn!(tool = name, "Tool call failed: {}", e);
                render_error(&e)
            }
        }
    }

    async fn dispatch(
        &self,
        name: &str,
        arguments: Option<&JsonObject>,
    ) -> Result<String, ToolError> {
        let repo = self.config().repository_path();
        match name {
            CHANGES_TOOL => {
                let changes = read_changes(self.client.as_ref(), repo).await?;
                render_changes(&changes)
            }
            COMMIT_TOOL => {
                let request = commit_request(arguments)?;
                commit_and_push(self.client.as_ref(), repo, &request.message).await?;
                info!("Committed with message: {}", request.message);
                Ok(render_commit(&request.message))
            }
            other => Err(ToolError::NotFound(other.to_string())),
        }
    }
}

impl<C: GitClient + 'static> ServerHandler for GitChangesServer<C> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(format!(
                "Use {CHANGES_TOOL} to inspect pending changes and draft a commit message, \
                 then {COMMIT_TOOL} to stage, commit and push them."
            )),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(tool_definitions()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.call(&request.name, request.arguments.as_ref()).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
