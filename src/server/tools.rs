//! Tool definitions and response text for the MCP surface.

use rmcp::model::{JsonObject, Tool};
use serde_json::{Value, json};

use crate::changes::ChangeSet;
use crate::commit::CommitRequest;
use crate::error::ToolError;

/// Tool that summarizes pending changes for commit message writing.
pub const CHANGES_TOOL: &str = "git-changes-commit-message";

/// Tool that stages, commits and pushes with a caller-supplied message.
pub const COMMIT_TOOL: &str = "git-changes-commit";

/// Prefix marking a failed tool call in response text.
pub const ERROR_PREFIX: &str = "Error:";

const CHANGES_PROMPT: &str =
    "Write a concise commit message that summarizes the following changes in the repository:";

/// The tools this server exposes, with their input schemas.
pub fn tool_definitions() -> Vec<Tool> {
    vec![
        Tool::new(
            CHANGES_TOOL,
            "Get the current working tree changes (modified, added and deleted files with their \
             added and removed lines) to write a commit message from",
            object_schema(json!({
                "type": "object",
                "properties": {}
            })),
        ),
        Tool::new(
            COMMIT_TOOL,
            "Stage all changes, commit them with the given message, and push to the upstream branch",
            object_schema(json!({
                "type": "object",
                "properties": {
                    "message": {
                        "type": "string",
                        "description": "The commit message"
                    }
                },
                "required": ["message"]
            })),
        ),
    ]
}

fn object_schema(schema: Value) -> JsonObject {
    match schema {
        Value::Object(map) => map,
        _ => JsonObject::new(),
    }
}

/// Extract the commit request from raw tool arguments.
pub fn commit_request(arguments: Option<&JsonObject>) -> Result<CommitRequest, ToolError> {
    let value = arguments
        .and_then(|args| args.get("message"))
        .ok_or(ToolError::MissingArgument("message"))?;

    match value {
        Value::String(message) => Ok(CommitRequest {
            message: message.clone(),
        }),
        Value::Null => Err(ToolError::MissingArgument("message")),
        _ => Err(ToolError::InvalidArgument("message")),
    }
}

/// Instruction sentence followed by the change set as JSON in a diff block.
pub fn render_changes(changes: &ChangeSet) -> Result<String, ToolError> {
    let json = serde_json::to_string_pretty(changes)?;
    Ok(format!("{CHANGES_PROMPT}\n\n```diff\n{json}\n```"))
}

pub fn render_commit(message: &str) -> String {
    format!("Changes committed and pushed successfully with message: {message}")
}

pub fn render_error(err: &ToolError) -> String {
    format!("{ERROR_PREFIX} {err}")
}
