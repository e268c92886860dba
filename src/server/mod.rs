//! MCP server exposing the change-summary and commit tools over stdio.

pub mod handler;
pub mod tools;

pub use handler::GitChangesServer;
pub use tools::{CHANGES_TOOL, COMMIT_TOOL, ERROR_PREFIX, tool_definitions};
