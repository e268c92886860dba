//! git-changes-mcp - An MCP server for writing and publishing commits.
//!
//! # Overview
//!
//! The server exposes two tools. `git-changes-commit-message` reads
//! `git status --porcelain` and `git diff HEAD` and returns the pending changes
//! as structured JSON for drafting a commit message. `git-changes-commit`
//! stages everything, commits with the supplied message and pushes.
//!
//! All git work is delegated to the system `git` binary.

pub mod changes;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod server;

// Re-export commonly used types
pub use changes::{ChangeSet, FileDetails, parse_changes, read_changes};
pub use commit::{CommitRequest, commit_and_push};
pub use config::Config;
pub use error::{ConfigError, GitError, ToolError};
pub use git::{CommandGitClient, GitClient, GitStep};
pub use server::GitChangesServer;
