//! Error types for git-changes-mcp modules using thiserror.

use thiserror::Error;

use crate::git::GitStep;

/// Errors from invoking the external git executable.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found. Install git and make sure it is on PATH")]
    NotInstalled,

    #[error("Failed to run git {step}: {source}")]
    SpawnFailed {
        step: GitStep,
        #[source]
        source: std::io::Error,
    },

    #[error("git {step} exited with {}: {stderr}",
             code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    NonZeroExit {
        step: GitStep,
        code: Option<i32>,
        stderr: String,
    },
}

impl GitError {
    /// The step that failed, if the failure came from a specific invocation.
    pub fn step(&self) -> Option<GitStep> {
        match self {
            GitError::NotInstalled => None,
            GitError::SpawnFailed { step, .. } | GitError::NonZeroExit { step, .. } => {
                Some(*step)
            }
        }
    }
}

/// Errors raised while handling a tool call.
///
/// These never reach the protocol layer as failures; the server flattens them
/// into `Error: ...` response text.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    NotFound(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("Argument '{0}' must be a string")]
    InvalidArgument(&'static str),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error("Failed to serialize changes: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from resolving startup configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}
