//! Git invocations for reading and publishing working-tree changes.
//!
//! The production client shells out to the system `git` binary, inheriting the
//! user's existing git config, SSH agent, and credential store. Every command
//! runs with the repository path as its working directory.

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::GitError;

/// One of the git invocations this crate performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitStep {
    Status,
    Diff,
    Stage,
    Commit,
    Push,
}

impl fmt::Display for GitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitStep::Status => write!(f, "status"),
            GitStep::Diff => write!(f, "diff"),
            GitStep::Stage => write!(f, "add"),
            GitStep::Commit => write!(f, "commit"),
            GitStep::Push => write!(f, "push"),
        }
    }
}

/// Trait for executing git commands against a working tree.
///
/// This abstraction allows mocking the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitClient: Send + Sync {
    /// Porcelain status of the working tree.
    async fn status(&self, repo: &Path) -> Result<String, GitError>;

    /// Diff of the working tree against the last commit.
    async fn diff(&self, repo: &Path) -> Result<String, GitError>;

    /// Stage every change in the working tree, including deletions.
    async fn stage_all(&self, repo: &Path) -> Result<String, GitError>;

    /// Create a commit from the index with exactly `message`.
    async fn commit(&self, repo: &Path, message: &str) -> Result<String, GitError>;

    /// Push the current branch to its configured upstream.
    async fn push(&self, repo: &Path) -> Result<String, GitError>;
}

/// Default client that calls the real git CLI.
///
/// Status and diff run with `core.quotePath=false` so non-ASCII paths come
/// back as raw UTF-8 in both outputs instead of quoted octal escapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandGitClient;

#[async_trait]
impl GitClient for CommandGitClient {
    async fn status(&self, repo: &Path) -> Result<String, GitError> {
        run_git(
            repo,
            GitStep::Status,
            &["-c", "core.quotePath=false", "status", "--porcelain"],
        )
        .await
    }

    async fn diff(&self, repo: &Path) -> Result<String, GitError> {
        run_git(
            repo,
            GitStep::Diff,
            &["-c", "core.quotePath=false", "diff", "HEAD"],
        )
        .await
    }

    async fn stage_all(&self, repo: &Path) -> Result<String, GitError> {
        run_git(repo, GitStep::Stage, &["add", "-A"]).await
    }

    async fn commit(&self, repo: &Path, message: &str) -> Result<String, GitError> {
        run_git(repo, GitStep::Commit, &["commit", "-m", message]).await
    }

    async fn push(&self, repo: &Path) -> Result<String, GitError> {
        run_git(repo, GitStep::Push, &["push"]).await
    }
}

/// Check if git is installed and accessible.
///
/// Uses the `which` crate for cross-platform executable detection.
pub async fn check_git_installed() -> Result<(), GitError> {
    if which::which("git").is_err() {
        return Err(GitError::NotInstalled);
    }

    let version_check = Command::new("git")
        .arg("--version")
        .output()
        .await
        .map_err(|_| GitError::NotInstalled)?;

    if !version_check.status.success() {
        return Err(GitError::NotInstalled);
    }

    Ok(())
}

/// Run a git command in `repo` and return its stdout.
///
/// Stdout is returned untrimmed: porcelain status lines carry meaningful
/// leading whitespace.
async fn run_git(repo: &Path, step: GitStep, args: &[&str]) -> Result<String, GitError> {
    debug!(%step, repo = %repo.display(), "Running git {}", args.join(" "));

    let output = Command::new("git")
        .args(args)
        .current_dir(repo)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|source| {
            if source.kind() == ErrorKind::NotFound && which::which("git").is_err() {
                GitError::NotInstalled
            } else {
                GitError::SpawnFailed { step, source }
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        warn!(%step, code = ?output.status.code(), "git {} failed: {}", step, stderr);
        return Err(GitError::NonZeroExit {
            step,
            code: output.status.code(),
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
