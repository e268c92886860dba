//! Stage, commit and push the working tree.

use std::path::Path;

use tracing::{debug, info};

use crate::error::GitError;
use crate::git::GitClient;

/// A commit requested by a caller.
///
/// The message is used exactly as given; it is not checked for emptiness,
/// length or special characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRequest {
    pub message: String,
}

/// Stage all changes, commit them with `message`, and push.
///
/// Steps:
/// 1. `git add -A` - stage every change, including deletions
/// 2. `git commit -m <message>` - create the commit
/// 3. `git push` - publish to the configured upstream
///
/// The first failing step stops the sequence and its error is returned.
/// Nothing is rolled back: a successful stage stays staged if the commit fails.
pub async fn commit_and_push<C: GitClient + ?Sized>(
    client: &C,
    repo: &Path,
    message: &str,
) -> Result<(), GitError> {
    client.stage_all(repo).await?;
    debug!("Staged all changes");

    let commit_output = client.commit(repo, message).await?;
    debug!("Commit created: {}", commit_output.lines().next().unwrap_or_default());

    client.push(repo).await?;
    info!(repo = %repo.display(), "Committed and pushed changes");

    Ok(())
}
