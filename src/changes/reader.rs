//! Read the working tree's pending changes through a git client.

use std::path::Path;

use tracing::debug;

use crate::error::GitError;
use crate::git::GitClient;

use super::change_set::ChangeSet;
use super::parser::parse_changes;

/// Query status, then diff against HEAD, and parse both into a [`ChangeSet`].
///
/// The two queries run one after the other; a failure in either aborts the
/// read. Note that `git diff HEAD` fails in a repository with no commits yet.
pub async fn read_changes<C: GitClient + ?Sized>(
    client: &C,
    repo: &Path,
) -> Result<ChangeSet, GitError> {
    let status = client.status(repo).await?;
    let diff = client.diff(repo).await?;

    let changes = parse_changes(&status, &diff);
    debug!(
        modified = changes.modified.len(),
        added = changes.added.len(),
        deleted = changes.deleted.len(),
        diffed_files = changes.details.len(),
        "Read working tree changes"
    );

    Ok(changes)
}
