//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use git2::{IndexAddOption, Oid, Repository, Signature};

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
    remote: Option<tempfile::TempDir>,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    ///
    /// Author identity is set in the repository config so the git CLI can commit.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        {
            let mut config = repo.config().expect("Failed to open repo config");
            config
                .set_str("user.name", "Test User")
                .expect("Failed to set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Failed to set user.email");
            config
                .set_bool("commit.gpgsign", false)
                .expect("Failed to disable commit signing");
        }
        Self {
            dir,
            repo,
            remote: None,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Get the test signature for commits.
    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Write a file relative to the repository root, creating parent dirs.
    pub fn write(&self, name: &str, contents: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(path, contents).expect("Failed to write test file");
    }

    pub fn remove(&self, name: &str) {
        std::fs::remove_file(self.dir.path().join(name)).expect("Failed to remove test file");
    }

    /// Stage a single path in the index.
    pub fn stage(&self, name: &str) {
        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(name)).expect("Failed to add file");
        index.write().expect("Failed to write index");
    }

    /// Stage everything and create a commit. Returns the commit OID.
    pub fn commit_all(&self, message: &str) -> Oid {
        let sig = self.signature();

        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
            .expect("Failed to add files");
        index
            .update_all(["*"].iter(), None)
            .expect("Failed to update index");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        // Get parent commit if exists
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Current branch name.
    pub fn branch(&self) -> String {
        self.repo
            .head()
            .ok()
            .and_then(|h| h.shorthand().map(|s| s.to_string()))
            .unwrap_or_else(|| "master".to_string())
    }

    /// Attach a bare `origin` remote and push the current branch with upstream tracking.
    ///
    /// Requires at least one commit.
    pub fn with_remote(mut self) -> Self {
        let remote_dir = tempfile::tempdir().expect("Failed to create remote dir");
        Repository::init_bare(remote_dir.path()).expect("Failed to init bare repo");

        self.repo
            .remote(
                "origin",
                remote_dir.path().to_str().expect("Invalid remote path"),
            )
            .expect("Failed to add origin remote");

        let status = Command::new("git")
            .args(["push", "-u", "origin", "HEAD"])
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to push to origin");
        assert!(status.status.success(), "git push failed in test setup");

        self.remote = Some(remote_dir);
        self
    }

    /// Summary line of the remote branch tip, if a remote is attached.
    pub fn remote_head_summary(&self) -> Option<String> {
        let remote_dir = self.remote.as_ref()?;
        let bare = Repository::open_bare(remote_dir.path()).ok()?;
        let reference = bare
            .find_reference(&format!("refs/heads/{}", self.branch()))
            .ok()?;
        let commit = reference.peel_to_commit().ok()?;
        commit.summary().map(|s| s.to_string())
    }

    /// Summary line of the local HEAD commit.
    pub fn head_summary(&self) -> Option<String> {
        let commit = self.repo.head().ok()?.peel_to_commit().ok()?;
        commit.summary().map(|s| s.to_string())
    }
}
