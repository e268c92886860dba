//! Publishing working-tree changes: stage, commit and push.

pub mod writer;

pub use writer::{CommitRequest, commit_and_push};
