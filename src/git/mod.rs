//! Git subprocess client.

pub mod client;

pub use client::{CommandGitClient, GitClient, GitStep, check_git_installed};

#[cfg(test)]
pub use client::MockGitClient;
