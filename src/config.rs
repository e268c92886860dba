//! Startup configuration: which repository the server operates on.

use std::env;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::ConfigError;

/// Environment variable naming the repository root.
pub const REPOSITORY_PATH_ENV: &str = "REPOSITORY_PATH";

/// Configuration resolved once at startup and handed to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Working directory for every git invocation.
    pub repository_path: PathBuf,
}

impl Config {
    pub fn new(repository_path: impl Into<PathBuf>) -> Self {
        Self {
            repository_path: repository_path.into(),
        }
    }

    /// Resolve the repository path.
    ///
    /// Precedence: `cli_path`, then a non-empty `REPOSITORY_PATH`, then the
    /// current directory. A path that is not a directory is logged but kept;
    /// the first git call against it will report the problem.
    pub fn resolve(cli_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let repository_path = match cli_path {
            Some(path) => path,
            None => match env::var_os(REPOSITORY_PATH_ENV) {
                Some(value) if !value.is_empty() => PathBuf::from(value),
                _ => env::current_dir().map_err(ConfigError::CurrentDir)?,
            },
        };

        if !repository_path.is_dir() {
            warn!(
                "Repository path {} is not a directory",
                repository_path.display()
            );
        }

        Ok(Self::new(repository_path))
    }

    /// Resolve from the environment alone.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(None)
    }

    pub fn repository_path(&self) -> &Path {
        &self.repository_path
    }
}
