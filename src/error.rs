use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for finalize operations
#[derive(Error, Debug)]
pub enum FinalizeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No changelog fragments found in {}", dir.display())]
    NoFragments { dir: PathBuf },

    #[error("Malformed changelog fragment names: {}", files.join(", "))]
    MalformedFragment { files: Vec<String> },

    #[error("Git identity not configured: {0}")]
    GitIdentity(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Command `{command}` failed with exit code {code}: {stderr}")]
    Command {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No new_version= line in version tool output")]
    VersionNotFound,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in finalize
pub type Result<T> = std::result::Result<T, FinalizeError>;

impl FinalizeError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        FinalizeError::Config(msg.into())
    }

    /// Create a git identity error with context
    pub fn git_identity(msg: impl Into<String>) -> Self {
        FinalizeError::GitIdentity(msg.into())
    }
}
