//! Git identity checks.

use git2::{Config, ErrorCode, Repository};

use crate::error::{FinalizeError, Result};

/// Double-check that Git has an e-mail configured.
///
/// Looks at the configuration of the repository in the current directory
/// (which layers local over global and system settings), falling back to the
/// user's default configuration outside a repository.
pub fn ensure_config() -> Result<String> {
    let config = match Repository::discover(".") {
        Ok(repo) => repo.config()?,
        Err(_) => Config::open_default()?,
    };
    user_email(&config)
}

/// Read a non-empty `user.email` from a git configuration
pub fn user_email(config: &Config) -> Result<String> {
    match config.get_string("user.email") {
        Ok(email) if !email.trim().is_empty() => {
            tracing::debug!(%email, "git identity");
            Ok(email)
        }
        Ok(_) => Err(FinalizeError::git_identity("user.email is empty")),
        Err(e) if e.code() == ErrorCode::NotFound => Err(FinalizeError::git_identity(
            "user.email is not set; run `git config user.email <address>`",
        )),
        Err(e) => Err(e.into()),
    }
}
