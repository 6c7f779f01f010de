//! Changelog fragment directory inspection.
//!
//! Only entry names are read; fragment contents are left to the changelog
//! tool and no fragment is ever removed here.

use std::fs;
use std::path::Path;

use crate::domain::{malformed_fragments, ReleaseKind};
use crate::error::{FinalizeError, Result};

/// List every entry name in the fragment directory, sorted.
///
/// Subdirectories and dotfiles are included, matching what the changelog
/// tool sees.
pub fn list_fragments(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Determine which release to make based on the fragments in `dir`.
///
/// Every entry counts, the ignore file included. An empty directory has no
/// release kind and is an error.
pub fn release_kind(dir: &Path) -> Result<ReleaseKind> {
    let names = list_fragments(dir)?;
    let kind = ReleaseKind::from_names(&names).ok_or_else(|| FinalizeError::NoFragments {
        dir: dir.to_path_buf(),
    })?;
    tracing::debug!(fragments = names.len(), %kind, "resolved release kind");
    Ok(kind)
}

/// Verify that every fragment in `dir` other than `ignore` names a category.
pub fn check_changes(dir: &Path, ignore: &str, allowed: &[String]) -> Result<()> {
    let names = list_fragments(dir)?;
    let files = malformed_fragments(names.iter().map(String::as_str), ignore, allowed);
    if files.is_empty() {
        Ok(())
    } else {
        Err(FinalizeError::MalformedFragment { files })
    }
}
