//! Release workflow orchestration
//!
//! Runs the release sequence independently of CLI argument parsing so it
//! can be driven with a mock command runner.

use std::path::PathBuf;

use crate::changelog;
use crate::command::CommandRunner;
use crate::config::Config;
use crate::domain::ReleaseKind;
use crate::error::Result;
use crate::release::Finalizer;
use crate::ui;

/// Arguments for the release workflow
///
/// Mirrors the CLI flags that affect the run, decoupled from clap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinalizeWorkflowArgs {
    /// Overrides the configured fragment directory
    pub changelog_dir: Option<PathBuf>,

    /// Stop after the precondition checks
    pub dry_run: bool,
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Bump category derived from the fragments
    pub kind: ReleaseKind,

    /// Version reported by the version tool
    pub version: String,

    /// Whether the changelog and version were actually updated
    pub applied: bool,
}

/// Main release workflow
///
/// 1. Classify the fragments and resolve the next version
/// 2. Check the git identity (`ensure_identity`)
/// 3. Check fragment names
/// 4. Render the changelog
/// 5. Bump and commit the version
///
/// Any failure stops the run; completed steps are not undone.
pub fn run_finalize_workflow<R, F>(
    args: &FinalizeWorkflowArgs,
    config: &Config,
    runner: &R,
    ensure_identity: F,
) -> Result<WorkflowResult>
where
    R: CommandRunner,
    F: FnOnce() -> Result<String>,
{
    let dir = args
        .changelog_dir
        .clone()
        .unwrap_or_else(|| config.changelog_dir.clone());

    let kind = changelog::release_kind(&dir)?;
    let finalizer = Finalizer::new(runner, &config.tools, kind);

    let version = finalizer.get_version()?;
    ui::display_status(&format!("Cutting release at {}", version));

    ensure_identity()?;
    changelog::check_changes(&dir, &config.ignore_file, &config.allowed_keywords)?;

    if args.dry_run {
        let fragments = changelog::list_fragments(&dir)?;
        ui::display_fragments(&fragments);
        ui::display_success(&format!(
            "Dry run: would make a {}",
            ui::format_release_summary(kind, &version, fragments.len())
        ));
        return Ok(WorkflowResult {
            kind,
            version,
            applied: false,
        });
    }

    ui::display_status("Updating changelog...");
    finalizer.update_changelog()?;

    ui::display_status(&format!("Bumping {} version...", kind));
    finalizer.bump_version()?;

    ui::display_success(&format!("Released {}", version));
    Ok(WorkflowResult {
        kind,
        version,
        applied: true,
    })
}
