//! Version resolution, changelog rendering and version bumping.
//!
//! Each step shells out to an external tool through a [CommandRunner]:
//! the version tool is asked for the next version in dry-run mode, the
//! changelog tool renders fragments under that version, and finally the
//! version tool is run for real.

use regex::Regex;

use crate::command::{CapturedOutput, CommandRunner, Invocation};
use crate::config::ToolsConfig;
use crate::domain::ReleaseKind;
use crate::error::{FinalizeError, Result};

/// Extract the value of the first `new_version=` line.
///
/// The value runs to the end of the line and is not validated.
pub fn parse_new_version(output: &str) -> Option<String> {
    let re = Regex::new(r"(?m)^new_version=(.*)").ok()?;
    re.captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end_matches('\r').to_string())
}

fn version_from_output(output: &CapturedOutput) -> Result<String> {
    parse_new_version(&output.stdout)
        .or_else(|| parse_new_version(&output.stderr))
        .ok_or(FinalizeError::VersionNotFound)
}

/// Drives the external release tools for one release kind
pub struct Finalizer<'a, R: CommandRunner> {
    runner: &'a R,
    tools: &'a ToolsConfig,
    kind: ReleaseKind,
}

impl<'a, R: CommandRunner> Finalizer<'a, R> {
    pub fn new(runner: &'a R, tools: &'a ToolsConfig, kind: ReleaseKind) -> Self {
        Finalizer {
            runner,
            tools,
            kind,
        }
    }

    pub fn kind(&self) -> ReleaseKind {
        self.kind
    }

    fn module(&self, module: &str) -> Invocation {
        Invocation::new(&self.tools.interpreter).args(["-m", module])
    }

    /// `<interpreter> -m <bump module> <kind>`
    pub fn bump_version_command(&self) -> Invocation {
        self.module(&self.tools.bump_module).arg(self.kind.as_str())
    }

    /// Ask the version tool what the next version would be.
    pub fn get_version(&self) -> Result<String> {
        let cmd = self.bump_version_command().args(["--dry-run", "--verbose"]);
        let output = self.runner.check_output(&cmd)?;
        let version = version_from_output(&output)?;

        if semver::Version::parse(&version).is_err() {
            tracing::warn!(%version, "resolved version is not a semantic version");
        }
        Ok(version)
    }

    /// Render the pending fragments into the changelog under the next version.
    pub fn update_changelog(&self) -> Result<()> {
        let version = self.get_version()?;
        let cmd = self
            .module(&self.tools.changelog_module)
            .args(["--version", version.as_str(), "--yes"]);
        self.runner.check_call(&cmd)
    }

    /// Bump and commit the stored version, tolerating the changelog edits.
    pub fn bump_version(&self) -> Result<()> {
        let cmd = self.bump_version_command().arg("--allow-dirty");
        self.runner.check_call(&cmd)
    }
}
