use std::process::{Command, ExitStatus};

use crate::command::{CapturedOutput, CommandRunner, Invocation};
use crate::error::{FinalizeError, Result};

/// Runs commands as real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        SystemRunner
    }

    fn command(invocation: &Invocation) -> Command {
        tracing::debug!(command = %invocation, "running");
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        cmd
    }

    fn spawn_error(invocation: &Invocation, source: std::io::Error) -> FinalizeError {
        FinalizeError::Spawn {
            command: invocation.to_string(),
            source,
        }
    }

    fn check_status(invocation: &Invocation, status: ExitStatus, stderr: &str) -> Result<()> {
        if status.success() {
            return Ok(());
        }
        Err(FinalizeError::Command {
            command: invocation.to_string(),
            code: status.code().unwrap_or(-1),
            stderr: stderr.trim().to_string(),
        })
    }
}

impl CommandRunner for SystemRunner {
    fn check_output(&self, invocation: &Invocation) -> Result<CapturedOutput> {
        let output = Self::command(invocation)
            .output()
            .map_err(|e| Self::spawn_error(invocation, e))?;

        let captured = CapturedOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        Self::check_status(invocation, output.status, &captured.stderr)?;
        Ok(captured)
    }

    fn check_call(&self, invocation: &Invocation) -> Result<()> {
        let status = Self::command(invocation)
            .status()
            .map_err(|e| Self::spawn_error(invocation, e))?;

        // stderr went straight to the terminal
        Self::check_status(invocation, status, "")
    }
}
