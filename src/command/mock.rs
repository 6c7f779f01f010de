use std::cell::RefCell;

use crate::command::{CapturedOutput, CommandRunner, Invocation};
use crate::error::{FinalizeError, Result};

/// Mock runner for testing without spawning processes
///
/// Responses and failures are matched by an argument equal to a configured
/// key (for example the module name `bumpversion`). Unmatched commands
/// succeed with empty output.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: Vec<(String, CapturedOutput)>,
    failures: Vec<(String, i32)>,
    calls: RefCell<Vec<Invocation>>,
}

impl MockRunner {
    /// Create a runner where every command succeeds silently
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `stdout` for commands carrying the argument `key`
    pub fn respond(mut self, key: impl Into<String>, stdout: impl Into<String>) -> Self {
        self.responses.push((
            key.into(),
            CapturedOutput {
                stdout: stdout.into(),
                stderr: String::new(),
            },
        ));
        self
    }

    /// Exit with `code` for commands carrying the argument `key`
    pub fn fail(mut self, key: impl Into<String>, code: i32) -> Self {
        self.failures.push((key.into(), code));
        self
    }

    /// Every invocation seen so far, in order
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    fn record(&self, invocation: &Invocation) -> Result<()> {
        self.calls.borrow_mut().push(invocation.clone());

        let failure = self
            .failures
            .iter()
            .find(|(key, _)| Self::matches(invocation, key));
        match failure {
            Some((_, code)) => Err(FinalizeError::Command {
                command: invocation.to_string(),
                code: *code,
                stderr: String::new(),
            }),
            None => Ok(()),
        }
    }

    fn matches(invocation: &Invocation, key: &str) -> bool {
        invocation.program == key || invocation.args.iter().any(|arg| arg == key)
    }
}

impl CommandRunner for MockRunner {
    fn check_output(&self, invocation: &Invocation) -> Result<CapturedOutput> {
        self.record(invocation)?;
        Ok(self
            .responses
            .iter()
            .find(|(key, _)| Self::matches(invocation, key))
            .map(|(_, output)| output.clone())
            .unwrap_or_default())
    }

    fn check_call(&self, invocation: &Invocation) -> Result<()> {
        self.record(invocation)
    }
}
