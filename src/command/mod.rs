//! External command abstraction layer
//!
//! The release sequence is driven entirely by external tools. Running them
//! through the [CommandRunner] trait lets the workflow be exercised against
//! canned output in tests.
//!
//! - [system::SystemRunner]: spawns real processes with `std::process`
//! - [mock::MockRunner]: records invocations and replays configured output

pub mod mock;
pub mod system;

pub use mock::MockRunner;
pub use system::SystemRunner;

use std::fmt;

use crate::error::Result;

/// A program and its arguments, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Invocation {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Text captured from a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs external commands.
///
/// Both methods treat a non-zero exit as an error
/// ([crate::error::FinalizeError::Command]); a command that cannot be started
/// is [crate::error::FinalizeError::Spawn].
pub trait CommandRunner {
    /// Run the command and capture its output
    fn check_output(&self, invocation: &Invocation) -> Result<CapturedOutput>;

    /// Run the command with the terminal attached
    fn check_call(&self, invocation: &Invocation) -> Result<()>;
}
