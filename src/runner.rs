//! # External Process Execution
//!
//! Everything seda does happens in child processes: `git` clones and the
//! editor opens. This module puts process spawning behind the
//! `CommandRunner` trait so the workflow can be driven by a recording mock in
//! tests instead of real executables.
//!
//! `DefaultCommandRunner` is the real implementation. It looks the program up
//! on `PATH`, lets the child write straight to our stdout and stderr, and
//! blocks until the child exits. There is no timeout.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::process::{Command, ExitStatus, Stdio};

use log::debug;

/// How a finished child process exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    code: Option<i32>,
}

impl RunStatus {
    /// A status with the given exit code. `None` means the process was
    /// terminated by a signal.
    pub fn from_code(code: Option<i32>) -> Self {
        Self { code }
    }

    /// A successful (exit code 0) status.
    #[cfg(test)]
    pub fn success_status() -> Self {
        Self { code: Some(0) }
    }

    /// Whether the process exited with code 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// The exit code, if the process exited normally.
    pub fn code(&self) -> Option<i32> {
        self.code
    }
}

impl From<ExitStatus> for RunStatus {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status: {}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Trait for running external programs - allows mocking in tests
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args` to completion.
    ///
    /// Returns `Err` only when the program could not be started. A program
    /// that starts and fails is reported through the returned `RunStatus`.
    fn run(&self, program: &str, args: &[OsString]) -> io::Result<RunStatus>;
}

/// The default implementation of `CommandRunner`, which spawns real
/// processes with inherited standard streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultCommandRunner;

impl CommandRunner for DefaultCommandRunner {
    fn run(&self, program: &str, args: &[OsString]) -> io::Result<RunStatus> {
        debug!("Running {} {:?}", program, args);

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        debug!("{} finished with {}", program, status);
        Ok(status.into())
    }
}

/// Describe why a run did not succeed, for use in error messages.
pub(crate) fn failure_message(program: &str, outcome: &io::Result<RunStatus>) -> Option<String> {
    match outcome {
        Ok(status) if status.success() => None,
        Ok(status) => Some(format!("{} exited with {}", program, status)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Some(format!("{} not found on PATH", program))
        }
        Err(e) => Some(format!("failed to start {}: {}", program, e)),
    }
}
