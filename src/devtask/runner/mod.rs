//! # Process Runner
//!
//! Every external program `devtask` starts goes through the [`ProcessRunner`]
//! trait, and so does the readiness pause after `start`. Keeping both behind a
//! trait lets the executor be tested without spawning anything or sleeping.
//!
//! ## Implementations
//!
//! - [`system::SystemRunner`]: spawns real processes with `std::process::Command`
//!   and blocks until they exit. Stdio is inherited, so tool output goes
//!   straight to the user's terminal.
//! - [`recording::RecordingRunner`]: records what would have run and returns
//!   scripted exit statuses (test builds and the `test_utils` feature only).

use crate::error::Result;
use crate::steps::CommandLine;
use std::fmt;
use std::path::Path;
use std::time::Duration;

#[cfg(any(test, feature = "test_utils"))]
pub mod recording;
pub mod system;

/// How an external process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    pub success: bool,
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl RunStatus {
    pub fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    pub fn failed(code: i32) -> Self {
        Self {
            success: false,
            code: Some(code),
        }
    }
}

impl From<std::process::ExitStatus> for RunStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            success: status.success(),
            code: status.code(),
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {}", code),
            None => f.write_str("a signal"),
        }
    }
}

/// Output of a capturing run. Stderr is not captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub status: RunStatus,
    pub stdout: String,
}

pub trait ProcessRunner {
    /// Run to completion with inherited stdio.
    fn run(&mut self, command: &CommandLine, dir: &Path) -> Result<RunStatus>;

    /// Run to completion, collecting stdout.
    fn capture(&mut self, command: &CommandLine, dir: &Path) -> Result<Captured>;

    /// Block for the given duration.
    fn pause(&mut self, duration: Duration);
}
